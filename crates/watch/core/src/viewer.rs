//! Viewer-scoped state.
//!
//! In split-screen sessions every participant sees their own HUD. Monitors keep
//! one copy of their mutable state per viewer so that a dismissal, hover, or
//! refresh on one screen is invisible to the others.

use std::collections::HashMap;
use std::fmt;

/// Identifies one concurrent viewer (screen) of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ViewerId(pub u8);

impl ViewerId {
    /// The primary screen; the only viewer in single-player sessions.
    pub const MAIN: Self = Self(0);
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewer#{}", self.0)
    }
}

/// A value per viewer, created lazily from a factory on first access.
pub struct PerViewer<T> {
    values: HashMap<ViewerId, T>,
    factory: fn() -> T,
}

impl<T> PerViewer<T> {
    pub fn new(factory: fn() -> T) -> Self {
        Self {
            values: HashMap::new(),
            factory,
        }
    }

    /// Returns the viewer's value, if it was ever created.
    pub fn peek(&self, viewer: ViewerId) -> Option<&T> {
        self.values.get(&viewer)
    }

    pub fn peek_mut(&mut self, viewer: ViewerId) -> Option<&mut T> {
        self.values.get_mut(&viewer)
    }

    /// Returns the viewer's value, creating it with the factory on first access.
    pub fn get_mut(&mut self, viewer: ViewerId) -> &mut T {
        let factory = self.factory;
        self.values.entry(viewer).or_insert_with(factory)
    }

    /// Replaces the viewer's value with a fresh default.
    pub fn reset(&mut self, viewer: ViewerId) {
        self.values.insert(viewer, (self.factory)());
    }

    /// Drops every viewer's value; later accesses start from defaults again.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Viewers that currently own a value, in ascending order.
    pub fn viewers(&self) -> Vec<ViewerId> {
        let mut viewers: Vec<_> = self.values.keys().copied().collect();
        viewers.sort();
        viewers
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: Default> Default for PerViewer<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug> fmt::Debug for PerViewer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_created_lazily_per_viewer() {
        let mut counters: PerViewer<u32> = PerViewer::new(|| 7);
        assert!(counters.peek(ViewerId::MAIN).is_none());

        *counters.get_mut(ViewerId(1)) += 1;
        assert_eq!(counters.peek(ViewerId(1)), Some(&8));
        assert!(counters.peek(ViewerId::MAIN).is_none());
        assert_eq!(counters.viewers(), vec![ViewerId(1)]);
    }

    #[test]
    fn mutating_one_viewer_leaves_others_untouched() {
        let mut lists: PerViewer<Vec<&str>> = PerViewer::default();
        lists.get_mut(ViewerId::MAIN).push("farm");
        lists.get_mut(ViewerId(1)).push("greenhouse");

        lists.reset(ViewerId(1));

        assert_eq!(lists.peek(ViewerId::MAIN), Some(&vec!["farm"]));
        assert_eq!(lists.peek(ViewerId(1)), Some(&Vec::new()));
    }

    #[test]
    fn clear_drops_every_viewer() {
        let mut lists: PerViewer<Vec<u8>> = PerViewer::default();
        lists.get_mut(ViewerId::MAIN).push(1);
        lists.get_mut(ViewerId(2)).push(2);
        lists.clear();
        assert!(lists.is_empty());
    }
}
