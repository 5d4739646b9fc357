//! Generic readiness monitor.
//!
//! One [`ReadinessMonitor`] drives one HUD icon. It caches, per viewer, the
//! regions that currently hold ready entities together with the hover text built
//! from them, and answers the host's draw and hover callbacks from that cache.
//!
//! # Refresh cycle
//!
//! - A **reset** (day start, enabling the monitor) enumerates every eligible
//!   region from scratch.
//! - An **incremental** refresh (every `refresh_cadence` ticks) only re-filters
//!   the regions already tracked. It can drop regions but never adds one, so
//!   between two resets the tracked set only shrinks.
//! - Once a viewer's tracked set is empty, periodic ticks do nothing at all
//!   until the next reset.
//!
//! A refresh whose world query fails leaves the previous cache untouched but
//! hides the icon until a later refresh succeeds.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::WatchConfig;
use crate::domain::{MonitorDomain, MonitorKind};
use crate::env::{Entity, ItemId, NameOracle, RegionInfo, WorldOracle};
use crate::error::{MonitorError, WatchError};
use crate::hud::{HudCanvas, PointerInput, SceneState};
use crate::layout::{IconSlotAllocator, Rect};
use crate::summary::{Summary, SummaryBuilder};
use crate::viewer::{PerViewer, ViewerId};

/// Cached monitor state for one viewer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorState {
    /// Regions holding at least one ready entity as of the last refresh.
    pub active: Vec<RegionInfo>,
    /// Hover text; empty exactly when `active` is empty.
    pub summary: String,
    /// Where the icon was drawn this frame, if it was drawn.
    pub icon: Option<Rect>,
    /// Set when the last refresh aborted; the icon stays hidden meanwhile.
    pub refresh_failed: bool,
}

impl MonitorState {
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    fn clear(&mut self) {
        self.active.clear();
        self.summary.clear();
        self.icon = None;
        self.refresh_failed = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshMode {
    /// Re-enumerate every eligible region.
    Reset,
    /// Re-filter the regions already tracked.
    Incremental,
}

/// Result of the post-render hover check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverOutcome {
    /// Pointer not over the icon, or nothing to show.
    Hidden,
    /// Tooltip drawn.
    Shown,
    /// Tooltip drawn and the viewer dismissed the icon with the secondary button.
    Dismissed,
}

pub struct ReadinessMonitor {
    domain: MonitorDomain,
    config: WatchConfig,
    states: PerViewer<MonitorState>,
    reported_unknown: HashSet<ItemId>,
}

impl ReadinessMonitor {
    pub fn new(domain: MonitorDomain, config: WatchConfig) -> Self {
        Self {
            domain,
            config: config.normalized(),
            states: PerViewer::default(),
            reported_unknown: HashSet::new(),
        }
    }

    pub fn domain(&self) -> &MonitorDomain {
        &self.domain
    }

    pub fn kind(&self) -> MonitorKind {
        self.domain.kind
    }

    pub fn state(&self, viewer: ViewerId) -> Option<&MonitorState> {
        self.states.peek(viewer)
    }

    pub fn active_regions(&self, viewer: ViewerId) -> &[RegionInfo] {
        self.states
            .peek(viewer)
            .map(|state| state.active.as_slice())
            .unwrap_or_default()
    }

    pub fn summary(&self, viewer: ViewerId) -> &str {
        self.states
            .peek(viewer)
            .map(|state| state.summary.as_str())
            .unwrap_or_default()
    }

    pub fn icon_bounds(&self, viewer: ViewerId) -> Option<Rect> {
        self.states.peek(viewer).and_then(|state| state.icon)
    }

    /// Recomputes the viewer's tracked regions and hover text.
    ///
    /// On error the viewer's regions and summary are left as they were and the
    /// icon is hidden until the next successful refresh.
    pub fn refresh(
        &mut self,
        viewer: ViewerId,
        mode: RefreshMode,
        world: &dyn WorldOracle,
        names: &dyn NameOracle,
    ) -> Result<(), MonitorError> {
        let (active, summary) = match self.scan(viewer, mode, world, names) {
            Ok(scanned) => scanned,
            Err(error) => {
                if let Some(state) = self.states.peek_mut(viewer) {
                    state.refresh_failed = true;
                    state.icon = None;
                }
                return Err(error);
            }
        };
        self.report_skipped(&summary.skipped);

        let state = self.states.get_mut(viewer);
        state.active = active;
        state.summary = summary.text;
        state.refresh_failed = false;
        if state.active.is_empty() {
            state.icon = None;
        }

        debug!(
            target: "watch::monitor",
            monitor = %self.domain.kind,
            %viewer,
            ?mode,
            active = state.active.len(),
            "refreshed"
        );
        Ok(())
    }

    /// Eligibility, readiness filter, and aggregation without touching state.
    fn scan(
        &self,
        viewer: ViewerId,
        mode: RefreshMode,
        world: &dyn WorldOracle,
        names: &dyn NameOracle,
    ) -> Result<(Vec<RegionInfo>, Summary), MonitorError> {
        let domain = &self.domain;

        let candidates = match mode {
            RefreshMode::Reset => {
                let mut eligible = Vec::new();
                for region in world.regions() {
                    if domain.eligibility.admits(&region, world)? {
                        eligible.push(region);
                    }
                }
                eligible
            }
            RefreshMode::Incremental => self.active_regions(viewer).to_vec(),
        };

        let readiness = domain.readiness;
        let mut builder = SummaryBuilder::new(domain, names);
        let mut active = Vec::with_capacity(candidates.len());

        for region in candidates {
            let ready: Vec<Entity> = world
                .entities(region.id, readiness.kind())?
                .into_iter()
                .filter(|entity| readiness.is_ready(entity))
                .collect();
            if ready.is_empty() {
                continue;
            }
            builder.push_region(&region, &ready);
            active.push(region);
        }

        Ok((active, builder.finish()))
    }

    /// Periodic tick handler. Returns whether an incremental refresh ran.
    pub fn on_periodic_tick(
        &mut self,
        viewer: ViewerId,
        tick: u64,
        world: &dyn WorldOracle,
        names: &dyn NameOracle,
    ) -> bool {
        let idle = self.states.peek(viewer).is_none_or(MonitorState::is_idle);
        if idle || tick % self.config.refresh_cadence != 0 {
            return false;
        }
        self.refresh_or_keep(viewer, RefreshMode::Incremental, world, names);
        true
    }

    pub fn on_day_started(
        &mut self,
        viewer: ViewerId,
        world: &dyn WorldOracle,
        names: &dyn NameOracle,
    ) {
        self.refresh_or_keep(viewer, RefreshMode::Reset, world, names);
    }

    /// Draws the icon into the next free slot when something is ready.
    ///
    /// Returns the icon rectangle when drawn. Nothing is drawn while a scripted
    /// event is playing.
    pub fn on_pre_render(
        &mut self,
        viewer: ViewerId,
        scene: &dyn SceneState,
        allocator: &mut IconSlotAllocator,
        canvas: &mut dyn HudCanvas,
    ) -> Option<Rect> {
        let state = self.states.peek_mut(viewer)?;

        if scene.is_event_up() || state.is_idle() || state.refresh_failed {
            state.icon = None;
            return None;
        }

        let bounds = Rect::square(allocator.next_slot(), self.config.icon_size);
        canvas.draw_icon(&self.domain.sprite, self.config.sprite_scale, bounds);
        state.icon = Some(bounds);
        Some(bounds)
    }

    /// Shows the hover text when the pointer rests on this frame's icon.
    ///
    /// Holding the secondary button while the tooltip is up dismisses the icon
    /// until the next reset.
    pub fn on_post_render(
        &mut self,
        viewer: ViewerId,
        pointer: &dyn PointerInput,
        canvas: &mut dyn HudCanvas,
    ) -> HoverOutcome {
        let Some(state) = self.states.peek_mut(viewer) else {
            return HoverOutcome::Hidden;
        };
        let hovered = state
            .icon
            .is_some_and(|bounds| bounds.contains(pointer.pointer_position()));
        if state.is_idle() || !hovered {
            return HoverOutcome::Hidden;
        }

        canvas.draw_hover_text(&state.summary, self.config.tooltip_font);

        if pointer.is_secondary_down() {
            state.clear();
            info!(target: "watch::monitor", monitor = %self.domain.kind, %viewer, "dismissed");
            return HoverOutcome::Dismissed;
        }
        HoverOutcome::Shown
    }

    /// Drops the viewer's tracked regions and hover text immediately.
    pub fn dismiss(&mut self, viewer: ViewerId) {
        if let Some(state) = self.states.peek_mut(viewer) {
            state.clear();
        }
    }

    /// Forgets cached state for every viewer.
    pub fn clear_all(&mut self) {
        self.states.clear();
        self.reported_unknown.clear();
    }

    fn refresh_or_keep(
        &mut self,
        viewer: ViewerId,
        mode: RefreshMode,
        world: &dyn WorldOracle,
        names: &dyn NameOracle,
    ) {
        if let Err(error) = self.refresh(viewer, mode, world, names) {
            warn!(
                target: "watch::monitor",
                monitor = %self.domain.kind,
                %viewer,
                ?mode,
                code = error.error_code(),
                severity = error.severity().as_str(),
                %error,
                "refresh failed, keeping previous state"
            );
        }
    }

    fn report_skipped(&mut self, skipped: &[MonitorError]) {
        for error in skipped {
            let MonitorError::UnknownItem(item) = error else {
                continue;
            };
            if self.reported_unknown.insert(*item) {
                warn!(
                    target: "watch::monitor",
                    monitor = %self.domain.kind,
                    %item,
                    "skipping entity with unknown item"
                );
            }
        }
    }
}
