//! Host signals and the subscription seam.
//!
//! Monitors never call back into the host on their own. The host raises a
//! [`Signal`] and [`crate::MonitorHost`] dispatches it to every monitor whose
//! [`SubscriptionId`] is listed for that signal by a [`HostEvents`]
//! implementation. [`EventHub`] is the in-process implementation used by the
//! client and the tests.
mod hub;

pub use hub::EventHub;

use std::fmt;

use crate::error::HostError;

/// Host callbacks a monitor can be attached to.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Signal {
    /// HUD is about to be drawn; icons are placed here.
    PreRender,
    /// HUD finished drawing; hover text goes on top of everything else.
    PostRender,
    DayStarted,
    /// Fixed-rate game update.
    PeriodicTick,
}

impl Signal {
    pub const ALL: [Signal; 4] = [
        Signal::PreRender,
        Signal::PostRender,
        Signal::DayStarted,
        Signal::PeriodicTick,
    ];
}

/// Opaque handle of a subscriber, stable for the lifetime of the host.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct SubscriptionId(pub u32);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub#{}", self.0)
    }
}

/// Event registration surface offered by the host.
///
/// Mirrors additive handler lists: subscribing twice attaches twice, and
/// unsubscribing something that is not attached does nothing.
pub trait HostEvents {
    fn subscribe(&mut self, signal: Signal, subscriber: SubscriptionId) -> Result<(), HostError>;

    fn unsubscribe(&mut self, signal: Signal, subscriber: SubscriptionId);

    /// Current subscribers of `signal`, in subscription order.
    fn subscribers(&self, signal: Signal) -> Vec<SubscriptionId>;
}
