//! Monitor ownership and signal dispatch.
//!
//! [`MonitorHost`] owns every registered [`ReadinessMonitor`] and the single
//! [`IconSlotAllocator`] they share. Host signals arrive as method calls
//! (`render_frame`, `update_ticked`, `day_started`); the host asks its
//! [`HostEvents`] table which monitors are attached and forwards the call to each
//! of them in subscription order.
//!
//! Enabling a monitor always detaches it from all four signals first, so
//! repeated toggles can never leave duplicate subscriptions behind.

use std::fmt;

use tracing::{debug, info};
use watch_core::{
    HoverOutcome, HudCanvas, IconSlotAllocator, MonitorDomain, PointerInput, ReadinessMonitor,
    Rect, SceneState, SlotLayout, ViewerId, WatchConfig,
};

use crate::error::{Result, RuntimeError};
use crate::events::{EventHub, HostEvents, Signal, SubscriptionId};
use crate::oracle::OracleManager;

/// Handle of a monitor registered with a [`MonitorHost`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct MonitorId(pub u32);

impl MonitorId {
    fn index(self) -> usize {
        self.0 as usize
    }

    pub fn subscription(self) -> SubscriptionId {
        SubscriptionId(self.0)
    }
}

impl From<SubscriptionId> for MonitorId {
    fn from(id: SubscriptionId) -> Self {
        MonitorId(id.0)
    }
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monitor#{}", self.0)
    }
}

/// What one frame drew, for callers that log or assert on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub icons: Vec<(MonitorId, Rect)>,
    /// Monitors whose tooltip was shown or dismissed; hidden outcomes are omitted.
    pub hovers: Vec<(MonitorId, HoverOutcome)>,
}

pub struct MonitorHost<H: HostEvents = EventHub> {
    events: H,
    config: WatchConfig,
    monitors: Vec<ReadinessMonitor>,
    allocator: IconSlotAllocator,
    play_area_width: i32,
    reserved_slots: usize,
}

impl MonitorHost<EventHub> {
    pub fn new(config: WatchConfig) -> Self {
        Self::with_events(EventHub::new(), config)
    }
}

impl<H: HostEvents> MonitorHost<H> {
    pub fn with_events(events: H, config: WatchConfig) -> Self {
        let config = config.normalized();
        Self {
            events,
            allocator: IconSlotAllocator::new(SlotLayout::from_config(&config)),
            config,
            monitors: Vec::new(),
            play_area_width: 1280,
            reserved_slots: 0,
        }
    }

    pub fn with_play_area_width(mut self, width: i32) -> Self {
        self.play_area_width = width;
        self
    }

    pub fn set_play_area_width(&mut self, width: i32) {
        self.play_area_width = width;
    }

    /// Slots at the head of the row taken by other HUD buttons this frame.
    pub fn set_reserved_slots(&mut self, count: usize) {
        self.reserved_slots = count;
    }

    /// Adds a monitor in the disabled state.
    pub fn register(&mut self, domain: MonitorDomain) -> MonitorId {
        let id = MonitorId(self.monitors.len() as u32);
        self.monitors
            .push(ReadinessMonitor::new(domain, self.config.clone()));
        debug!(target: "watch::host", monitor = %id, kind = %domain.kind, "registered");
        id
    }

    /// Attaches or detaches a monitor.
    ///
    /// Enabling runs a full reset for `viewer` before subscribing. Disabling
    /// drops the cached state of every viewer. If the host rejects a
    /// subscription the monitor is left fully detached and the error returned.
    pub fn set_enabled(
        &mut self,
        id: MonitorId,
        viewer: ViewerId,
        enabled: bool,
        oracles: &OracleManager,
    ) -> Result<()> {
        let monitor = self
            .monitors
            .get_mut(id.index())
            .ok_or(RuntimeError::UnknownMonitor(id))?;
        let subscription = id.subscription();

        for signal in Signal::ALL {
            self.events.unsubscribe(signal, subscription);
        }

        if !enabled {
            monitor.clear_all();
            info!(target: "watch::host", monitor = %id, kind = %monitor.kind(), "disabled");
            return Ok(());
        }

        monitor.on_day_started(viewer, oracles.world(), oracles.names());

        for signal in Signal::ALL {
            if let Err(error) = self.events.subscribe(signal, subscription) {
                for attached in Signal::ALL {
                    self.events.unsubscribe(attached, subscription);
                }
                monitor.clear_all();
                return Err(error.into());
            }
        }

        info!(
            target: "watch::host",
            monitor = %id,
            kind = %monitor.kind(),
            %viewer,
            active = monitor.active_regions(viewer).len(),
            "enabled"
        );
        Ok(())
    }

    /// Detaches the monitor and forgets all of its cached state.
    pub fn dispose(&mut self, id: MonitorId) -> Result<()> {
        let monitor = self
            .monitors
            .get_mut(id.index())
            .ok_or(RuntimeError::UnknownMonitor(id))?;
        for signal in Signal::ALL {
            self.events.unsubscribe(signal, id.subscription());
        }
        monitor.clear_all();
        debug!(target: "watch::host", monitor = %id, "disposed");
        Ok(())
    }

    pub fn dispose_all(&mut self) {
        for (index, monitor) in self.monitors.iter_mut().enumerate() {
            let subscription = MonitorId(index as u32).subscription();
            for signal in Signal::ALL {
                self.events.unsubscribe(signal, subscription);
            }
            monitor.clear_all();
        }
    }

    /// Draws one HUD frame for `viewer`.
    ///
    /// The allocator is rewound once, then every pre-render subscriber places
    /// its icon, then every post-render subscriber checks hover.
    pub fn render_frame(
        &mut self,
        viewer: ViewerId,
        scene: &dyn SceneState,
        pointer: &dyn PointerInput,
        canvas: &mut dyn HudCanvas,
    ) -> FrameReport {
        self.allocator.begin_frame(self.play_area_width);
        self.allocator.reserve_leading_slots(self.reserved_slots);

        let mut report = FrameReport::default();

        for id in self.attached(Signal::PreRender) {
            let Some(monitor) = self.monitors.get_mut(id.index()) else {
                continue;
            };
            if let Some(bounds) = monitor.on_pre_render(viewer, scene, &mut self.allocator, canvas)
            {
                report.icons.push((id, bounds));
            }
        }

        for id in self.attached(Signal::PostRender) {
            let Some(monitor) = self.monitors.get_mut(id.index()) else {
                continue;
            };
            match monitor.on_post_render(viewer, pointer, canvas) {
                HoverOutcome::Hidden => {}
                outcome => report.hovers.push((id, outcome)),
            }
        }

        report
    }

    /// Forwards a periodic tick; returns how many monitors refreshed.
    pub fn update_ticked(&mut self, viewer: ViewerId, tick: u64, oracles: &OracleManager) -> usize {
        let mut refreshed = 0;
        for id in self.attached(Signal::PeriodicTick) {
            let Some(monitor) = self.monitors.get_mut(id.index()) else {
                continue;
            };
            if monitor.on_periodic_tick(viewer, tick, oracles.world(), oracles.names()) {
                refreshed += 1;
            }
        }
        refreshed
    }

    pub fn day_started(&mut self, viewer: ViewerId, oracles: &OracleManager) {
        for id in self.attached(Signal::DayStarted) {
            if let Some(monitor) = self.monitors.get_mut(id.index()) {
                monitor.on_day_started(viewer, oracles.world(), oracles.names());
            }
        }
    }

    pub fn is_enabled(&self, id: MonitorId) -> bool {
        self.events
            .subscribers(Signal::PreRender)
            .contains(&id.subscription())
    }

    pub fn monitor(&self, id: MonitorId) -> Option<&ReadinessMonitor> {
        self.monitors.get(id.index())
    }

    pub fn monitor_ids(&self) -> impl Iterator<Item = MonitorId> + '_ {
        (0..self.monitors.len()).map(|index| MonitorId(index as u32))
    }

    pub fn events(&self) -> &H {
        &self.events
    }

    pub fn allocator(&self) -> &IconSlotAllocator {
        &self.allocator
    }

    fn attached(&self, signal: Signal) -> Vec<MonitorId> {
        self.events
            .subscribers(signal)
            .into_iter()
            .map(MonitorId::from)
            .collect()
    }
}
