//! Paced day/tick/frame simulation driving a [`MonitorHost`].
//!
//! Each simulated day:
//! - overnight growth readies crops, adds fruit to trees, and renews pond requests
//! - `day_started` is raised for every viewer
//! - ticks advance in frame-sized steps; every step raises `update_ticked` and
//!   renders one frame per viewer
//! - at midday the player harvests the first region with ready crops and
//!   delivers every pond request
//! - on the last frame the main viewer's pointer rests on the first icon, so its
//!   tooltip is printed

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use strum::IntoEnumIterator;
use tracing::info;
use watch_core::{
    Entity, FruitTree, MonitorDomain, MonitorKind, Rect, StaticScene, ViewerId, WatchConfig,
    WorldOracle,
};
use watch_runtime::{MonitorHost, MonitorId, OracleManager, WorldOracleImpl};

use crate::canvas::{ScriptedPointer, TerminalCanvas};
use crate::config::ClientConfig;

/// Ticks covered by one rendered frame.
const TICKS_PER_FRAME: u64 = 60;

pub struct Session {
    config: ClientConfig,
    host: MonitorHost,
    oracles: OracleManager,
    monitors: Vec<(MonitorKind, MonitorId)>,
    last_icons: HashMap<ViewerId, Rect>,
}

impl Session {
    /// Registers one monitor per kind and enables those switched on in the
    /// runtime configuration for every viewer.
    pub fn new(config: ClientConfig, watch: WatchConfig, oracles: OracleManager) -> Result<Self> {
        let mut host = MonitorHost::new(watch).with_play_area_width(config.runtime.play_area_width);
        let mut monitors = Vec::new();

        for kind in MonitorKind::iter() {
            let id = host.register(MonitorDomain::for_kind(kind));
            if config.runtime.is_enabled(kind) {
                for viewer in viewers(&config) {
                    host.set_enabled(id, viewer, true, &oracles)?;
                }
            }
            monitors.push((kind, id));
        }

        Ok(Self {
            config,
            host,
            oracles,
            monitors,
            last_icons: HashMap::new(),
        })
    }

    pub async fn run(mut self) -> Result<()> {
        let period = Duration::from_millis(self.config.frame_interval_ms.max(1));
        let mut frames = tokio::time::interval(period);
        let ticks_per_day = self.config.ticks_per_day;
        let mut absolute_tick = 0u64;

        for day in 1..=self.config.days {
            if day > 1 {
                grow_overnight(self.oracles.world_mut());
            }
            for viewer in viewers(&self.config) {
                self.host.day_started(viewer, &self.oracles);
            }
            self.log_status(day);

            let mut tick = 0;
            while tick < ticks_per_day {
                if tick == ticks_per_day / 2 {
                    let harvested = harvest_first_ready_region(self.oracles.world_mut());
                    let delivered = deliver_pond_requests(self.oracles.world_mut());
                    info!(day, ?harvested, delivered, "midday chores");
                }

                frames.tick().await;
                let last_frame = tick + TICKS_PER_FRAME >= ticks_per_day;
                for viewer in viewers(&self.config) {
                    self.host.update_ticked(viewer, absolute_tick, &self.oracles);
                    self.render(viewer, last_frame && viewer == ViewerId::MAIN);
                }

                tick += TICKS_PER_FRAME;
                absolute_tick += TICKS_PER_FRAME;
            }
        }

        self.host.dispose_all();
        info!("session finished");
        Ok(())
    }

    fn render(&mut self, viewer: ViewerId, hover: bool) {
        let pointer = match (hover, self.last_icons.get(&viewer)) {
            (true, Some(icon)) => ScriptedPointer::over(*icon),
            _ => ScriptedPointer::away(),
        };
        let mut canvas = TerminalCanvas::new(viewer);
        let report = self
            .host
            .render_frame(viewer, &StaticScene::default(), &pointer, &mut canvas);

        match report.icons.first() {
            Some((_, icon)) => {
                self.last_icons.insert(viewer, *icon);
            }
            None => {
                self.last_icons.remove(&viewer);
            }
        }
        tracing::trace!(%viewer, icons = canvas.icons_drawn(), "frame");
    }

    fn log_status(&self, day: u32) {
        for (kind, id) in &self.monitors {
            let Some(monitor) = self.host.monitor(*id) else {
                continue;
            };
            info!(
                day,
                monitor = %kind,
                enabled = self.host.is_enabled(*id),
                active = monitor.active_regions(ViewerId::MAIN).len(),
                "day started"
            );
        }
    }
}

fn viewers(config: &ClientConfig) -> Vec<ViewerId> {
    (0..config.runtime.viewers).map(ViewerId).collect()
}

/// Overnight growth: crops ripen, trees gain a fruit, and fed ponds ask again.
fn grow_overnight(world: &mut WorldOracleImpl) {
    for entity in world.all_entities_mut() {
        match entity {
            Entity::CropPlot(plot) => plot.ready_for_harvest = true,
            Entity::FruitTree(tree) => {
                tree.fruits_on_tree = (tree.fruits_on_tree + 1).min(FruitTree::MAX_FRUITS);
            }
            Entity::FishPond(pond) => {
                if pond.wanted.is_some() {
                    pond.needs_resolved = false;
                }
            }
        }
    }
}

/// Harvests every ready crop of the first region that has one; returns its name.
fn harvest_first_ready_region(world: &mut WorldOracleImpl) -> Option<String> {
    for region in world.regions() {
        let Some(entities) = world.entities_mut(region.id) else {
            continue;
        };
        let mut harvested = false;
        for entity in entities.iter_mut() {
            if let Entity::CropPlot(plot) = entity
                && plot.ready_for_harvest
            {
                plot.ready_for_harvest = false;
                harvested = true;
            }
        }
        if harvested {
            return Some(region.name);
        }
    }
    None
}

fn deliver_pond_requests(world: &mut WorldOracleImpl) -> usize {
    let mut delivered = 0;
    for entity in world.all_entities_mut() {
        if let Entity::FishPond(pond) = entity
            && pond.has_unresolved_needs()
        {
            pond.needs_resolved = true;
            delivered += 1;
        }
    }
    delivered
}
