//! Host-level configuration read from the process environment.
use std::env;

use watch_core::MonitorKind;

/// Which monitors start enabled and how the host lays out its screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub show_harvestable_crops: bool,
    pub show_harvestable_trees: bool,
    pub show_ponds_with_needs: bool,
    /// Number of split-screen viewers, 1..=4.
    pub viewers: u8,
    pub play_area_width: i32,
}

impl RuntimeConfig {
    pub const MAX_VIEWERS: u8 = 4;
    pub const DEFAULT_PLAY_AREA_WIDTH: i32 = 1280;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHOW_HARVESTABLE_CROPS` - Enable the crop monitor (default: true)
    /// - `SHOW_HARVESTABLE_TREES` - Enable the fruit tree monitor (default: true)
    /// - `SHOW_PONDS_WITH_NEEDS` - Enable the fish pond monitor (default: true)
    /// - `WATCH_VIEWERS` - Split-screen viewers, clamped to 1..=4 (default: 1)
    /// - `WATCH_PLAY_AREA_WIDTH` - Play area width in pixels (default: 1280)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(enable) = parse::<bool>(lookup("SHOW_HARVESTABLE_CROPS")) {
            config.show_harvestable_crops = enable;
        }
        if let Some(enable) = parse::<bool>(lookup("SHOW_HARVESTABLE_TREES")) {
            config.show_harvestable_trees = enable;
        }
        if let Some(enable) = parse::<bool>(lookup("SHOW_PONDS_WITH_NEEDS")) {
            config.show_ponds_with_needs = enable;
        }
        if let Some(viewers) = parse::<u8>(lookup("WATCH_VIEWERS")) {
            config.viewers = viewers.clamp(1, Self::MAX_VIEWERS);
        }
        if let Some(width) = parse::<i32>(lookup("WATCH_PLAY_AREA_WIDTH")) {
            config.play_area_width = width.max(1);
        }

        config
    }

    pub fn is_enabled(&self, kind: MonitorKind) -> bool {
        match kind {
            MonitorKind::HarvestableCrops => self.show_harvestable_crops,
            MonitorKind::HarvestableTrees => self.show_harvestable_trees,
            MonitorKind::PondsWithNeeds => self.show_ponds_with_needs,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_harvestable_crops: true,
            show_harvestable_trees: true,
            show_ponds_with_needs: true,
            viewers: 1,
            play_area_width: Self::DEFAULT_PLAY_AREA_WIDTH,
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
