//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use watch_runtime::RuntimeConfig;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub content_dir: PathBuf,
    /// In-game days to simulate.
    pub days: u32,
    pub ticks_per_day: u64,
    /// Wall-clock pause between rendered frames.
    pub frame_interval_ms: u64,
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub const DEFAULT_DAYS: u32 = 3;
    pub const DEFAULT_TICKS_PER_DAY: u64 = 2400;
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WATCH_CONTENT_DIR` - Directory with `world.ron`, `items.ron` and an optional `config.toml`
    /// - `WATCH_DAYS` - Days to simulate (default: 3)
    /// - `WATCH_TICKS_PER_DAY` - Periodic ticks per day (default: 2400)
    /// - `WATCH_FRAME_INTERVAL_MS` - Delay between frames (default: 16)
    /// - `WATCH_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    ///
    /// Monitor toggles and viewer settings come from [`RuntimeConfig::from_env`].
    pub fn from_env() -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::default()
        };

        if let Some(dir) = env::var_os("WATCH_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(days) = read_env::<u32>("WATCH_DAYS") {
            config.days = days.max(1);
        }
        if let Some(ticks) = read_env::<u64>("WATCH_TICKS_PER_DAY") {
            config.ticks_per_day = ticks.max(1);
        }
        if let Some(interval) = read_env::<u64>("WATCH_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval;
        }
        config.session_id = env::var("WATCH_SESSION_ID").ok();

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            content_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content"),
            days: Self::DEFAULT_DAYS,
            ticks_per_day: Self::DEFAULT_TICKS_PER_DAY,
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            session_id: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
