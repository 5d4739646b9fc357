//! Monitor configuration loader.

use std::path::Path;

use watch_core::WatchConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for monitor tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. Out-of-range values are clamped with
    /// [`WatchConfig::normalized`].
    pub fn load(path: &Path) -> LoadResult<WatchConfig> {
        let content = read_file(path)?;
        let config: WatchConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config.normalized())
    }
}
