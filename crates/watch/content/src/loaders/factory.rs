//! Content factory for loading everything a session needs from one directory.

use std::path::{Path, PathBuf};

use watch_core::WatchConfig;

use crate::loaders::{
    ConfigLoader, LoadResult, NameCatalog, NameCatalogLoader, WorldLoader, WorldSnapshot,
};

/// Content factory that loads monitor content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// ├── items.ron
/// └── world.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load monitor tunables from `config.toml`, falling back to defaults when
    /// the file does not exist.
    pub fn load_config(&self) -> LoadResult<WatchConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::info!(
                target: "watch::content",
                path = %path.display(),
                "no config file, using defaults"
            );
            return Ok(WatchConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item name catalog from `items.ron`.
    pub fn load_names(&self) -> LoadResult<NameCatalog> {
        NameCatalogLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the world snapshot from `world.ron`.
    pub fn load_world(&self) -> LoadResult<WorldSnapshot> {
        WorldLoader::load(&self.data_dir.join("world.ron"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().expect("defaults"), WatchConfig::default());
        assert!(factory.load_world().is_err());
    }

    #[test]
    fn loads_world_and_names_from_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("world.ron"),
            "#![enable(unwrap_newtypes)]\n(regions: [(id: 1, name: \"Farm\", traits: \"FARM\")])",
        )
        .expect("write world");
        std::fs::write(
            dir.path().join("items.ron"),
            "#![enable(unwrap_newtypes)]\n(items: [(24, \"Parsnip\")])",
        )
        .expect("write items");

        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_world().expect("world").regions.len(), 1);
        assert_eq!(factory.load_names().expect("names").items.len(), 1);
        assert_eq!(factory.data_dir(), dir.path());
    }
}
