//! Item name catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use watch_core::ItemId;

use crate::loaders::{LoadResult, read_file};

/// Item name catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameCatalog {
    pub items: Vec<(ItemId, String)>,
}

/// Loader for item name catalogs from RON files.
pub struct NameCatalogLoader;

impl NameCatalogLoader {
    /// Load an item name catalog from a RON file.
    ///
    /// When an id appears twice the later entry wins and a warning is logged.
    pub fn load(path: &Path) -> LoadResult<NameCatalog> {
        let content = read_file(path)?;
        let catalog: NameCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for (item, name) in &catalog.items {
            if !seen.insert(*item) {
                tracing::warn!(
                    target: "watch::content",
                    %item,
                    %name,
                    "duplicate catalog entry, later entry wins"
                );
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_id_name_pairs_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"#![enable(unwrap_newtypes)]
(items: [(24, "Parsnip"), (613, "Apple"), (24, "Parsnip (old)")])"#
        )
        .expect("write temp file");

        let catalog = NameCatalogLoader::load(file.path()).expect("catalog loads");

        assert_eq!(catalog.items.len(), 3);
        assert_eq!(catalog.items[1], (ItemId(613), "Apple".to_string()));
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "(items: [oops])").expect("write temp file");

        let err = NameCatalogLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("item catalog"), "{err}");
    }
}
