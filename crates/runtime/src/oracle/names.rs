//! Minimal [`watch_core::NameOracle`] backed by an in-memory map.
use std::collections::HashMap;

use watch_content::NameCatalog;
use watch_core::{ItemId, NameOracle};

#[derive(Debug, Default, Clone)]
pub struct NameOracleImpl {
    names: HashMap<ItemId, String>,
}

impl NameOracleImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries of the catalog override earlier ones.
    pub fn from_catalog(catalog: NameCatalog) -> Self {
        Self {
            names: catalog.items.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, item: ItemId, name: impl Into<String>) {
        self.names.insert(item, name.into());
    }

    pub fn with(mut self, item: ItemId, name: impl Into<String>) -> Self {
        self.insert(item, name);
        self
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameOracle for NameOracleImpl {
    fn display_name(&self, item: ItemId) -> Option<String> {
        self.names.get(&item).cloned()
    }
}
