//! Data-driven content for the readiness monitors.
//!
//! This crate reads the files a host (or the demo client) feeds into the
//! monitors:
//! - World snapshots: regions with their traits and entities (RON)
//! - Item name catalogs (RON)
//! - Monitor tunables (TOML)
//!
//! Content is consumed by the runtime oracles and never mutated afterwards.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, NameCatalog, NameCatalogLoader, RegionSpec, WorldLoader,
    WorldSnapshot,
};
