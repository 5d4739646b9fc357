//! In-memory oracle implementations backed by loaded content.
//!
//! These expose the `watch-core` oracle traits and bundle them into an
//! [`OracleManager`] that the host hands to monitors on every refresh.
mod names;
mod world;

use watch_content::{NameCatalog, WorldSnapshot};
use watch_core::{NameOracle, WorldOracle};

pub use names::NameOracleImpl;
pub use world::WorldOracleImpl;

/// Owns the world and name oracles for one session.
#[derive(Debug, Default, Clone)]
pub struct OracleManager {
    world: WorldOracleImpl,
    names: NameOracleImpl,
}

impl OracleManager {
    pub fn new(world: WorldOracleImpl, names: NameOracleImpl) -> Self {
        Self { world, names }
    }

    /// Builds both oracles from loaded content files.
    pub fn from_content(world: WorldSnapshot, names: NameCatalog) -> Self {
        Self::new(
            WorldOracleImpl::from_snapshot(world),
            NameOracleImpl::from_catalog(names),
        )
    }

    pub fn world(&self) -> &dyn WorldOracle {
        &self.world
    }

    pub fn names(&self) -> &dyn NameOracle {
        &self.names
    }

    /// Mutable access for hosts that simulate the world between signals.
    pub fn world_mut(&mut self) -> &mut WorldOracleImpl {
        &mut self.world
    }

    pub fn names_mut(&mut self) -> &mut NameOracleImpl {
        &mut self.names
    }
}
