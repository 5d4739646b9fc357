//! Traits describing the read-only world model.
//!
//! Oracles expose the regions of the world, the entities inside them, and the
//! item catalog used for display names. Monitors query them during a refresh and
//! never hold on to anything they return beyond the cached region descriptors.
mod entity;
mod error;
mod region;

pub use entity::{CropPlot, Entity, EntityKind, FishPond, FruitTree, ItemId};
pub use error::OracleError;
pub use region::{RegionId, RegionInfo, RegionTraits};

/// Read-only view of the host's world model.
pub trait WorldOracle {
    /// Every region currently loaded, in the host's enumeration order.
    fn regions(&self) -> Vec<RegionInfo>;

    /// Entities of one kind inside `region`.
    fn entities(&self, region: RegionId, kind: EntityKind) -> Result<Vec<Entity>, OracleError>;
}

/// Resolves item identifiers to human-readable names.
pub trait NameOracle {
    /// Returns `None` when the identifier is not in the catalog.
    fn display_name(&self, item: ItemId) -> Option<String>;
}
