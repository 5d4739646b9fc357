//! [`watch_core::WorldOracle`] over a mutable in-memory region table.
use std::collections::HashMap;

use watch_content::WorldSnapshot;
use watch_core::{Entity, EntityKind, OracleError, RegionId, RegionInfo, WorldOracle};

/// Regions in enumeration order plus the entities placed in each.
///
/// While offline every entity query fails with [`OracleError::Unavailable`],
/// the way a host answers between unloading and loading a save.
#[derive(Debug, Clone)]
pub struct WorldOracleImpl {
    regions: Vec<RegionInfo>,
    entities: HashMap<RegionId, Vec<Entity>>,
    online: bool,
}

impl WorldOracleImpl {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            entities: HashMap::new(),
            online: true,
        }
    }

    pub fn from_snapshot(snapshot: WorldSnapshot) -> Self {
        let mut world = Self::new();
        for spec in snapshot.regions {
            let info = spec.info();
            world.add_region(info, spec.entities);
        }
        world
    }

    /// Adds a region, replacing any previous region with the same id.
    pub fn add_region(&mut self, info: RegionInfo, entities: Vec<Entity>) {
        let id = info.id;
        match self.regions.iter_mut().find(|r| r.id == id) {
            Some(existing) => *existing = info,
            None => self.regions.push(info),
        }
        self.entities.insert(id, entities);
    }

    pub fn with_region(mut self, info: RegionInfo, entities: Vec<Entity>) -> Self {
        self.add_region(info, entities);
        self
    }

    /// Removes a region; later queries for it fail with `RegionNotFound`.
    pub fn remove_region(&mut self, id: RegionId) -> Option<Vec<Entity>> {
        self.regions.retain(|r| r.id != id);
        self.entities.remove(&id)
    }

    pub fn entities_mut(&mut self, id: RegionId) -> Option<&mut Vec<Entity>> {
        self.entities.get_mut(&id)
    }

    /// Iterates every entity of every region for in-place updates.
    pub fn all_entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut().flatten()
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    pub fn is_online(&self) -> bool {
        self.online
    }
}

impl Default for WorldOracleImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldOracle for WorldOracleImpl {
    fn regions(&self) -> Vec<RegionInfo> {
        self.regions.clone()
    }

    fn entities(&self, region: RegionId, kind: EntityKind) -> Result<Vec<Entity>, OracleError> {
        if !self.online {
            return Err(OracleError::Unavailable("no save loaded"));
        }
        let entities = self
            .entities
            .get(&region)
            .ok_or(OracleError::RegionNotFound(region))?;
        Ok(entities
            .iter()
            .filter(|entity| entity.kind() == kind)
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use watch_core::{CropPlot, FruitTree, ItemId, RegionTraits};

    use super::*;

    fn farm() -> RegionInfo {
        RegionInfo::new(RegionId(1), "Farm", RegionTraits::FARM)
    }

    #[test]
    fn entities_are_filtered_by_kind() {
        let world = WorldOracleImpl::new().with_region(
            farm(),
            vec![
                CropPlot::new(ItemId(1), true).into(),
                FruitTree::new(ItemId(2), 3).into(),
            ],
        );

        let trees = world.entities(RegionId(1), EntityKind::FruitTree).unwrap();
        assert_eq!(trees, vec![Entity::from(FruitTree::new(ItemId(2), 3))]);
    }

    #[test]
    fn removed_region_is_not_found() {
        let mut world = WorldOracleImpl::new().with_region(farm(), Vec::new());
        world.remove_region(RegionId(1));

        assert!(world.regions().is_empty());
        assert_eq!(
            world.entities(RegionId(1), EntityKind::CropPlot),
            Err(OracleError::RegionNotFound(RegionId(1)))
        );
    }

    #[test]
    fn offline_world_rejects_queries() {
        let mut world = WorldOracleImpl::new().with_region(farm(), Vec::new());
        world.set_online(false);

        assert!(matches!(
            world.entities(RegionId(1), EntityKind::CropPlot),
            Err(OracleError::Unavailable(_))
        ));
    }
}
