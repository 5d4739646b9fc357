//! The three monitor configurations.
//!
//! A [`MonitorDomain`] bundles everything that differs between the crop, fruit
//! tree, and fish pond monitors: which regions are eligible, which entities count
//! as ready, how matches are summarized, and which icon is drawn. The refresh,
//! draw, and dismissal logic in [`crate::monitor`] is shared.

use crate::env::{Entity, EntityKind, ItemId, OracleError, RegionInfo, WorldOracle};
use crate::hud::IconSprite;

/// Identifies one of the built-in monitors.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonitorKind {
    HarvestableCrops,
    HarvestableTrees,
    PondsWithNeeds,
}

/// Rule deciding which regions a full reset enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// Farms, greenhouses, and any region whose name starts with `Island`.
    FarmLike,
    /// Buildable regions holding at least one fish pond.
    BuildableWithPonds,
}

impl Eligibility {
    const ISLAND_PREFIX: &'static str = "Island";

    pub fn admits(&self, region: &RegionInfo, world: &dyn WorldOracle) -> Result<bool, OracleError> {
        match self {
            Eligibility::FarmLike => Ok(region.is_farm()
                || region.is_greenhouse()
                || region.name.starts_with(Self::ISLAND_PREFIX)),
            Eligibility::BuildableWithPonds => {
                if !region.is_buildable() {
                    return Ok(false);
                }
                Ok(!world.entities(region.id, EntityKind::FishPond)?.is_empty())
            }
        }
    }
}

/// Predicate selecting the entities a monitor reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    /// Crop plots ready for harvest.
    HarvestableCrops,
    /// Fruit trees carrying the maximum number of fruit.
    FullFruitTrees,
    /// Fish ponds with an outstanding item request.
    PondsWithNeeds,
}

impl Readiness {
    /// Entity kind the predicate inspects.
    pub fn kind(&self) -> EntityKind {
        match self {
            Readiness::HarvestableCrops => EntityKind::CropPlot,
            Readiness::FullFruitTrees => EntityKind::FruitTree,
            Readiness::PondsWithNeeds => EntityKind::FishPond,
        }
    }

    pub fn is_ready(&self, entity: &Entity) -> bool {
        match (self, entity) {
            (Readiness::HarvestableCrops, Entity::CropPlot(plot)) => plot.ready_for_harvest,
            (Readiness::FullFruitTrees, Entity::FruitTree(tree)) => tree.is_full(),
            (Readiness::PondsWithNeeds, Entity::FishPond(pond)) => pond.has_unresolved_needs(),
            _ => false,
        }
    }

    /// Identifier used to group and name a ready entity.
    pub fn item_of(&self, entity: &Entity) -> ItemId {
        match entity {
            Entity::CropPlot(plot) => plot.harvest,
            Entity::FruitTree(tree) => tree.fruit,
            Entity::FishPond(pond) => pond.fish,
        }
    }
}

/// How ready entities are rendered into the hover text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryStyle {
    /// A region header followed by `  - <Name>: <Count>` per type.
    GroupedByType,
    /// `<Fish>: <Count> <Item>` per entity, without region headers.
    PerPondNeed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonitorDomain {
    pub kind: MonitorKind,
    pub eligibility: Eligibility,
    pub readiness: Readiness,
    pub style: SummaryStyle,
    pub sprite: IconSprite,
}

impl MonitorDomain {
    pub const fn crops() -> Self {
        Self {
            kind: MonitorKind::HarvestableCrops,
            eligibility: Eligibility::FarmLike,
            readiness: Readiness::HarvestableCrops,
            style: SummaryStyle::GroupedByType,
            sprite: IconSprite::objects(224, 160),
        }
    }

    pub const fn trees() -> Self {
        Self {
            kind: MonitorKind::HarvestableTrees,
            eligibility: Eligibility::FarmLike,
            readiness: Readiness::FullFruitTrees,
            style: SummaryStyle::GroupedByType,
            sprite: IconSprite::objects(208, 400),
        }
    }

    pub const fn ponds() -> Self {
        Self {
            kind: MonitorKind::PondsWithNeeds,
            eligibility: Eligibility::BuildableWithPonds,
            readiness: Readiness::PondsWithNeeds,
            style: SummaryStyle::PerPondNeed,
            sprite: IconSprite::objects(256, 80),
        }
    }

    pub const fn for_kind(kind: MonitorKind) -> Self {
        match kind {
            MonitorKind::HarvestableCrops => Self::crops(),
            MonitorKind::HarvestableTrees => Self::trees(),
            MonitorKind::PondsWithNeeds => Self::ponds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CropPlot, FishPond, FruitTree, RegionId, RegionTraits};

    struct NoEntities;

    impl WorldOracle for NoEntities {
        fn regions(&self) -> Vec<RegionInfo> {
            Vec::new()
        }

        fn entities(&self, _: RegionId, _: EntityKind) -> Result<Vec<Entity>, OracleError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn farm_like_admits_island_prefixed_regions() {
        let rule = Eligibility::FarmLike;
        let island = RegionInfo::new(RegionId(1), "IslandWest", RegionTraits::empty());
        let town = RegionInfo::new(RegionId(2), "Town", RegionTraits::empty());
        let greenhouse = RegionInfo::new(RegionId(3), "Greenhouse", RegionTraits::GREENHOUSE);

        assert_eq!(rule.admits(&island, &NoEntities), Ok(true));
        assert_eq!(rule.admits(&town, &NoEntities), Ok(false));
        assert_eq!(rule.admits(&greenhouse, &NoEntities), Ok(true));
    }

    #[test]
    fn buildable_region_without_ponds_is_not_eligible() {
        let farm = RegionInfo::new(RegionId(1), "Farm", RegionTraits::BUILDABLE);
        assert_eq!(
            Eligibility::BuildableWithPonds.admits(&farm, &NoEntities),
            Ok(false)
        );
    }

    #[test]
    fn readiness_ignores_entities_of_other_kinds() {
        let crop = Entity::from(CropPlot::new(ItemId(1), true));
        let tree = Entity::from(FruitTree::new(ItemId(2), 3));
        let pond = Entity::from(FishPond::new(ItemId(3)).wanting(ItemId(4), 2));

        assert!(Readiness::HarvestableCrops.is_ready(&crop));
        assert!(!Readiness::HarvestableCrops.is_ready(&tree));
        assert!(Readiness::FullFruitTrees.is_ready(&tree));
        assert!(Readiness::PondsWithNeeds.is_ready(&pond));
        assert_eq!(Readiness::PondsWithNeeds.item_of(&pond), ItemId(3));
    }

    #[test]
    fn kinds_map_to_matching_domains() {
        use strum::IntoEnumIterator;
        for kind in MonitorKind::iter() {
            assert_eq!(MonitorDomain::for_kind(kind).kind, kind);
        }
    }
}
