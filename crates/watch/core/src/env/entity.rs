//! Entities the monitors inspect inside a region.
//!
//! Entities are snapshots handed out by the world oracle. The monitors never
//! mutate them; readiness is always derived on the spot from these fields.

use std::fmt;

/// Reference to an item definition whose display name lives in a [`super::NameOracle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Entity categories that can be enumerated per region.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    CropPlot,
    FruitTree,
    FishPond,
}

/// Tilled soil holding a crop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropPlot {
    /// Item produced when the crop is harvested.
    pub harvest: ItemId,
    pub ready_for_harvest: bool,
}

impl CropPlot {
    pub fn new(harvest: ItemId, ready_for_harvest: bool) -> Self {
        Self {
            harvest,
            ready_for_harvest,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FruitTree {
    pub fruit: ItemId,
    pub fruits_on_tree: u8,
}

impl FruitTree {
    /// A tree stops growing fruit once it carries this many.
    pub const MAX_FRUITS: u8 = 3;

    pub fn new(fruit: ItemId, fruits_on_tree: u8) -> Self {
        Self {
            fruit,
            fruits_on_tree,
        }
    }

    pub fn is_full(&self) -> bool {
        self.fruits_on_tree >= Self::MAX_FRUITS
    }
}

/// Fish pond building; a pond periodically asks for an item before it can grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FishPond {
    pub fish: ItemId,
    /// Item the pond is asking for, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub wanted: Option<ItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub wanted_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub needs_resolved: bool,
}

impl FishPond {
    pub fn new(fish: ItemId) -> Self {
        Self {
            fish,
            wanted: None,
            wanted_count: 0,
            needs_resolved: false,
        }
    }

    pub fn wanting(mut self, item: ItemId, count: u32) -> Self {
        self.wanted = Some(item);
        self.wanted_count = count;
        self
    }

    pub fn resolved(mut self) -> Self {
        self.needs_resolved = true;
        self
    }

    /// True while the pond has an outstanding request nobody has delivered.
    pub fn has_unresolved_needs(&self) -> bool {
        self.wanted.is_some() && !self.needs_resolved
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    CropPlot(CropPlot),
    FruitTree(FruitTree),
    FishPond(FishPond),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::CropPlot(_) => EntityKind::CropPlot,
            Entity::FruitTree(_) => EntityKind::FruitTree,
            Entity::FishPond(_) => EntityKind::FishPond,
        }
    }
}

impl From<CropPlot> for Entity {
    fn from(plot: CropPlot) -> Self {
        Entity::CropPlot(plot)
    }
}

impl From<FruitTree> for Entity {
    fn from(tree: FruitTree) -> Self {
        Entity::FruitTree(tree)
    }
}

impl From<FishPond> for Entity {
    fn from(pond: FishPond) -> Self {
        Entity::FishPond(pond)
    }
}
