use std::fmt;

use bitflags::bitflags;

/// Opaque handle to a world area owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region#{}", self.0)
    }
}

bitflags! {
    /// Static classification of a region, used by eligibility rules.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RegionTraits: u8 {
        /// Farmable land (the home farm and farm-type maps).
        const FARM       = 1 << 0;
        const GREENHOUSE = 1 << 1;
        /// Area that accepts constructed buildings such as fish ponds.
        const BUILDABLE  = 1 << 2;
    }
}

/// Read-only descriptor of a region as reported by the world oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionInfo {
    pub id: RegionId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: RegionTraits,
}

impl RegionInfo {
    pub fn new(id: RegionId, name: impl Into<String>, traits: RegionTraits) -> Self {
        Self {
            id,
            name: name.into(),
            traits,
        }
    }

    pub fn is_farm(&self) -> bool {
        self.traits.contains(RegionTraits::FARM)
    }

    pub fn is_greenhouse(&self) -> bool {
        self.traits.contains(RegionTraits::GREENHOUSE)
    }

    pub fn is_buildable(&self) -> bool {
        self.traits.contains(RegionTraits::BUILDABLE)
    }
}
