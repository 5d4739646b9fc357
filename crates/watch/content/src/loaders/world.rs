//! World snapshot loader.
//!
//! A snapshot lists every region in enumeration order together with the
//! entities placed inside it:
//!
//! ```text
//! #![enable(unwrap_newtypes, implicit_some)]
//! (
//!     regions: [
//!         (
//!             id: 1,
//!             name: "Farm",
//!             traits: "FARM | BUILDABLE",
//!             entities: [
//!                 CropPlot((harvest: 24, ready_for_harvest: true)),
//!                 FishPond((fish: 128, wanted: 152, wanted_count: 2)),
//!             ],
//!         ),
//!     ],
//! )
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use watch_core::{Entity, RegionId, RegionInfo, RegionTraits};

use crate::loaders::{LoadResult, read_file};

/// One region entry of a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSpec {
    pub id: RegionId,
    pub name: String,
    #[serde(default)]
    pub traits: RegionTraits,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl RegionSpec {
    pub fn info(&self) -> RegionInfo {
        RegionInfo::new(self.id, self.name.clone(), self.traits)
    }
}

/// World snapshot structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub regions: Vec<RegionSpec>,
}

/// Loader for world snapshots from RON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load a world snapshot from a RON file.
    ///
    /// Fails when two regions share an id.
    pub fn load(path: &Path) -> LoadResult<WorldSnapshot> {
        let content = read_file(path)?;
        let snapshot: WorldSnapshot = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world snapshot RON: {}", e))?;

        let mut seen = HashSet::new();
        for region in &snapshot.regions {
            if !seen.insert(region.id) {
                anyhow::bail!("Duplicate region {} in {}", region.id, path.display());
            }
        }

        tracing::debug!(
            target: "watch::content",
            path = %path.display(),
            regions = snapshot.regions.len(),
            "loaded world snapshot"
        );
        Ok(snapshot)
    }
}
