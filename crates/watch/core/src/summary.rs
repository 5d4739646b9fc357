//! Hover text aggregation.
//!
//! Grouped monitors render one block per region:
//!
//! ```text
//! Farm
//!   - Parsnip: 3
//!   - Potato: 1
//! ```
//!
//! Pond monitors render one line per needy pond (`Sturgeon: 2 Coral`). Blocks
//! are joined with a single newline in region order. Entities whose identifiers
//! cannot be resolved are skipped and reported back to the caller.

use crate::domain::{MonitorDomain, SummaryStyle};
use crate::env::{Entity, ItemId, NameOracle, RegionInfo};
use crate::error::MonitorError;

/// Finished hover text plus the entities that could not be named.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub skipped: Vec<MonitorError>,
}

/// Accumulates per-region blocks into a single hover text.
pub struct SummaryBuilder<'a> {
    domain: &'a MonitorDomain,
    names: &'a dyn NameOracle,
    text: String,
    skipped: Vec<MonitorError>,
}

impl<'a> SummaryBuilder<'a> {
    pub fn new(domain: &'a MonitorDomain, names: &'a dyn NameOracle) -> Self {
        Self {
            domain,
            names,
            text: String::new(),
            skipped: Vec::new(),
        }
    }

    /// Appends the block for `region`. `ready` holds only entities that passed
    /// the readiness predicate and must not be empty.
    pub fn push_region(&mut self, region: &RegionInfo, ready: &[Entity]) {
        let mut block = match self.domain.style {
            SummaryStyle::GroupedByType => self.grouped_block(region, ready),
            SummaryStyle::PerPondNeed => self.pond_block(ready),
        };

        // Every name failed to resolve; keep the region visible by name alone,
        // or by id when it has no name.
        if block.is_empty() {
            if region.name.is_empty() {
                block.push_str(&region.id.to_string());
            } else {
                block.push_str(&region.name);
            }
        }

        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(&block);
    }

    pub fn finish(self) -> Summary {
        Summary {
            text: self.text,
            skipped: self.skipped,
        }
    }

    fn grouped_block(&mut self, region: &RegionInfo, ready: &[Entity]) -> String {
        let readiness = self.domain.readiness;
        let mut groups: Vec<(String, usize)> = Vec::new();

        for entity in ready {
            let Some(name) = self.resolve(readiness.item_of(entity)) else {
                continue;
            };
            match groups.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, count)) => *count += 1,
                None => groups.push((name, 1)),
            }
        }

        let mut block = region.name.clone();
        for (name, count) in groups {
            block.push_str(&format!("\n  - {name}: {count}"));
        }
        block
    }

    fn pond_block(&mut self, ready: &[Entity]) -> String {
        let mut lines = Vec::with_capacity(ready.len());

        for entity in ready {
            let Entity::FishPond(pond) = entity else {
                continue;
            };
            let Some(wanted) = pond.wanted else {
                continue;
            };
            let (Some(fish), Some(item)) = (self.resolve(pond.fish), self.resolve(wanted)) else {
                continue;
            };
            lines.push(format!("{fish}: {} {item}", pond.wanted_count));
        }

        lines.join("\n")
    }

    fn resolve(&mut self, item: ItemId) -> Option<String> {
        let name = self.names.display_name(item);
        if name.is_none() {
            self.skipped.push(MonitorError::UnknownItem(item));
        }
        name
    }
}
