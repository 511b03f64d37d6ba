//! Declarative item constraints: must-have and cannot-be-together.
//!
//! Cannot-be-together groups are validated and expanded into their banned
//! combinations once, at configuration time; mining only performs superset
//! tests against the expanded tuples. The must-have filter is deliberately
//! deferred to the very end of a run — dropping an itemset early would also
//! drop every larger itemset it could have seeded.


use crate::error::ConstraintError;
use crate::{Item, ItemsetLevel};
use std::collections::{BTreeSet, HashSet};

/// One cannot-be-together group: a list of units, each unit a single item or
/// a pre-combined tuple of items. Merging every unordered pair of units
/// yields the group's banned combinations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CannotTogetherGroup {
    units: Vec<Vec<Item>>,
}

impl CannotTogetherGroup {
    pub fn new(units: Vec<Vec<Item>>) -> CannotTogetherGroup {
        CannotTogetherGroup { units }
    }

    /// Build a group of single-item units, the common case.
    pub fn of_items(items: impl IntoIterator<Item = Item>) -> CannotTogetherGroup {
        CannotTogetherGroup {
            units: items.into_iter().map(|item| vec![item]).collect(),
        }
    }

    pub fn units(&self) -> &[Vec<Item>] {
        &self.units
    }
}

/// The full constraint set attached to a mining run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSet {
    /// Keep only itemsets containing at least one of these items; applied
    /// after mining completes. Empty means "keep everything".
    pub must_have: HashSet<Item>,
    /// Reject itemsets containing any banned combination of these groups.
    pub cannot_together: Vec<CannotTogetherGroup>,
}

impl ConstraintSet {
    /// Fail fast on malformed groups. A group must carry at least one unit
    /// and every unit at least one item. A single-unit group is legal but
    /// inert: it has no pair of units to merge.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        for (index, group) in self.cannot_together.iter().enumerate() {
            if group.units.is_empty() {
                return Err(ConstraintError::EmptyGroup { group: index });
            }
            if group.units.iter().any(|unit| unit.is_empty()) {
                return Err(ConstraintError::EmptyUnit { group: index });
            }
        }
        Ok(())
    }

    /// Expand every group into its banned combinations: the deduplicated
    /// union of each unordered pair of units. Done once, at configuration
    /// time — never re-derived during mining.
    pub fn banned_combinations(&self) -> Vec<BTreeSet<Item>> {
        let mut banned = Vec::new();
        for group in &self.cannot_together {
            let units = group.units();
            for i in 0..units.len() {
                for j in i + 1..units.len() {
                    let merged: BTreeSet<Item> =
                        units[i].iter().chain(units[j].iter()).copied().collect();
                    banned.push(merged);
                }
            }
        }
        banned.sort();
        banned.dedup();
        banned
    }
}

/// True when `items` is a superset of no banned combination.
pub fn passes_cannot_together(items: &[Item], banned: &[BTreeSet<Item>]) -> bool {
    banned
        .iter()
        .all(|combination| !combination.iter().all(|item| items.contains(item)))
}

/// Retain only itemsets containing at least one must-have item, dropping
/// levels that become empty. A second application is a no-op. An empty
/// `must_have` keeps everything.
pub fn retain_must_have(levels: &mut Vec<ItemsetLevel>, must_have: &HashSet<Item>) {
    if must_have.is_empty() {
        return;
    }
    for level in levels.iter_mut() {
        level
            .itemsets
            .retain(|itemset| itemset.items.iter().any(|item| must_have.contains(item)));
    }
    levels.retain(|level| !level.itemsets.is_empty());
}
