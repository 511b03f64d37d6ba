//! Minimum item support assignment and the canonical mining order.
//!
//! Every item's MIS is `max(beta * support, ls)`. Sorting items by ascending
//! MIS (ties by identifier) yields the canonical order: the first-pass
//! selection, every candidate and every frequent itemset downstream preserve
//! it, and all joins and duplicate suppression rely on it.

mod first_pass;


pub use first_pass::select_first_pass;

use crate::Item;
use crate::support::SupportIndex;
use std::collections::HashMap;

/// One item together with its minimum item support threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MisEntry {
    pub item: Item,
    pub mis: f64,
}

/// Per-item MIS thresholds plus the canonical ascending-MIS order.
///
/// Computed once per run from the full support index and never mutated.
#[derive(Clone, Debug)]
pub struct MisTable {
    mis: HashMap<Item, f64>,
    order: Vec<MisEntry>,
}

impl MisTable {
    /// Assign `mis = beta * support` to every item of the index, raised to
    /// the floor `ls` whenever the scaled value does not exceed it.
    pub fn assign(stats: &SupportIndex, beta: f64, ls: f64) -> MisTable {
        let mut order: Vec<MisEntry> = stats
            .items()
            .map(|item| {
                let scaled = beta * stats.support(item);
                let mis = if scaled > ls { scaled } else { ls };
                MisEntry { item, mis }
            })
            .collect();
        order.sort_by(|a, b| a.mis.total_cmp(&b.mis).then(a.item.cmp(&b.item)));

        let mis = order.iter().map(|entry| (entry.item, entry.mis)).collect();
        MisTable { mis, order }
    }

    /// MIS of `item`; items absent from the dataset report 0.
    pub fn mis(&self, item: Item) -> f64 {
        self.mis.get(&item).copied().unwrap_or(0.0)
    }

    /// All entries in canonical ascending `(mis, item)` order.
    pub fn sorted(&self) -> &[MisEntry] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
