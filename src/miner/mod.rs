//! The MS-Apriori mining driver.
//!
//! A run moves through fixed phases: the size-1 seed level, the level-2
//! generation from the first-pass sequence, then the general join for every
//! size k >= 3, until the first size from 2 upward produces no frequent
//! itemset. The driver is an [`Iterator`] over per-size [`ItemsetLevel`]s, so
//! a caller can inspect sizes as they complete and abort between sizes simply
//! by dropping it; [`MsApriori::run`] drives the loop to the end and applies
//! the deferred must-have postpass.
//!
//! # Example
//!
//! ```
//! use ms_apriori::miner::{MinerConfig, MsApriori};
//!
//! let transactions = vec![
//!     [1, 2, 3].into(),
//!     [1, 2].into(),
//!     [1, 3].into(),
//!     [2, 3].into(),
//!     [1, 2, 3].into(),
//! ];
//! let config = MinerConfig::new().ls(0.2).beta(0.5);
//!
//! let report = MsApriori::configure(config, transactions).unwrap().run();
//! assert_eq!(report.max_size, 2);
//! ```

mod miner_config;

#[cfg(test)]
mod tests;

pub use miner_config::MinerConfig;

use crate::candidates::{join_candidates, level2_candidates};
use crate::constraints::{passes_cannot_together, retain_must_have};
use crate::error::MiningError;
use crate::log_items;
use crate::mis::{MisEntry, MisTable, select_first_pass};
use crate::support::{NaiveCounter, SupportCounter, SupportIndex};
use crate::{FrequentItemset, Item, ItemsetLevel, Transaction};
use log::{debug, info};
use std::collections::{BTreeSet, HashSet};

/// Complete result of a mining run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MiningReport {
    /// Non-empty levels in ascending size order, must-have filtered when
    /// that constraint is present.
    pub levels: Vec<ItemsetLevel>,
    /// Largest size that produced frequent itemsets, before the must-have
    /// postpass; 0 when nothing was ever frequent.
    pub max_size: usize,
    /// Total number of reported frequent itemsets.
    pub total: usize,
}

impl MiningReport {
    /// Iterate over every reported itemset, smallest sizes first.
    pub fn iter(&self) -> impl Iterator<Item = &FrequentItemset> {
        self.levels.iter().flat_map(|level| level.itemsets.iter())
    }
}

/// Which phase the driver is in. Sizes only grow; the first empty level at
/// size >= 2 is terminal.
enum Phase {
    Seed,
    Pairs,
    Join { size: usize },
    Done,
}

/// The MS-Apriori mining driver.
///
/// Construction validates the configuration and precomputes everything that
/// is fixed for the whole run: support statistics, the MIS table, the
/// first-pass selection and the banned constraint combinations. None of it is
/// mutated afterwards.
pub struct MsApriori<C: SupportCounter = NaiveCounter> {
    transactions: Vec<Transaction>,
    stats: SupportIndex,
    mis: MisTable,
    first_pass: Vec<MisEntry>,
    banned: Vec<BTreeSet<Item>>,
    sup_dif_allowed: f64,
    must_have: HashSet<Item>,
    counter: C,
    phase: Phase,
    previous: Vec<Vec<Item>>,
}

impl MsApriori<NaiveCounter> {
    /// Validate `config` and prepare a run over `transactions` with the
    /// reference counting strategy.
    pub fn configure(
        config: MinerConfig,
        transactions: Vec<Transaction>,
    ) -> Result<Self, MiningError> {
        MsApriori::with_counter(config, transactions, NaiveCounter)
    }
}

impl<C: SupportCounter> MsApriori<C> {
    /// Validate `config` and prepare a run using a custom counting strategy.
    pub fn with_counter(
        config: MinerConfig,
        transactions: Vec<Transaction>,
        counter: C,
    ) -> Result<Self, MiningError> {
        config.validate()?;

        let stats = SupportIndex::build(&transactions);
        let mis = MisTable::assign(&stats, config.beta, config.ls);
        let first_pass = select_first_pass(&mis, &stats);
        let banned = config.constraints.banned_combinations();

        info!(
            "Prepared run: {} transactions, {} distinct items, {} first-pass items.",
            transactions.len(),
            stats.len(),
            first_pass.len()
        );

        Ok(MsApriori {
            transactions,
            stats,
            mis,
            first_pass,
            banned,
            sup_dif_allowed: config.sup_dif_allowed,
            must_have: config.constraints.must_have,
            counter,
            phase: Phase::Seed,
            previous: Vec::new(),
        })
    }

    /// Drive the run to completion, then apply the must-have postpass.
    ///
    /// The reported `max_size` is established before the postpass: filtering
    /// can empty a level, but it never rewrites how far mining got.
    pub fn run(mut self) -> MiningReport {
        let mut levels: Vec<ItemsetLevel> = Vec::new();
        while let Some(level) = self.next_level() {
            if !level.is_empty() {
                levels.push(level);
            }
        }
        let max_size = levels.last().map(|level| level.size).unwrap_or(0);

        retain_must_have(&mut levels, &self.must_have);
        let total = levels.iter().map(ItemsetLevel::len).sum();

        info!(
            "Mining complete: {} frequent itemsets, max size {}.",
            total, max_size
        );
        MiningReport {
            levels,
            max_size,
            total,
        }
    }

    /// The size-1 level: first-pass items whose support strictly exceeds
    /// their own MIS.
    fn seed_level(&self) -> ItemsetLevel {
        let mut level = ItemsetLevel::new(1);
        for entry in &self.first_pass {
            if self.stats.support(entry.item) > entry.mis {
                level.itemsets.push(FrequentItemset {
                    items: vec![entry.item],
                    count: self.stats.count(entry.item),
                });
            }
        }
        level
    }

    /// Count `candidates` and keep those whose fractional support strictly
    /// exceeds the MIS of their first member and which pass the
    /// cannot-be-together filter.
    fn extract_frequent(&self, size: usize, candidates: Vec<Vec<Item>>) -> ItemsetLevel {
        let counts = self.counter.count(&candidates, &self.transactions);
        let transaction_count = self.transactions.len();

        let mut level = ItemsetLevel::new(size);
        for (candidate, count) in candidates.into_iter().zip(counts) {
            if count == 0 {
                continue;
            }
            let support = count as f64 / transaction_count as f64;
            if support <= self.mis.mis(candidate[0]) {
                continue;
            }
            if !passes_cannot_together(&candidate, &self.banned) {
                debug!("Rejected {}: cannot-be-together.", log_items(&candidate));
                continue;
            }
            level.itemsets.push(FrequentItemset {
                items: candidate,
                count,
            });
        }
        level
    }

    fn next_level(&mut self) -> Option<ItemsetLevel> {
        match self.phase {
            Phase::Seed => {
                // Level 2 is generated from the first pass, not from the
                // frequent singletons, so an empty seed level does not end
                // the run.
                let level = self.seed_level();
                info!("Size 1: {} frequent itemsets.", level.len());
                self.phase = Phase::Pairs;
                Some(level)
            }
            Phase::Pairs => {
                let candidates =
                    level2_candidates(&self.first_pass, &self.stats, self.sup_dif_allowed);
                debug!("Size 2: {} candidates.", candidates.len());
                self.finish_level(2, candidates)
            }
            Phase::Join { size } => {
                let candidates = join_candidates(
                    &self.previous,
                    &self.stats,
                    &self.mis,
                    self.sup_dif_allowed,
                );
                debug!("Size {}: {} candidates.", size, candidates.len());
                self.finish_level(size, candidates)
            }
            Phase::Done => None,
        }
    }

    /// Extract the frequent itemsets of one size >= 2 and advance the phase:
    /// a non-empty level feeds the next join, an empty one ends the run.
    fn finish_level(&mut self, size: usize, candidates: Vec<Vec<Item>>) -> Option<ItemsetLevel> {
        let level = self.extract_frequent(size, candidates);
        if level.is_empty() {
            info!("Size {} produced no frequent itemsets; stopping.", size);
            self.phase = Phase::Done;
            return None;
        }
        info!("Size {}: {} frequent itemsets.", size, level.len());
        self.previous = level.iter_items().map(<[Item]>::to_vec).collect();
        self.phase = Phase::Join { size: size + 1 };
        Some(level)
    }
}

impl<C: SupportCounter> Iterator for MsApriori<C> {
    type Item = ItemsetLevel;

    fn next(&mut self) -> Option<ItemsetLevel> {
        self.next_level()
    }
}
