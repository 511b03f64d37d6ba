//! Frequent itemset mining under *multiple minimum support* (MIS) thresholds.
//!
//! Instead of one global support threshold, every item receives its own
//! minimum item support derived from its frequency, `max(beta * support, ls)`.
//! Rare-but-important items can therefore surface without flooding the result
//! with trivial combinations of common items. Two declarative constraints are
//! supported on top: *must-have* (keep only itemsets containing at least one
//! designated item, applied after mining) and *cannot-be-together* (reject
//! itemsets containing a banned combination, applied during extraction).
//!
//! The entry point is [`miner::MsApriori`]: configure it with a
//! [`miner::MinerConfig`] and a transaction collection, then either step it as
//! an [`Iterator`] over per-size [`ItemsetLevel`]s or call
//! [`miner::MsApriori::run`] for the complete [`miner::MiningReport`].


mod itemset;

pub mod candidates;
pub mod constraints;
pub mod dataset;
pub mod error;
pub mod miner;
pub mod mis;
pub mod support;

pub use itemset::{FrequentItemset, Item, ItemsetLevel, Transaction};

/// A utility method for formatting an itemset in log output.
fn log_items(items: &[Item]) -> String {
    let rendered: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("({})", rendered.join(", "))
}
