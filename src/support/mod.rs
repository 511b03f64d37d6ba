//! Support statistics and candidate support counting.
//!
//! [`SupportIndex`] holds the per-item occurrence statistics computed once per
//! run. Candidate itemsets are counted against the transaction collection
//! through the [`SupportCounter`] trait, so the counting strategy can be
//! swapped without any observable effect on the mining output:
//!
//! - [`NaiveCounter`]: the reference strategy, a per-transaction subset scan.
//!   With the `rayon` feature, transactions are partitioned across worker
//!   threads into independent accumulators merged after a join barrier.
//! - [`InvertedIndexCounter`]: per-item posting lists of transaction indices;
//!   a candidate's count is the size of the intersection of its lists.

mod inverted;
mod item_stats;
mod naive;


pub use inverted::InvertedIndexCounter;
pub use item_stats::SupportIndex;
pub use naive::NaiveCounter;

use crate::{Item, Transaction};

/// Counts how many transactions contain each candidate itemset.
///
/// Implementations must return one count per candidate, position-aligned with
/// the input slice, and must agree with each other on every input.
pub trait SupportCounter {
    fn count(&self, candidates: &[Vec<Item>], transactions: &[Transaction]) -> Vec<usize>;
}
