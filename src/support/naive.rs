use super::SupportCounter;
use crate::{Item, Transaction};

/// The reference counting strategy: test every candidate against every
/// transaction with a subset scan.
///
/// Cost is proportional to `|transactions| * |candidates| * itemset size`,
/// which makes this the dominant cost center of a mining run. With the
/// `rayon` feature, the transaction scan is partitioned across worker threads
/// into independent count accumulators that are merged once all workers
/// finish; the produced counts are identical to the sequential scan.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveCounter;

fn contains_all(transaction: &Transaction, candidate: &[Item]) -> bool {
    candidate.iter().all(|item| transaction.contains(item))
}

#[cfg(not(feature = "rayon"))]
impl SupportCounter for NaiveCounter {
    fn count(&self, candidates: &[Vec<Item>], transactions: &[Transaction]) -> Vec<usize> {
        let mut counts = vec![0usize; candidates.len()];
        for row in transactions {
            for (index, candidate) in candidates.iter().enumerate() {
                if contains_all(row, candidate) {
                    counts[index] += 1;
                }
            }
        }
        counts
    }
}

#[cfg(feature = "rayon")]
impl SupportCounter for NaiveCounter {
    fn count(&self, candidates: &[Vec<Item>], transactions: &[Transaction]) -> Vec<usize> {
        use rayon::prelude::*;

        transactions
            .par_iter()
            .fold(
                || vec![0usize; candidates.len()],
                |mut counts, row| {
                    for (index, candidate) in candidates.iter().enumerate() {
                        if contains_all(row, candidate) {
                            counts[index] += 1;
                        }
                    }
                    counts
                },
            )
            .reduce(
                || vec![0usize; candidates.len()],
                |mut merged, partial| {
                    for (total, count) in merged.iter_mut().zip(partial) {
                        *total += count;
                    }
                    merged
                },
            )
    }
}
