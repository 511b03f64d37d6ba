use super::SupportCounter;
use crate::{Item, Transaction};
use std::collections::HashMap;

/// Counting through per-item posting lists.
///
/// Each item maps to the ascending list of indices of the transactions that
/// contain it; a candidate's count is the size of the intersection of its
/// items' lists. Produces exactly the same counts as [`super::NaiveCounter`].
#[derive(Clone, Copy, Debug, Default)]
pub struct InvertedIndexCounter;

impl SupportCounter for InvertedIndexCounter {
    fn count(&self, candidates: &[Vec<Item>], transactions: &[Transaction]) -> Vec<usize> {
        let mut postings: HashMap<Item, Vec<usize>> = HashMap::new();
        for (index, row) in transactions.iter().enumerate() {
            for &item in row {
                postings.entry(item).or_default().push(index);
            }
        }

        candidates
            .iter()
            .map(|candidate| count_one(candidate, &postings, transactions.len()))
            .collect()
    }
}

fn count_one(
    candidate: &[Item],
    postings: &HashMap<Item, Vec<usize>>,
    transaction_count: usize,
) -> usize {
    // The empty itemset is contained in every transaction.
    if candidate.is_empty() {
        return transaction_count;
    }

    let mut lists: Vec<&[usize]> = Vec::with_capacity(candidate.len());
    for item in candidate {
        match postings.get(item) {
            Some(list) => lists.push(list.as_slice()),
            None => return 0,
        }
    }
    // Intersecting the shortest lists first keeps the intermediates small.
    lists.sort_by_key(|list| list.len());

    let mut current: Vec<usize> = lists[0].to_vec();
    for list in &lists[1..] {
        current = intersect_sorted(&current, list);
        if current.is_empty() {
            return 0;
        }
    }
    current.len()
}

/// Intersection of two ascending index lists.
fn intersect_sorted(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            i += 1;
        } else if left[i] > right[j] {
            j += 1;
        } else {
            result.push(left[i]);
            i += 1;
            j += 1;
        }
    }
    result
}
