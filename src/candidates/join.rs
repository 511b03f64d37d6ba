use crate::Item;
use crate::mis::MisTable;
use crate::support::SupportIndex;
use std::collections::HashSet;

/// Join frequent (k-1)-itemsets into size-k candidates, k >= 3.
///
/// Two itemsets sharing their first k-2 items and differing in the last merge
/// into one candidate: the higher-support differing item is appended to the
/// itemset ending in the lower-support one, so the canonical order survives
/// the join. The fractional support difference of the two differing items
/// must stay within `sup_dif_allowed`.
///
/// The collection is stable-sorted by first item beforehand; once first items
/// differ, no later partner can share the prefix, so the inner scan stops
/// early. This is an optimization only — the emitted candidates do not depend
/// on it.
pub fn join_candidates(
    frequent: &[Vec<Item>],
    stats: &SupportIndex,
    mis: &MisTable,
    sup_dif_allowed: f64,
) -> Vec<Vec<Item>> {
    if frequent.is_empty() {
        return Vec::new();
    }
    let width = frequent[0].len();

    let mut sorted: Vec<&[Item]> = frequent.iter().map(Vec::as_slice).collect();
    sorted.sort_by_key(|itemset| itemset[0]);

    let known: HashSet<&[Item]> = frequent.iter().map(Vec::as_slice).collect();

    let mut candidates = Vec::new();
    for (i, &left) in sorted.iter().enumerate() {
        for &right in &sorted[i + 1..] {
            if left[..width - 1] == right[..width - 1] {
                if left[width - 1] == right[width - 1] {
                    continue;
                }
                let left_support = stats.support(left[width - 1]);
                let right_support = stats.support(right[width - 1]);
                if (right_support - left_support).abs() > sup_dif_allowed {
                    continue;
                }

                let mut candidate;
                if left_support < right_support {
                    candidate = left.to_vec();
                    candidate.push(right[width - 1]);
                } else {
                    candidate = right.to_vec();
                    candidate.push(left[width - 1]);
                }

                if survives_subset_pruning(&candidate, mis, &known) {
                    candidates.push(candidate);
                }
            } else if left[0] != right[0] {
                break;
            }
        }
    }
    candidates
}

/// Subset-frequency pruning with the MIS relaxation.
///
/// Every (k-1)-subset obtained by dropping one element must be a known
/// frequent itemset — except the subset dropping the first element, which is
/// exempt when the second element's MIS differs from the first's. The MIS
/// values compare exactly: equal thresholds arise from identical arithmetic.
fn survives_subset_pruning(
    candidate: &[Item],
    mis: &MisTable,
    known: &HashSet<&[Item]>,
) -> bool {
    let relaxed = mis.mis(candidate[1]) != mis.mis(candidate[0]);
    let mut subset = Vec::with_capacity(candidate.len() - 1);
    for omit in 0..candidate.len() {
        if omit == 0 && relaxed {
            continue;
        }
        subset.clear();
        subset.extend_from_slice(&candidate[..omit]);
        subset.extend_from_slice(&candidate[omit + 1..]);
        if !known.contains(subset.as_slice()) {
            return false;
        }
    }
    true
}
