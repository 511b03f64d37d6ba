use crate::Item;
use crate::mis::MisEntry;
use crate::support::SupportIndex;

/// Generate size-2 candidates from the first-pass sequence.
///
/// For positions i < j of the first pass, the pair `(i, j)` is emitted iff
/// `support(i) >= mis(i)`, `support(j) >= mis(i)` (both against the earlier
/// item's threshold) and the fractional support difference stays within
/// `sup_dif_allowed`. The output preserves the canonical order.
pub fn level2_candidates(
    first_pass: &[MisEntry],
    stats: &SupportIndex,
    sup_dif_allowed: f64,
) -> Vec<Vec<Item>> {
    let mut candidates = Vec::new();
    for (i, lead) in first_pass.iter().enumerate() {
        let lead_support = stats.support(lead.item);
        if lead_support < lead.mis {
            continue;
        }
        for follow in &first_pass[i + 1..] {
            let follow_support = stats.support(follow.item);
            if follow_support >= lead.mis && (follow_support - lead_support).abs() <= sup_dif_allowed
            {
                candidates.push(vec![lead.item, follow.item]);
            }
        }
    }
    candidates
}
