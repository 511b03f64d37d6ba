use super::{MisEntry, MisTable};
use crate::support::SupportIndex;
use log::debug;

/// Select the ordered seed items eligible for level-1/level-2 generation.
///
/// The canonical order is scanned for the first item whose support strictly
/// exceeds its *own* MIS; that item's MIS becomes the reference threshold.
/// Every later item whose support strictly exceeds the reference (not its own
/// MIS) joins the selection, preserving the canonical order.
///
/// When no item qualifies, the selection is empty. This is a valid "nothing
/// qualifies" outcome and must not fall through to a stale scan position.
pub fn select_first_pass(mis: &MisTable, stats: &SupportIndex) -> Vec<MisEntry> {
    let order = mis.sorted();
    let Some(seed) = order
        .iter()
        .position(|entry| stats.support(entry.item) > entry.mis)
    else {
        debug!("No item exceeds its own MIS; the first pass is empty.");
        return Vec::new();
    };

    let reference = order[seed].mis;
    let mut first_pass = vec![order[seed]];
    for entry in &order[seed + 1..] {
        if stats.support(entry.item) > reference {
            first_pass.push(*entry);
        }
    }
    first_pass
}
