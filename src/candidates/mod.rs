//! Candidate itemset generation.
//!
//! Level-2 candidates come straight from the first-pass sequence; sizes k >= 3
//! are produced by a self-join over the frequent (k-1)-itemsets. Both steps
//! deviate from classical Apriori on purpose:
//!
//! - the level-2 admission test compares *both* pair members against the MIS
//!   of the earlier one (asymmetric by design),
//! - subset-frequency pruning in the join exempts the subset that drops the
//!   candidate's first element whenever the second element carries a different
//!   MIS — items that never shared a threshold were never jointly tested, so
//!   their joint absence proves nothing.

mod join;
mod level2;


pub use join::join_candidates;
pub use level2::level2_candidates;
