//! End-to-end tests for the mining driver.
//!
//! The fixtures are small enough to trace by hand; expected levels, counts
//! and orderings are written out exactly, because emission order is part of
//! the contract (canonical order, stable across runs).


use crate::constraints::CannotTogetherGroup;
use crate::error::{ConfigError, ConstraintError, MiningError};
use crate::miner::{MinerConfig, MsApriori};
use crate::support::InvertedIndexCounter;
use crate::test_utils::{init_logger, transactions};
use crate::{FrequentItemset, Transaction};

fn itemset(items: &[u64], count: usize) -> FrequentItemset {
    FrequentItemset {
        items: items.to_vec(),
        count,
    }
}

/// Five transactions over three items, every support 0.8: with ls 0.2 and
/// beta 0.5 all thresholds land on 0.4.
fn uniform_dataset() -> Vec<Transaction> {
    transactions(&[&[1, 2, 3], &[1, 2], &[1, 3], &[2, 3], &[1, 2, 3]])
}

/// Ten transactions with skewed supports: 1 -> 0.7, 2 -> 0.6, 3 -> 0.3.
/// With ls 0.1 and beta 0.5 the thresholds are 0.35, 0.3 and 0.15, so the
/// canonical order is [3, 2, 1].
fn skewed_dataset() -> Vec<Transaction> {
    transactions(&[
        &[1, 2, 3],
        &[1, 2, 3],
        &[2, 3],
        &[1, 2],
        &[2],
        &[2],
        &[1],
        &[1],
        &[1],
        &[1],
    ])
}

// ========== Unconstrained mining ==========

#[test]
fn test_uniform_dataset_mines_singletons_and_pairs() {
    init_logger();
    let config = MinerConfig::new().ls(0.2).beta(0.5);

    let report = MsApriori::configure(config, uniform_dataset())
        .expect("valid configuration")
        .run();

    assert_eq!(report.levels.len(), 2);
    assert_eq!(
        report.levels[0].itemsets,
        vec![itemset(&[1], 4), itemset(&[2], 4), itemset(&[3], 4)]
    );
    assert_eq!(
        report.levels[1].itemsets,
        vec![
            itemset(&[1, 2], 3),
            itemset(&[1, 3], 3),
            itemset(&[2, 3], 3)
        ]
    );
    // The size-3 candidate (1, 3, 2) demands its subset (3, 2) in stored
    // order, which does not exist under equal thresholds: mining stops at 2.
    assert_eq!(report.max_size, 2);
    assert_eq!(report.total, 6);
}

#[test]
fn test_skewed_dataset_reaches_size_3_through_mis_relaxation() {
    init_logger();
    let config = MinerConfig::new().ls(0.1).beta(0.5);

    let report = MsApriori::configure(config, skewed_dataset())
        .expect("valid configuration")
        .run();

    assert_eq!(report.levels.len(), 3);
    // Seed level follows the canonical (ascending MIS) order.
    assert_eq!(
        report.levels[0].itemsets,
        vec![itemset(&[3], 3), itemset(&[2], 6), itemset(&[1], 7)]
    );
    // (2, 1) co-occurs in 3 transactions: support 0.3 does not strictly
    // exceed mis(2) = 0.3, so only the two pairs led by item 3 survive.
    assert_eq!(
        report.levels[1].itemsets,
        vec![itemset(&[3, 2], 3), itemset(&[3, 1], 2)]
    );
    // (3, 2, 1) is frequent although (2, 1) never was: the subset dropping
    // item 3 is exempt because mis(2) != mis(3).
    assert_eq!(report.levels[2].itemsets, vec![itemset(&[3, 2, 1], 2)]);
    assert_eq!(report.max_size, 3);
    assert_eq!(report.total, 6);
}

#[test]
fn test_output_is_deterministic_across_runs() {
    init_logger();
    let config = MinerConfig::new().ls(0.1).beta(0.5);

    let first = MsApriori::configure(config.clone(), skewed_dataset())
        .expect("valid configuration")
        .run();
    let second = MsApriori::configure(config, skewed_dataset())
        .expect("valid configuration")
        .run();

    assert_eq!(first, second, "identical input must emit identical order");
}

#[test]
fn test_counting_strategy_does_not_change_the_report() {
    init_logger();
    let config = MinerConfig::new().ls(0.1).beta(0.5);

    let naive = MsApriori::configure(config.clone(), skewed_dataset())
        .expect("valid configuration")
        .run();
    let inverted = MsApriori::with_counter(config, skewed_dataset(), InvertedIndexCounter)
        .expect("valid configuration")
        .run();

    assert_eq!(naive, inverted);
}

// ========== Constraints ==========

#[test]
fn test_must_have_filters_report_and_keeps_max_size() {
    init_logger();
    let config = MinerConfig::new().ls(0.2).beta(0.5).must_have([3]);

    let report = MsApriori::configure(config, uniform_dataset())
        .expect("valid configuration")
        .run();

    assert_eq!(
        report.levels[0].itemsets,
        vec![itemset(&[3], 4)],
        "only singletons containing item 3 survive"
    );
    assert_eq!(
        report.levels[1].itemsets,
        vec![itemset(&[1, 3], 3), itemset(&[2, 3], 3)]
    );
    assert_eq!(report.total, 3, "the total is recomputed after filtering");
    assert_eq!(report.max_size, 2);
}

#[test]
fn test_must_have_without_match_empties_report_but_not_max_size() {
    init_logger();
    let config = MinerConfig::new().ls(0.1).beta(0.5).must_have([99]);

    let report = MsApriori::configure(config, skewed_dataset())
        .expect("valid configuration")
        .run();

    assert!(report.levels.is_empty());
    assert_eq!(report.total, 0);
    assert_eq!(
        report.max_size, 3,
        "max size reflects how far mining got, not the postpass"
    );
}

#[test]
fn test_cannot_together_rejects_supersets_during_extraction() {
    init_logger();
    let config = MinerConfig::new()
        .ls(0.1)
        .beta(0.5)
        .cannot_together(CannotTogetherGroup::of_items([1, 2]));

    let report = MsApriori::configure(config, skewed_dataset())
        .expect("valid configuration")
        .run();

    // {1, 2} is banned: the size-3 candidate (3, 2, 1) is rejected during
    // extraction, so mining ends at size 2 with the pairs led by item 3.
    assert_eq!(
        report.levels[1].itemsets,
        vec![itemset(&[3, 2], 3), itemset(&[3, 1], 2)]
    );
    assert_eq!(report.max_size, 2);
    assert_eq!(report.total, 5);
    for found in report.iter() {
        assert!(
            !(found.items.contains(&1) && found.items.contains(&2)),
            "banned combination leaked into {:?}",
            found.items
        );
    }
}

#[test]
fn test_cannot_together_with_combined_unit() {
    init_logger();
    // The pre-combined unit [2, 1] only bans the full triple {1, 2, 3}, so
    // both pairs survive while the size-3 itemset is rejected.
    let config = MinerConfig::new()
        .ls(0.1)
        .beta(0.5)
        .cannot_together(CannotTogetherGroup::new(vec![vec![3], vec![2, 1]]));

    let report = MsApriori::configure(config, skewed_dataset())
        .expect("valid configuration")
        .run();

    assert_eq!(
        report.levels[1].itemsets,
        vec![itemset(&[3, 2], 3), itemset(&[3, 1], 2)]
    );
    assert_eq!(report.max_size, 2);
}

// ========== Degenerate inputs ==========

#[test]
fn test_empty_dataset_reports_nothing() {
    init_logger();
    let report = MsApriori::configure(MinerConfig::new(), Vec::new())
        .expect("an empty dataset is not a configuration error")
        .run();

    assert!(report.levels.is_empty());
    assert_eq!(report.max_size, 0);
    assert_eq!(report.total, 0);
}

#[test]
fn test_nothing_qualifies_reports_nothing() {
    init_logger();
    // With beta = 1 and no floor every MIS equals the item's own support;
    // the strict first-pass test never passes.
    let config = MinerConfig::new().ls(0.0).beta(1.0);

    let report = MsApriori::configure(config, uniform_dataset())
        .expect("valid configuration")
        .run();

    assert!(report.levels.is_empty());
    assert_eq!(report.max_size, 0);
    assert_eq!(report.total, 0);
}

#[test]
fn test_iterator_yields_levels_and_stops() {
    init_logger();
    let config = MinerConfig::new().ls(0.1).beta(0.5);
    let mut miner = MsApriori::configure(config, skewed_dataset()).expect("valid configuration");

    let seed = miner.next().expect("the seed level is always yielded");
    assert_eq!(seed.size, 1);
    assert_eq!(seed.len(), 3);

    let pairs = miner.next().expect("size 2 is non-empty here");
    assert_eq!(pairs.size, 2);

    let triples = miner.next().expect("size 3 is non-empty here");
    assert_eq!(triples.size, 3);

    assert!(miner.next().is_none(), "size 4 has no candidates");
    assert!(miner.next().is_none(), "the driver stays done");
}

#[test]
fn test_empty_seed_level_does_not_end_the_run() {
    init_logger();
    let config = MinerConfig::new().ls(0.0).beta(1.0);
    let mut miner = MsApriori::configure(config, uniform_dataset()).expect("valid configuration");

    let seed = miner.next().expect("the seed level is always yielded");
    assert_eq!(seed.size, 1);
    assert!(seed.is_empty());

    assert!(miner.next().is_none(), "size 2 finds nothing and terminates");
}

// ========== Configuration validation ==========

#[test]
fn test_configure_rejects_out_of_range_tunables() {
    init_logger();
    let result = MsApriori::configure(MinerConfig::new().ls(1.5), uniform_dataset());

    assert!(matches!(
        result.err(),
        Some(MiningError::Config(ConfigError::TunableOutOfRange {
            name: "ls",
            ..
        }))
    ));

    let result = MsApriori::configure(MinerConfig::new().beta(-0.1), uniform_dataset());

    assert!(matches!(
        result.err(),
        Some(MiningError::Config(ConfigError::TunableOutOfRange {
            name: "beta",
            ..
        }))
    ));
}

#[test]
fn test_configure_rejects_malformed_constraint_group() {
    init_logger();
    let config =
        MinerConfig::new().cannot_together(CannotTogetherGroup::new(vec![vec![1], vec![]]));

    let result = MsApriori::configure(config, uniform_dataset());

    assert!(matches!(
        result.err(),
        Some(MiningError::Constraint(ConstraintError::EmptyUnit {
            group: 0
        }))
    ));
}
