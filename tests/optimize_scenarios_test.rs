// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scenario tests for the optimizer.
//!
//! These tests run the five-item sample through both solution paths and
//! both selection policies, checking:
//! - The optimal total response for each budget
//! - That the selection fits the budget
//! - That the cut-off index search handles exact matches and the ends

mod common;

use common::{item, optimizer, sample, total_max, total_min};
use dynamic_optimize::Strategy;

const STRATEGIES: [Strategy; 2] = [Strategy::Recursive, Strategy::Memoized];

fn check(allow_repeats: bool, target: i64, expected: i64) {
    for strategy in STRATEGIES {
        let mut resolver = optimizer(allow_repeats);
        let result = resolver.optimize(sample(), target, strategy).unwrap();

        assert!(
            total_min(&result) <= target,
            "{:?} exceeded budget {}: {:?}",
            strategy,
            target,
            result
        );
        assert_eq!(
            total_max(&result),
            expected,
            "{:?} with allow_repeats={} at budget {}",
            strategy,
            allow_repeats,
            target
        );
    }
}

#[test]
fn test_repeats_sample_1() {
    check(true, 150, 33);
}

#[test]
fn test_repeats_sample_2() {
    check(true, 160, 36);
}

#[test]
fn test_repeats_sample_3() {
    check(true, 170, 38);
}

#[test]
fn test_repeats_sample_4() {
    check(true, 200, 50);
}

#[test]
fn test_no_repeats_sample_1() {
    check(false, 150, 21);
}

#[test]
fn test_no_repeats_sample_2() {
    check(false, 160, 21);
}

#[test]
fn test_no_repeats_sample_3() {
    check(false, 170, 21);
}

#[test]
fn test_no_repeats_sample_4() {
    check(false, 200, 50);
}

#[test]
fn test_zero_and_negative_budget() {
    for strategy in STRATEGIES {
        for target in [0, -1, -500] {
            let result = optimizer(true).optimize(sample(), target, strategy).unwrap();
            assert!(result.is_empty());
        }
    }
}

#[test]
fn test_cut_off_index_scenarios() {
    let mut resolver = optimizer(true);
    resolver.set_collection(sample()).unwrap();
    assert_eq!(
        resolver.collection().iter().map(|i| i.min).collect::<Vec<_>>(),
        vec![5, 15, 40, 50, 200]
    );

    let last = resolver.collection().len() as i64 - 1;
    assert_eq!(resolver.cut_off_index(150, last), 3);
    assert_eq!(resolver.cut_off_index(15, last), 1);
    assert_eq!(resolver.cut_off_index(300, last), 4);
    assert_eq!(resolver.cut_off_index(0, last), -1);
}

#[test]
fn test_collection_is_reassigned_per_call() {
    let mut resolver = optimizer(false);
    resolver
        .optimize(sample(), 100, Strategy::Memoized)
        .unwrap();
    let result = resolver
        .optimize(vec![item(7, 3), item(3, 2)], 10, Strategy::Memoized)
        .unwrap();
    assert_eq!(resolver.collection(), &[item(3, 2), item(7, 3)]);
    assert_eq!(total_max(&result), 5);
}

#[test]
fn test_unit_cost_items_with_repeats() {
    let items = vec![item(1, 1), item(3, 4)];
    for strategy in STRATEGIES {
        let mut resolver = common::builder().allow_repeats(true).build();
        let best = resolver.solve(items.clone(), 602, strategy).unwrap();
        assert_eq!(best.accumulator(), 200 * 4 + 2);
        assert!(total_min(best.collection()) <= 602);
    }
}
