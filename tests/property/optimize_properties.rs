// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

#[path = "../common/mod.rs"]
mod common;

use std::collections::HashSet;

use common::{item, optimizer, reference_optimum, total_max, total_min, Item};
use dynamic_optimize::memo::PairKey;
use dynamic_optimize::Strategy as Reduction;
use proptest::prelude::*;

fn item_sets() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((3i64..30, 0i64..20).prop_map(|(min, max)| item(min, max)), 0..6)
}

proptest! {
    #[test]
    fn encode_is_injective(a in 0i64..10_000, b in 0i64..10_000, c in 0i64..10_000, d in 0i64..10_000) {
        prop_assume!((a, b) != (c, d));
        prop_assert_ne!(PairKey::encode(a, b), PairKey::encode(c, d));
    }

    #[test]
    fn encode_collapses_negatives(a in i64::MIN..0, b in any::<i64>()) {
        prop_assert_eq!(PairKey::encode(a, b), PairKey::OutOfRange);
        prop_assert_eq!(PairKey::encode(b, a), PairKey::OutOfRange);
    }

    #[test]
    fn paths_agree_with_reference_optimum(
        items in item_sets(),
        target in 0i64..40,
        allow_repeats in any::<bool>(),
    ) {
        let expected = reference_optimum(&items, target, allow_repeats);
        for strategy in [Reduction::Recursive, Reduction::Memoized] {
            let result = optimizer(allow_repeats)
                .optimize(items.clone(), target, strategy)
                .unwrap();
            prop_assert!(total_min(&result) <= target);
            prop_assert_eq!(total_max(&result), expected);
        }
    }

    #[test]
    fn selection_drawn_from_input(items in item_sets(), target in 0i64..40) {
        let result = optimizer(false)
            .optimize(items.clone(), target, Reduction::Memoized)
            .unwrap();
        // Without repeats each selected item is a distinct input position.
        let mut remaining = items;
        for chosen in &result {
            let position = remaining.iter().position(|i| i == chosen);
            prop_assert!(position.is_some(), "{:?} not in input", chosen);
            if let Some(position) = position {
                remaining.swap_remove(position);
            }
        }
    }

    #[test]
    fn monotone_in_budget(items in item_sets(), target in 0i64..40, allow_repeats in any::<bool>()) {
        let mut resolver = optimizer(allow_repeats);
        let lower = resolver.solve(items.clone(), target, Reduction::Memoized).unwrap();
        let higher = resolver.solve(items, target + 1, Reduction::Memoized).unwrap();
        prop_assert!(higher.accumulator() >= lower.accumulator());
    }
}

#[test]
fn encode_small_grid_has_no_collisions() {
    let keys: HashSet<_> = (0..100)
        .flat_map(|a| (0..100).map(move |b| PairKey::encode(a, b)))
        .collect();
    assert_eq!(keys.len(), 100 * 100);
}
