// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use dynamic_optimize::{Optimizer, OptimizerBuilder};

/// An item with the field names used throughout the tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub min: i64,
    pub max: i64,
}

pub fn item(min: i64, max: i64) -> Item {
    Item { min, max }
}

/// The five-item sample used by the scenario tests.
pub fn sample() -> Vec<Item> {
    vec![
        item(5, 1),
        item(15, 1),
        item(50, 10),
        item(40, 9),
        item(200, 50),
    ]
}

pub fn builder() -> OptimizerBuilder<Item> {
    Optimizer::builder(|i: &Item| i.min, |i: &Item| i.max)
}

pub fn optimizer(allow_repeats: bool) -> Optimizer<Item> {
    builder().allow_repeats(allow_repeats).diagnostics(true).build()
}

pub fn total_min(items: &[Item]) -> i64 {
    items.iter().map(|i| i.min).sum()
}

pub fn total_max(items: &[Item]) -> i64 {
    items.iter().map(|i| i.max).sum()
}

/// Optimum from a bottom-up table over every budget up to `target`.
pub fn reference_optimum(items: &[Item], target: i64, allow_repeats: bool) -> i64 {
    if target < 0 {
        return 0;
    }
    let target = target as usize;
    let mut best = vec![0i64; target + 1];
    for item in items {
        let cost = item.min as usize;
        if cost > target {
            continue;
        }
        if allow_repeats {
            for budget in cost..=target {
                best[budget] = best[budget].max(best[budget - cost] + item.max);
            }
        } else {
            for budget in (cost..=target).rev() {
                best[budget] = best[budget].max(best[budget - cost] + item.max);
            }
        }
    }
    best[target]
}
