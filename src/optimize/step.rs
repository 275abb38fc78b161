// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The knapsack recurrence as a memoizer step.

use crate::engine::{Memoizer, Step, StepResult};

use super::{Optimizer, PartialResult};

/// Evaluates one `(target, max_index)` task of an [`Optimizer`].
///
/// The step schedules whichever of its two sub-states (exclude and include)
/// are missing and defers. Once both are in the table it combines them and
/// stores the result, so every reachable `(target, max_index)` pair is
/// computed exactly once.
pub struct KnapsackStep<'a, T> {
    optimizer: &'a Optimizer<T>,
}

impl<'a, T> KnapsackStep<'a, T> {
    pub fn new(optimizer: &'a Optimizer<T>) -> Self {
        Self { optimizer }
    }
}

impl<T: Clone + PartialEq> Step<PartialResult<T>> for KnapsackStep<'_, T> {
    fn step(
        &mut self,
        memo: &mut Memoizer<PartialResult<T>>,
        target: i64,
        max_index: i64,
    ) -> StepResult {
        let optimizer = self.optimizer;
        let cut = optimizer.cut_off_index(target, max_index);
        if cut < 0 {
            return memo.put(target, max_index, optimizer.build_result(-1));
        }

        let item = &optimizer.collection[cut as usize];
        let exclude = (target, cut - 1);
        let include = (target - optimizer.control_of(item), optimizer.include_index(cut));

        let combined = match (memo.get(exclude.0, exclude.1), memo.get(include.0, include.1)) {
            (Some(excluded), Some(included)) => Some(optimizer.combine(excluded, included, item)),
            _ => None,
        };

        match combined {
            Some(result) => memo.put(target, max_index, result),
            None => {
                if !memo.has(exclude.0, exclude.1) {
                    memo.schedule(exclude.0, exclude.1);
                }
                if !memo.has(include.0, include.1) {
                    memo.schedule(include.0, include.1);
                }
                StepResult::Deferred
            }
        }
    }

    fn name(&self) -> &str {
        "knapsack"
    }
}
