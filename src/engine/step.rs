// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step trait for the memoizing evaluator.
//!
//! A step is the body of a self-referential function `f(a, b)`. When the
//! memoizer hands it a task it either stores the answer and reports
//! [`StepResult::Resolved`], or schedules the sub-tasks it is missing and
//! reports [`StepResult::Deferred`].
//!
//! # Example
//!
//! ```
//! use dynamic_optimize::engine::{Memoizer, Step, StepResult};
//!
//! /// Binomial coefficients by Pascal's rule.
//! struct Choose;
//!
//! impl Step<u64> for Choose {
//!     fn step(&mut self, memo: &mut Memoizer<u64>, n: i64, k: i64) -> StepResult {
//!         if k == 0 || k == n {
//!             return memo.put(n, k, 1);
//!         }
//!         match (memo.get(n - 1, k - 1).copied(), memo.get(n - 1, k).copied()) {
//!             (Some(left), Some(right)) => memo.put(n, k, left + right),
//!             (left, right) => {
//!                 if left.is_none() {
//!                     memo.schedule(n - 1, k - 1);
//!                 }
//!                 if right.is_none() {
//!                     memo.schedule(n - 1, k);
//!                 }
//!                 StepResult::Deferred
//!             }
//!         }
//!     }
//! }
//!
//! let mut memo = Memoizer::new(30, 15);
//! assert_eq!(memo.run(&mut Choose), Ok(&155_117_520));
//! ```

use super::Memoizer;

/// Outcome of evaluating one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The task's value is now in the table.
    Resolved,

    /// Dependencies were scheduled; retry the task after they resolve.
    Deferred,
}

impl StepResult {
    pub fn is_resolved(self) -> bool {
        matches!(self, StepResult::Resolved)
    }
}

/// Task body driven by [`Memoizer::run`].
///
/// # Contract
///
/// For every task `(a, b)` a step must either
/// 1. call [`Memoizer::put`] for `(a, b)` and return `Resolved`, or
/// 2. call [`Memoizer::schedule`] for at least one unresolved dependency and
///    return `Deferred`.
///
/// Steps must be pure: the same `(a, b)` always yields the same value. Since
/// every task with a negative component shares one key, a step must also
/// return one fixed base case for all such tasks.
pub trait Step<R> {
    fn step(&mut self, memo: &mut Memoizer<R>, a: i64, b: i64) -> StepResult;

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A [`Step`] built from a closure. See [`step_fn`].
pub struct StepFn<F> {
    f: F,
}

/// Wrap a closure as a [`Step`].
///
/// ```
/// use dynamic_optimize::engine::{step_fn, Memoizer, StepResult};
///
/// let mut memo = Memoizer::new(0, 0);
/// memo.put(3, 3, "done");
/// let result = memo.run(&mut step_fn(|memo: &mut Memoizer<&str>, a, b| {
///     match memo.get(a + 1, b + 1).copied() {
///         Some(value) => memo.put(a, b, value),
///         None => memo.schedule(a + 1, b + 1),
///     }
/// }));
/// assert_eq!(result, Ok(&"done"));
/// ```
pub fn step_fn<R, F>(f: F) -> StepFn<F>
where
    F: FnMut(&mut Memoizer<R>, i64, i64) -> StepResult,
{
    StepFn { f }
}

impl<R, F> Step<R> for StepFn<F>
where
    F: FnMut(&mut Memoizer<R>, i64, i64) -> StepResult,
{
    fn step(&mut self, memo: &mut Memoizer<R>, a: i64, b: i64) -> StepResult {
        (self.f)(memo, a, b)
    }

    fn name(&self) -> &str {
        "closure"
    }
}
