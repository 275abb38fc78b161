// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Self-scheduling memoization engine.
//!
//! This module turns a recursive function with overlapping subproblems into
//! an explicit, non-recursive evaluation loop. Each subproblem is a task
//! `(a, b)`; its result is written once into a [`MemoTable`].
//!
//! # Architecture
//!
//! The memoizer owns two pieces of state:
//! - The memo table, mapping [`PairKey`]s to resolved results
//! - The worklist, a deque of pending tasks
//!
//! The loop follows a trampoline model:
//! 1. Pop the task at the front of the worklist
//! 2. If it is already resolved (by another path), discard it
//! 3. Otherwise call the [`Step`] on it
//! 4. If the step returns `Resolved`: move on
//! 5. If the step returns `Deferred`: push the task onto the *back*
//!
//! Dependencies are scheduled at the *front*, so they are evaluated before
//! the deferred task is retried. This is best-effort depth-first demand
//! evaluation over a dependency graph discovered one edge at a time; it is
//! not a verified topological sort. A step with a cyclic dependency never
//! drains the worklist, which is what the runaway guard is for.
//!
//! # Example
//!
//! ```
//! use dynamic_optimize::engine::{step_fn, Memoizer, StepResult};
//!
//! // Fibonacci without recursion: f(n, 0) = f(n - 1, 0) + f(n - 2, 0).
//! let mut memo = Memoizer::new(90, 0);
//! let fib = memo.run(&mut step_fn(|memo: &mut Memoizer<u64>, n, _| {
//!     if n < 2 {
//!         return memo.put(n, 0, n as u64);
//!     }
//!     match (memo.get(n - 1, 0).copied(), memo.get(n - 2, 0).copied()) {
//!         (Some(x), Some(y)) => memo.put(n, 0, x + y),
//!         _ => {
//!             memo.schedule(n - 2, 0);
//!             memo.schedule(n - 1, 0)
//!         }
//!     }
//! }));
//! assert_eq!(fib, Ok(&2_880_067_194_370_816_120));
//! ```

pub mod statistics;
pub mod step;

pub use statistics::{Counters, MemoStatistics};
pub use step::{step_fn, Step, StepFn, StepResult};

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::config::MemoizerConfig;
use crate::errors::MemoError;
use crate::memo::{MemoTable, PairKey};

/// Number of tasks from each end of the worklist reported when the
/// runaway guard trips.
const REPORT_SLICE: usize = 5;

/// Fixpoint evaluator for a self-referential function `f(a, b) -> R`.
///
/// A memoizer is seeded with one task and answers exactly that task. Create a
/// fresh one per computation; it is not meant to outlive a single request.
#[derive(Debug)]
pub struct Memoizer<R> {
    /// Resolved results.
    table: MemoTable<R>,

    /// Pending tasks. Front is evaluated next.
    worklist: VecDeque<(i64, i64)>,

    /// The task whose value `run` returns.
    initial: (i64, i64),

    config: MemoizerConfig,

    statistics: MemoStatistics,
}

impl<R> Memoizer<R> {
    /// Create a memoizer seeded with the task `(a, b)`.
    pub fn new(a: i64, b: i64) -> Self {
        Self::with_config(a, b, MemoizerConfig::default())
    }

    /// Create a memoizer with explicit runaway guard settings.
    pub fn with_config(a: i64, b: i64, config: MemoizerConfig) -> Self {
        let mut worklist = VecDeque::new();
        worklist.push_back((a, b));
        Self {
            table: MemoTable::new(),
            worklist,
            initial: (a, b),
            config,
            statistics: MemoStatistics::new(),
        }
    }

    /// Is there a stored result for `(a, b)`?
    pub fn has(&self, a: i64, b: i64) -> bool {
        self.table.contains(PairKey::encode(a, b))
    }

    /// Stored result for `(a, b)`, if resolved.
    pub fn get(&self, a: i64, b: i64) -> Option<&R> {
        self.table.get(PairKey::encode(a, b))
    }

    /// Push `(a, b)` onto the front of the worklist.
    ///
    /// Always returns [`StepResult::Deferred`], so a step can end with
    /// `return memo.schedule(..)`.
    pub fn schedule(&mut self, a: i64, b: i64) -> StepResult {
        self.worklist.push_front((a, b));
        StepResult::Deferred
    }

    /// Number of pending tasks.
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    /// Number of resolved entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn initial(&self) -> (i64, i64) {
        self.initial
    }

    pub fn statistics(&self) -> &MemoStatistics {
        &self.statistics
    }
}

impl<R: PartialEq> Memoizer<R> {
    /// Store the result for `(a, b)`.
    ///
    /// Always returns [`StepResult::Resolved`], so a step can end with
    /// `return memo.put(..)`. Entries are write-once; a conflicting rewrite is
    /// ignored and logged, since it means two distinct states share a key.
    pub fn put(&mut self, a: i64, b: i64, value: R) -> StepResult {
        let key = PairKey::encode(a, b);
        if !self.table.insert(key, value) {
            warn!(a, b, %key, "conflicting write ignored; existing entry kept");
        }
        StepResult::Resolved
    }

    /// Drain the worklist with `step` and return the initial task's result.
    ///
    /// # Errors
    ///
    /// - [`MemoError::Diverged`] if diagnostics are enabled and the worklist
    ///   grows past the configured limit
    /// - [`MemoError::Unresolved`] if the worklist drains but the step never
    ///   stored the initial task
    pub fn run<S: Step<R>>(&mut self, step: &mut S) -> Result<&R, MemoError> {
        let guard = self.config.guard();
        let (a0, b0) = self.initial;
        debug!(step = step.name(), a = a0, b = b0, "memoizer run started");

        loop {
            if let Some(limit) = guard {
                if self.worklist.len() > limit {
                    self.report_runaway(limit);
                    return Err(MemoError::Diverged {
                        pending: self.worklist.len(),
                        limit,
                    });
                }
            }

            let Some((a, b)) = self.worklist.pop_front() else {
                break;
            };

            if self.has(a, b) {
                self.statistics.increment(Counters::Skipped);
                continue;
            }

            self.statistics.increment(Counters::StepsTried);
            if self.config.diagnostics {
                trace!(a, b, pending = self.worklist.len(), "evaluating task");
            }

            match step.step(self, a, b) {
                StepResult::Resolved => self.statistics.increment(Counters::Resolved),
                StepResult::Deferred => {
                    self.statistics.increment(Counters::Deferred);
                    self.worklist.push_back((a, b));
                }
            }
        }

        debug!(
            entries = self.table.len(),
            statistics = %self.statistics,
            "memoizer run finished"
        );

        self.get(a0, b0)
            .ok_or(MemoError::Unresolved { a: a0, b: b0 })
    }

    fn report_runaway(&self, limit: usize) {
        let len = self.worklist.len();
        let head: Vec<_> = self.worklist.iter().take(REPORT_SLICE).collect();
        let tail: Vec<_> = self
            .worklist
            .iter()
            .skip(len.saturating_sub(REPORT_SLICE))
            .collect();
        warn!(
            pending = len,
            limit,
            ?head,
            ?tail,
            "worklist exceeded limit, step probably has a cyclic dependency; aborting"
        );
    }
}
