// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded-budget subset selection with a self-scheduling memoizer.
//!
//! Given items that each carry a *control* quantity (cost) and a *response*
//! quantity (value), and a control budget, select a subset whose total control
//! fits the budget and whose total response is maximal. Items may be reused
//! (unbounded knapsack) or used at most once (0/1 knapsack).
//!
//! # Architecture
//!
//! The crate has two tiers:
//!
//! ## Tier 1: Memoizing evaluator
//!
//! A generic fixpoint evaluator for self-referential functions `f(a, b)`:
//! - [`memo::PairKey`] - encodes a task `(a, b)` as one table key
//! - [`memo::MemoTable`] - write-once result table
//! - [`engine::Memoizer`] - worklist loop that evaluates, defers and retries tasks
//! - [`engine::Step`] - the task body, which resolves a task or schedules its dependencies
//!
//! ## Tier 2: Knapsack reduction
//!
//! - [`Optimizer`] - sorted collection, selectors, and the recurrence
//! - [`optimize::KnapsackStep`] - the recurrence as a memoizer step
//! - [`optimize_records`] - the same over JSON records addressed by field name
//!
//! # Execution
//!
//! Everything is single-threaded and synchronous. Each memoized `optimize`
//! call builds its own [`engine::Memoizer`] and drops it on return; no table
//! outlives a request.
//!
//! # Example
//!
//! ```
//! use dynamic_optimize::{Optimizer, Strategy};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Item { min: i64, max: i64 }
//!
//! let sample = vec![
//!     Item { min: 5, max: 1 },
//!     Item { min: 15, max: 1 },
//!     Item { min: 50, max: 10 },
//!     Item { min: 40, max: 9 },
//!     Item { min: 200, max: 50 },
//! ];
//!
//! let mut optimizer = Optimizer::builder(|i: &Item| i.min, |i: &Item| i.max)
//!     .allow_repeats(false)
//!     .build();
//! let chosen = optimizer.optimize(sample, 160, Strategy::Memoized).unwrap();
//! assert_eq!(chosen.iter().map(|i| i.max).sum::<i64>(), 21);
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod memo;
pub mod optimize;

// Re-export commonly used types
pub use config::{MemoizerConfig, OptimizerConfig, Strategy};
pub use engine::{Memoizer, Step, StepResult};
pub use errors::{MemoError, OptimizeError, Result};
pub use optimize::{optimize_records, Optimizer, OptimizerBuilder, PartialResult};
