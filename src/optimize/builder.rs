// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder for [`Optimizer`].

use crate::config::MemoizerConfig;

use super::boundary::{self, BoundarySearch, SortByKey};
use super::{Optimizer, Selector};

/// Assembles an [`Optimizer`], starting from the defaults: repeats allowed,
/// [`boundary::sorted_index`], [`boundary::sort_by_key`], diagnostics off.
///
/// ```
/// use dynamic_optimize::Optimizer;
///
/// let optimizer = Optimizer::builder(|c: &(i64, i64)| c.0, |c: &(i64, i64)| c.1)
///     .allow_repeats(false)
///     .diagnostics(true)
///     .build();
/// assert!(!optimizer.allow_repeats());
/// ```
pub struct OptimizerBuilder<T> {
    control: Selector<T>,
    response: Selector<T>,
    allow_repeats: bool,
    find_boundary_index: BoundarySearch<T>,
    sort_by_key: SortByKey<T>,
    memoizer: MemoizerConfig,
}

impl<T> OptimizerBuilder<T> {
    pub fn new(control: Selector<T>, response: Selector<T>) -> Self {
        Self {
            control,
            response,
            allow_repeats: true,
            find_boundary_index: boundary::sorted_index,
            sort_by_key: boundary::sort_by_key,
            memoizer: MemoizerConfig::default(),
        }
    }

    pub fn allow_repeats(mut self, allow_repeats: bool) -> Self {
        self.allow_repeats = allow_repeats;
        self
    }

    /// Replace the insertion-point search used to find cut-off indices.
    pub fn find_boundary_index(mut self, find: BoundarySearch<T>) -> Self {
        self.find_boundary_index = find;
        self
    }

    /// Replace the stable sort applied when the collection is set.
    pub fn sort_by_key(mut self, sort: SortByKey<T>) -> Self {
        self.sort_by_key = sort;
        self
    }

    /// Enable the memoizer's runaway guard.
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.memoizer.diagnostics = enabled;
        self
    }

    pub fn queue_limit(mut self, limit: usize) -> Self {
        self.memoizer.queue_limit = limit;
        self
    }

    pub fn memoizer_config(mut self, config: MemoizerConfig) -> Self {
        self.memoizer = config;
        self
    }

    pub fn build(self) -> Optimizer<T> {
        Optimizer {
            control: self.control,
            response: self.response,
            allow_repeats: self.allow_repeats,
            find_boundary_index: self.find_boundary_index,
            sort_by_key: self.sort_by_key,
            memoizer: self.memoizer,
            collection: Vec::new(),
        }
    }
}
