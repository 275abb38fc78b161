// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Knapsack reduction over a sorted collection.
//!
//! The [`Optimizer`] maximizes total *response* subject to total *control*
//! not exceeding a budget. Items are read through two selectors fixed at
//! construction, and kept sorted ascending by control.
//!
//! # Recurrence
//!
//! For a task `(target, max_index)`:
//!
//! 1. Find the cut-off index: the greatest `i <= max_index` whose control is
//!    `<= target`. If there is none, the result is empty.
//! 2. *Exclude* the cut-off item: solve `(target, cut - 1)`.
//! 3. *Include* it: solve `(target - control, cut)` when repeats are allowed,
//!    `(target - control, cut - 1)` otherwise, then append the item.
//! 4. Keep whichever has the strictly larger accumulator. Ties keep exclude.
//!
//! The recurrence runs either as plain recursion ([`Strategy::Recursive`]) or
//! as a [`Memoizer`] step ([`Strategy::Memoized`]).
//!
//! # Example
//!
//! ```
//! use dynamic_optimize::{Optimizer, Strategy};
//!
//! let items = vec![(5, 1), (15, 1), (50, 10), (40, 9), (200, 50)];
//! let mut optimizer = Optimizer::new(|item: &(i64, i64)| item.0, |item: &(i64, i64)| item.1);
//!
//! let best = optimizer.solve(items, 150, Strategy::Memoized).unwrap();
//! assert_eq!(best.accumulator(), 33);
//! ```

pub mod boundary;
pub mod builder;
pub mod record;
pub mod result;
pub mod step;

pub use boundary::{BoundarySearch, SortByKey};
pub use builder::OptimizerBuilder;
pub use record::optimize_records;
pub use result::PartialResult;
pub use step::KnapsackStep;

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::{MemoizerConfig, Strategy};
use crate::engine::Memoizer;
use crate::errors::{OptimizeError, Result};

/// Reads one numeric quantity out of an item.
pub type Selector<T> = Arc<dyn Fn(&T) -> i64 + Send + Sync>;

/// Bounded-budget subset selection over items of type `T`.
pub struct Optimizer<T> {
    control: Selector<T>,
    response: Selector<T>,
    allow_repeats: bool,
    find_boundary_index: BoundarySearch<T>,
    sort_by_key: SortByKey<T>,
    memoizer: MemoizerConfig,
    /// Sorted ascending by control.
    collection: Vec<T>,
}

impl<T> Optimizer<T> {
    /// Create an optimizer with default settings: repeats allowed, default
    /// sort and boundary search, diagnostics off.
    pub fn new<C, V>(control: C, response: V) -> Self
    where
        C: Fn(&T) -> i64 + Send + Sync + 'static,
        V: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        Self::builder(control, response).build()
    }

    pub fn builder<C, V>(control: C, response: V) -> OptimizerBuilder<T>
    where
        C: Fn(&T) -> i64 + Send + Sync + 'static,
        V: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        OptimizerBuilder::new(Arc::new(control), Arc::new(response))
    }

    pub fn allow_repeats(&self) -> bool {
        self.allow_repeats
    }

    /// The current collection, sorted ascending by control.
    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    /// Replace the collection, sorting it by control.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::InvalidControl`] if any item has a negative control,
    /// or a zero control while repeats are allowed. A free reusable item would
    /// make a task depend on itself, and a negative control would make a
    /// negative budget non-empty.
    pub fn set_collection(&mut self, items: Vec<T>) -> Result<()> {
        let min_control = if self.allow_repeats { 1 } else { 0 };
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| self.control_of(item) < min_control)
        {
            return Err(OptimizeError::InvalidControl {
                index,
                control: self.control_of(item),
            });
        }
        self.collection = (self.sort_by_key)(items, &*self.control);
        Ok(())
    }

    pub fn control_of(&self, item: &T) -> i64 {
        (self.control)(item)
    }

    pub fn response_of(&self, item: &T) -> i64 {
        (self.response)(item)
    }

    /// Greatest index `<= max_index` whose control is `<= target`, or `-1`.
    pub fn cut_off_index(&self, target: i64, max_index: i64) -> i64 {
        let len = self.collection.len();
        // The insertion point of `target + 1` is one past the last exact fit.
        let insertion = match target.checked_add(1) {
            Some(probe) => {
                (self.find_boundary_index)(&self.collection, probe, &*self.control).min(len)
            }
            None => len,
        };
        (insertion as i64 - 1).min(max_index)
    }

    /// Index bound for the include branch.
    fn include_index(&self, cut: i64) -> i64 {
        if self.allow_repeats {
            cut
        } else {
            cut - 1
        }
    }
}

impl<T: Clone> Optimizer<T> {
    /// Prefix of the sorted collection up to and including `cut_off_index`.
    pub fn build_result(&self, cut_off_index: i64) -> PartialResult<T> {
        let end = (cut_off_index + 1).clamp(0, self.collection.len() as i64) as usize;
        PartialResult::from_items(self.collection[..end].to_vec(), |item| self.response_of(item))
    }

    /// Pick between the exclude and include branches for the item at a cut.
    ///
    /// `include` is the sub-result *before* the item is appended. Only a
    /// strictly better include replaces exclude.
    fn combine(
        &self,
        exclude: &PartialResult<T>,
        include: &PartialResult<T>,
        item: &T,
    ) -> PartialResult<T> {
        let response = self.response_of(item);
        if include.accumulator().saturating_add(response) > exclude.accumulator() {
            include.appended(item.clone(), response)
        } else {
            exclude.clone()
        }
    }

    /// The recurrence by direct recursion, without caching.
    ///
    /// Exponential in the worst case; meant for small inputs and as a
    /// reference for the memoized path.
    pub fn reduce_recursively(&self, target: i64, max_index: i64) -> PartialResult<T> {
        let cut = self.cut_off_index(target, max_index);
        if cut < 0 {
            return self.build_result(-1);
        }

        let item = &self.collection[cut as usize];
        let exclude = self.reduce_recursively(target, cut - 1);
        let include =
            self.reduce_recursively(target - self.control_of(item), self.include_index(cut));
        self.combine(&exclude, &include, item)
    }

    /// The recurrence on a fresh [`Memoizer`] seeded with `(target, max_index)`.
    pub fn reduce_memoized(&self, target: i64, max_index: i64) -> Result<PartialResult<T>>
    where
        T: PartialEq,
    {
        let mut memo = Memoizer::with_config(target, max_index, self.memoizer);
        let result = memo.run(&mut KnapsackStep::new(self))?;
        Ok(result.clone())
    }

    /// Optimize `items` for `target`, returning the selection and its total.
    ///
    /// The collection is replaced by `items` sorted by control.
    pub fn solve(
        &mut self,
        items: Vec<T>,
        target: i64,
        strategy: Strategy,
    ) -> Result<PartialResult<T>>
    where
        T: PartialEq,
    {
        self.set_collection(items)?;
        let last_index = self.collection.len() as i64 - 1;
        debug!(
            items = self.collection.len(),
            target,
            ?strategy,
            allow_repeats = self.allow_repeats,
            "optimizing"
        );

        let result = match strategy {
            Strategy::Recursive => self.reduce_recursively(target, last_index),
            Strategy::Memoized => self.reduce_memoized(target, last_index)?,
        };

        debug!(
            selected = result.len(),
            accumulator = result.accumulator(),
            "optimization finished"
        );
        Ok(result)
    }

    /// Optimize `items` for `target`, returning only the selected items.
    pub fn optimize(&mut self, items: Vec<T>, target: i64, strategy: Strategy) -> Result<Vec<T>>
    where
        T: PartialEq,
    {
        self.solve(items, target, strategy)
            .map(PartialResult::into_collection)
    }
}

impl<T> fmt::Debug for Optimizer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimizer")
            .field("allow_repeats", &self.allow_repeats)
            .field("memoizer", &self.memoizer)
            .field("items", &self.collection.len())
            .finish_non_exhaustive()
    }
}
