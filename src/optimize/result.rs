// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial results of the knapsack reduction.

/// A candidate subset together with its total response.
///
/// Invariant: `accumulator` is the sum of the response of every item in
/// `collection`. Values are only built through [`PartialResult::empty`],
/// [`PartialResult::from_items`] and [`PartialResult::appended`], which keep
/// it. Sums saturate at the bounds of `i64` rather than overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialResult<T> {
    collection: Vec<T>,
    accumulator: i64,
}

impl<T> PartialResult<T> {
    /// The base case: nothing selected.
    pub fn empty() -> Self {
        Self {
            collection: Vec::new(),
            accumulator: 0,
        }
    }

    /// Build a result from items, summing their responses.
    pub fn from_items(items: Vec<T>, response: impl Fn(&T) -> i64) -> Self {
        let accumulator = items
            .iter()
            .map(response)
            .fold(0i64, i64::saturating_add);
        Self {
            collection: items,
            accumulator,
        }
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn into_collection(self) -> Vec<T> {
        self.collection
    }
}

impl<T: Clone> PartialResult<T> {
    /// Independent copy with `item` appended.
    pub fn appended(&self, item: T, response: i64) -> Self {
        let mut result = self.clone();
        result.collection.push(item);
        result.accumulator = result.accumulator.saturating_add(response);
        result
    }
}

impl<T> Default for PartialResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
