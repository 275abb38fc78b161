// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sorting and boundary search over a keyed collection.
//!
//! The optimizer takes both as plain function pointers so callers can swap in
//! their own; these are the defaults.

/// Insertion point of `probe`: the first index whose key is `>= probe`.
pub type BoundarySearch<T> = fn(&[T], i64, &dyn Fn(&T) -> i64) -> usize;

/// Stable ascending sort by key.
pub type SortByKey<T> = fn(Vec<T>, &dyn Fn(&T) -> i64) -> Vec<T>;

/// Binary search for the insertion point of `probe` in `items`, which must be
/// sorted ascending by `key`.
///
/// ```
/// use dynamic_optimize::optimize::boundary::sorted_index;
///
/// let controls = [5, 15, 40, 50, 200];
/// assert_eq!(sorted_index(&controls, 15, &|c| *c), 1);
/// assert_eq!(sorted_index(&controls, 150, &|c| *c), 4);
/// assert_eq!(sorted_index(&controls, 0, &|c| *c), 0);
/// ```
pub fn sorted_index<T>(items: &[T], probe: i64, key: &dyn Fn(&T) -> i64) -> usize {
    items.partition_point(|item| key(item) < probe)
}

/// Stable sort ascending by `key`. Equal keys keep their relative order.
pub fn sort_by_key<T>(mut items: Vec<T>, key: &dyn Fn(&T) -> i64) -> Vec<T> {
    items.sort_by_key(|item| key(item));
    items
}
