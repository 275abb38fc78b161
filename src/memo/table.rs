// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Write-once memo table keyed by [`PairKey`].

use std::collections::HashMap;

use super::key::PairKey;

/// Mapping from encoded `(a, b)` tasks to resolved results.
///
/// Entries are write-once: the first value stored for a key is kept, and a
/// later write is only accepted when it is equal to the stored value. A
/// conflicting rewrite indicates an encoding collision or an impure step,
/// and is reported by [`MemoTable::insert`] returning `false`.
#[derive(Debug, Clone)]
pub struct MemoTable<R> {
    entries: HashMap<PairKey, R>,
}

impl<R> MemoTable<R> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn contains(&self, key: PairKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn get(&self, key: PairKey) -> Option<&R> {
        self.entries.get(&key)
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: PartialEq> MemoTable<R> {
    /// Store `value` for `key`.
    ///
    /// Returns `false` only when a different value is already stored; the
    /// existing entry is left untouched in that case.
    pub fn insert(&mut self, key: PairKey, value: R) -> bool {
        match self.entries.get(&key) {
            Some(existing) => *existing == value,
            None => {
                self.entries.insert(key, value);
                true
            }
        }
    }
}

impl<R> Default for MemoTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
