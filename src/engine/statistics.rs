// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the memoizer while it drains its worklist.

use std::fmt;

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Tasks handed to the step.
    StepsTried,
    /// Steps that reported missing dependencies.
    Deferred,
    /// Tasks popped after another path had already resolved them.
    Skipped,
    /// Steps that stored a value.
    Resolved,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoStatistics {
    stats: [u64; Counters::COUNT],
}

impl MemoStatistics {
    pub fn new() -> Self {
        MemoStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for MemoStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tried={} resolved={} deferred={} skipped={}",
            self.get(Counters::StepsTried),
            self.get(Counters::Resolved),
            self.get(Counters::Deferred),
            self.get(Counters::Skipped)
        )
    }
}
