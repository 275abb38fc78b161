// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pair keys for the memo table.
//!
//! A task is identified by an ordered pair of integers `(a, b)`. Non-negative
//! pairs are folded into a single scalar with Szudzik's elegant pairing
//! function, which is a bijection from `N x N` onto `N`:
//!
//! ```text
//! encode(a, b) = a * a + a + b    if a >= b
//!              = a + b * b        otherwise
//! ```
//!
//! Any pair with a negative component is collapsed onto the single
//! [`PairKey::OutOfRange`] key. This is only sound when every step function
//! produces the same base case for all negative inputs; the memo table does
//! not check that.
//!
//! See <http://szudzik.com/ElegantPairing.pdf>.

use std::fmt;

/// Memo table key for a `(a, b)` task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PairKey {
    /// Both components non-negative; holds the Szudzik code.
    InRange(u128),

    /// At least one component negative.
    OutOfRange,
}

impl PairKey {
    /// Encode an ordered pair.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_optimize::memo::PairKey;
    ///
    /// assert_eq!(PairKey::encode(1, 0), PairKey::InRange(2));
    /// assert_eq!(PairKey::encode(-1, 7), PairKey::OutOfRange);
    /// ```
    pub fn encode(a: i64, b: i64) -> Self {
        if a < 0 || b < 0 {
            return PairKey::OutOfRange;
        }
        // i64::MAX squared still fits comfortably in u128.
        let (a, b) = (a as u128, b as u128);
        let code = if a >= b { a * a + a + b } else { a + b * b };
        PairKey::InRange(code)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairKey::InRange(code) => write!(f, "#{}", code),
            PairKey::OutOfRange => write!(f, "#out-of-range"),
        }
    }
}
