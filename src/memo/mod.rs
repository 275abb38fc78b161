// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo storage: pair keys and the write-once result table.
//!
//! The [`Memoizer`](crate::engine::Memoizer) owns one [`MemoTable`] per run and
//! addresses it through [`PairKey`]s.

pub mod key;
pub mod table;

pub use key::PairKey;
pub use table::MemoTable;
