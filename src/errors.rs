// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for memoized evaluation and optimization.

/// Failures of a [`Memoizer`](crate::engine::Memoizer) run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoError {
    /// The worklist grew past the runaway guard.
    ///
    /// Signals an unsatisfiable or cyclic dependency, or a key collision
    /// between distinct states. This is "did not converge", not an empty answer.
    #[error("computation aborted: worklist reached {pending} tasks (limit {limit})")]
    Diverged { pending: usize, limit: usize },

    /// The worklist drained but the initial task never stored a value.
    #[error("worklist drained without resolving initial task ({a}, {b})")]
    Unresolved { a: i64, b: i64 },
}

/// Failures of an optimization request.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Memo(#[from] MemoError),

    /// A record lacks an integer value for a configured field.
    #[error("record {index} has no integer field `{field}`")]
    MissingField { index: usize, field: String },

    /// Controls must be non-negative, and positive when items may repeat, so
    /// no task depends on itself.
    #[error("item {index} has unusable control {control}")]
    InvalidControl { index: usize, control: i64 },

    #[error("invalid optimizer configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, OptimizeError>;
