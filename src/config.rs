// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration for the memoizer and optimizer.
//!
//! Both structs deserialize with defaults for every missing key, so a TOML
//! file only needs to name the settings it changes:
//!
//! ```
//! use dynamic_optimize::config::OptimizerConfig;
//!
//! let config = OptimizerConfig::from_toml(r#"
//!     control_field = "min"
//!     response_field = "max"
//!     allow_repeats = false
//! "#).unwrap();
//! assert!(!config.allow_repeats);
//! assert!(!config.diagnostics);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{OptimizeError, Result};

/// Worklist length at which the runaway guard aborts a diagnostic run.
pub const DEFAULT_QUEUE_LIMIT: usize = 50_000;

/// Which reduction `optimize` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain recursion without caching. Exponential in the worst case.
    Recursive,
    /// Worklist-driven memoized evaluation.
    #[default]
    Memoized,
}

/// Runaway guard settings for a [`Memoizer`](crate::engine::Memoizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoizerConfig {
    /// Enables the runaway guard and its verbose output.
    pub diagnostics: bool,
    /// Worklist length that trips the guard. Deferred tasks are retried from
    /// the back of the worklist, so deep acyclic inputs can pass the default
    /// and need a larger limit.
    pub queue_limit: usize,
}

impl Default for MemoizerConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            queue_limit: DEFAULT_QUEUE_LIMIT,
        }
    }
}

impl MemoizerConfig {
    /// Guard limit in effect, if any.
    pub fn guard(&self) -> Option<usize> {
        self.diagnostics.then_some(self.queue_limit)
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Record field holding the control (cost) quantity.
    pub control_field: String,
    /// Record field holding the response (value) quantity.
    pub response_field: String,
    /// Unbounded reuse when true, 0/1 selection when false.
    pub allow_repeats: bool,
    pub diagnostics: bool,
    pub queue_limit: usize,
    pub strategy: Strategy,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            control_field: "control".to_string(),
            response_field: "response".to_string(),
            allow_repeats: true,
            diagnostics: false,
            queue_limit: DEFAULT_QUEUE_LIMIT,
            strategy: Strategy::default(),
        }
    }
}

impl OptimizerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: OptimizerConfig =
            toml::from_str(source).map_err(|e| OptimizeError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.control_field.is_empty() || self.response_field.is_empty() {
            return Err(OptimizeError::InvalidConfig {
                reason: "field names must not be empty".to_string(),
            });
        }
        if self.queue_limit == 0 {
            return Err(OptimizeError::InvalidConfig {
                reason: "queue_limit must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn memoizer(&self) -> MemoizerConfig {
        MemoizerConfig {
            diagnostics: self.diagnostics,
            queue_limit: self.queue_limit,
        }
    }
}
