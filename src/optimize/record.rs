// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Optimization over JSON records addressed by field name.
//!
//! Records are `serde_json::Value` objects. The control and response fields
//! are named in [`OptimizerConfig`] and must hold integers.

use serde_json::Value;

use crate::config::OptimizerConfig;
use crate::errors::{OptimizeError, Result};

use super::Optimizer;

/// Selector reading an integer field by name. Absent fields read as 0.
fn field(name: &str) -> impl Fn(&Value) -> i64 + Send + Sync + 'static {
    let name = name.to_string();
    move |record: &Value| record.get(&name).and_then(Value::as_i64).unwrap_or(0)
}

impl Optimizer<Value> {
    /// Build a record optimizer from validated configuration.
    pub fn for_records(config: &OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(
            Optimizer::builder(field(&config.control_field), field(&config.response_field))
                .allow_repeats(config.allow_repeats)
                .memoizer_config(config.memoizer())
                .build(),
        )
    }
}

/// Check that every record carries both configured integer fields.
fn check_fields(config: &OptimizerConfig, records: &[Value]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        for name in [&config.control_field, &config.response_field] {
            if record.get(name).and_then(Value::as_i64).is_none() {
                return Err(OptimizeError::MissingField {
                    index,
                    field: name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Select the records with maximal total response whose total control fits
/// within `target`.
///
/// ```
/// use dynamic_optimize::config::OptimizerConfig;
/// use dynamic_optimize::optimize_records;
/// use serde_json::json;
///
/// let config = OptimizerConfig {
///     control_field: "min".into(),
///     response_field: "max".into(),
///     ..OptimizerConfig::default()
/// };
/// let records = vec![json!({"min": 5, "max": 1}), json!({"min": 40, "max": 9})];
/// let chosen = optimize_records(&config, records, 45).unwrap();
/// assert_eq!(chosen.len(), 2);
/// ```
pub fn optimize_records(
    config: &OptimizerConfig,
    records: Vec<Value>,
    target: i64,
) -> Result<Vec<Value>> {
    check_fields(config, &records)?;
    let mut optimizer = Optimizer::for_records(config)?;
    optimizer.optimize(records, target, config.strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![
            json!({"min": 5, "max": 1, "name": "a"}),
            json!({"min": 15, "max": 1, "name": "b"}),
            json!({"min": 50, "max": 10, "name": "c"}),
            json!({"min": 40, "max": 9, "name": "d"}),
            json!({"min": 200, "max": 50, "name": "e"}),
        ]
    }

    fn config(allow_repeats: bool, strategy: Strategy) -> OptimizerConfig {
        OptimizerConfig {
            control_field: "min".into(),
            response_field: "max".into(),
            allow_repeats,
            strategy,
            ..OptimizerConfig::default()
        }
    }

    fn total(records: &[Value], name: &str) -> i64 {
        records.iter().filter_map(|r| r[name].as_i64()).sum()
    }

    #[test]
    fn test_records_by_field_name() {
        for strategy in [Strategy::Recursive, Strategy::Memoized] {
            let chosen = optimize_records(&config(true, strategy), sample(), 170).unwrap();
            assert!(total(&chosen, "min") <= 170);
            assert_eq!(total(&chosen, "max"), 38);

            let chosen = optimize_records(&config(false, strategy), sample(), 170).unwrap();
            assert_eq!(total(&chosen, "max"), 21);
        }
    }

    #[test]
    fn test_records_keep_extra_fields() {
        let chosen = optimize_records(&config(false, Strategy::Memoized), sample(), 200).unwrap();
        assert_eq!(chosen, vec![json!({"min": 200, "max": 50, "name": "e"})]);
    }

    #[test]
    fn test_missing_field() {
        let mut records = sample();
        records.push(json!({"min": 3}));
        let err = optimize_records(&config(true, Strategy::Memoized), records, 10).unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::MissingField { index: 5, ref field } if field == "max"
        ));
    }

    #[test]
    fn test_non_integer_field() {
        let records = vec![json!({"min": "five", "max": 1})];
        let err = optimize_records(&config(true, Strategy::Memoized), records, 10).unwrap_err();
        assert!(matches!(err, OptimizeError::MissingField { index: 0, .. }));
    }
}
