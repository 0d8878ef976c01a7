//! Reusable field validators
//!
//! These mirror the column constraints of the `puppies` table so every store
//! rejects the same writes the relational table would.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::error::PuppyError;

/// Validator: text is present (non-empty) and at most `max` characters
pub fn required_text(
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len == 0 {
            Err(format!("'{}' is required", field))
        } else if len > max {
            Err(format!(
                "'{}' must not exceed {} characters (currently: {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: text, when present, is at most `max` characters
pub fn optional_text(
    max: usize,
) -> impl Fn(&str, Option<&str>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: Option<&str>| {
        let Some(value) = value else {
            return Ok(());
        };
        let len = value.chars().count();
        if len > max {
            Err(format!(
                "'{}' must not exceed {} characters (currently: {})",
                field, max, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: decimal, once rounded to `scale` places, stays strictly below `limit` in magnitude
pub fn decimal_range(
    limit: Decimal,
    scale: u32,
) -> impl Fn(&str, Option<&Decimal>) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: Option<&Decimal>| {
        let Some(value) = value else {
            return Ok(());
        };
        let rounded = round_to_scale(*value, scale);
        if rounded.abs() >= limit {
            Err(format!(
                "'{}' must be less than {} in magnitude (value: {})",
                field, limit, value
            ))
        } else {
            Ok(())
        }
    }
}

/// Round the way a `NUMERIC(p, s)` column does on insert.
pub fn round_to_scale(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// Collects field failures so one write reports every broken constraint.
#[derive(Debug, Default)]
pub struct FieldChecks {
    failures: Vec<String>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, outcome: Result<(), String>) -> &mut Self {
        if let Err(message) = outcome {
            self.failures.push(message);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), PuppyError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(PuppyError::ValidationFailure(self.failures.join(", ")))
        }
    }
}
