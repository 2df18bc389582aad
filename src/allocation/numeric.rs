//! Free-text numeric input parsing.
//!
//! Denomination counts, the registered-tips figure, and per-employee hours
//! all arrive as free text. How unparsable text is treated is a policy
//! choice: coerce to zero (the lenient form behavior) or reject and make
//! the caller resolve it first.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Policy for handling free-text numeric fields that fail to parse.
///
/// Empty input is zero under either policy; only unparsable non-empty text
/// distinguishes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericPolicy {
    /// Treat unparsable input as zero.
    #[default]
    Coerce,
    /// Fail with [`EngineError::InvalidNumericInput`] on unparsable input.
    Reject,
}

/// Parses a free-text numeric field under the given policy.
///
/// Whitespace is trimmed first. Empty input parses to zero. Parsed values
/// are not range-checked: a negative or fractional number flows through.
///
/// # Arguments
///
/// * `field` - The field name, used in the rejection error
/// * `raw` - The raw text to parse
/// * `policy` - How to treat unparsable input
///
/// # Examples
///
/// ```
/// use tip_engine::allocation::{NumericPolicy, parse_amount};
/// use rust_decimal::Decimal;
///
/// let parsed = parse_amount("fives", "10", NumericPolicy::Coerce).unwrap();
/// assert_eq!(parsed, Decimal::from(10));
///
/// let coerced = parse_amount("fives", "ten", NumericPolicy::Coerce).unwrap();
/// assert_eq!(coerced, Decimal::ZERO);
///
/// assert!(parse_amount("fives", "ten", NumericPolicy::Reject).is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str, policy: NumericPolicy) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    match Decimal::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(_) => match policy {
            NumericPolicy::Coerce => Ok(Decimal::ZERO),
            NumericPolicy::Reject => Err(EngineError::InvalidNumericInput {
                field: field.to_string(),
                value: raw.to_string(),
            }),
        },
    }
}
