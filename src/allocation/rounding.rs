//! Rounding helpers for the $5 payout grid.
//!
//! Every payout and the tax set-aside land on a multiple of 5: payouts are
//! floored to the next-lower multiple, the set-aside is rounded to the
//! nearest multiple with half-up semantics.

use rust_decimal::{Decimal, RoundingStrategy};

/// The payout grid step in dollars.
///
/// All deserved tips and the sales-tax set-aside are multiples of this step.
pub const PAYOUT_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Rounds `value` down to the next-lower multiple of `step`.
///
/// # Examples
///
/// ```
/// use tip_engine::allocation::{PAYOUT_STEP, floor_to_step};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("47").unwrap();
/// assert_eq!(floor_to_step(value, PAYOUT_STEP), Decimal::from_str("45").unwrap());
/// ```
pub fn floor_to_step(value: Decimal, step: Decimal) -> Decimal {
    (value / step).floor() * step
}

/// Rounds `value` to the nearest multiple of `step`, halves rounding up.
///
/// Midpoints round away from zero, which matches half-up over the
/// non-negative inputs this engine feeds it.
///
/// # Examples
///
/// ```
/// use tip_engine::allocation::{PAYOUT_STEP, round_to_step};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("12.5").unwrap();
/// assert_eq!(round_to_step(value, PAYOUT_STEP), Decimal::from_str("15").unwrap());
/// ```
pub fn round_to_step(value: Decimal, step: Decimal) -> Decimal {
    (value / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * step
}
