//! Counted cash model.
//!
//! This module defines the [`CashCount`] struct holding the parsed
//! denomination counts and the register-reported tips figure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const FACE_FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const FACE_TEN: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
const FACE_TWENTY: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
const FACE_FIFTY: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const FACE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Counted cash denominations plus the register-reported tips figure.
///
/// Counts are plain numbers: the surrounding form accepts free text, so a
/// count may be fractional and is not range-checked here. `registered_tips`
/// is only used to estimate the sales-tax set-aside; it is not itself part
/// of the payout pool.
///
/// # Example
///
/// ```
/// use tip_engine::models::CashCount;
/// use rust_decimal::Decimal;
///
/// let cash = CashCount {
///     fives: Decimal::from(10),
///     ..CashCount::default()
/// };
/// assert_eq!(cash.counted_total(), Decimal::from(50));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashCount {
    /// Number of $5 bills counted.
    pub fives: Decimal,
    /// Number of $10 bills counted.
    pub tens: Decimal,
    /// Number of $20 bills counted.
    pub twenties: Decimal,
    /// Number of $50 bills counted.
    pub fifties: Decimal,
    /// Number of $100 bills counted.
    pub hundreds: Decimal,
    /// Tips as reported by the register.
    pub registered_tips: Decimal,
}

impl CashCount {
    /// Returns the total dollar value of the counted bills.
    ///
    /// `registered_tips` is excluded: it feeds the tax estimate, not the pool.
    pub fn counted_total(&self) -> Decimal {
        self.fives * FACE_FIVE
            + self.tens * FACE_TEN
            + self.twenties * FACE_TWENTY
            + self.fifties * FACE_FIFTY
            + self.hundreds * FACE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_counted_total_sums_face_values() {
        let cash = CashCount {
            fives: dec("2"),
            tens: dec("1"),
            twenties: dec("3"),
            fifties: dec("1"),
            hundreds: dec("1"),
            registered_tips: dec("999"),
        };

        // 10 + 10 + 60 + 50 + 100
        assert_eq!(cash.counted_total(), dec("230"));
    }

    #[test]
    fn test_counted_total_of_default_is_zero() {
        assert_eq!(CashCount::default().counted_total(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_counts_flow_through() {
        let cash = CashCount {
            fives: dec("0.5"),
            ..CashCount::default()
        };
        assert_eq!(cash.counted_total(), dec("2.5"));
    }

    #[test]
    fn test_registered_tips_not_in_counted_total() {
        let cash = CashCount {
            registered_tips: dec("100"),
            ..CashCount::default()
        };
        assert_eq!(cash.counted_total(), Decimal::ZERO);
    }
}
