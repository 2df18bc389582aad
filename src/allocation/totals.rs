//! Totals snapshot derivation.
//!
//! This module turns counted cash and the register-reported tips figure
//! into the total/tax/net breakdown that feeds the distribution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CashCount;

use super::rounding::{PAYOUT_STEP, round_to_step};

/// The fraction of registered tips set aside as the sales-tax estimate.
pub const TAX_SET_ASIDE_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// The derived total/tax/net breakdown for a counted pool.
///
/// `sales_tax` is always a multiple of 5. `net_tips` may be negative when
/// the set-aside exceeds the counted total; it flows through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalsSnapshot {
    /// Total dollar value of the counted bills.
    pub total_tips: Decimal,
    /// The estimated sales-tax set-aside, rounded to the nearest $5.
    pub sales_tax: Decimal,
    /// The distributable pool: `total_tips - sales_tax`.
    pub net_tips: Decimal,
}

/// Derives the totals snapshot from counted cash.
///
/// The set-aside is a quarter of the registered tips, rounded to the
/// nearest multiple of 5 with half-up semantics.
///
/// # Examples
///
/// ```
/// use tip_engine::allocation::compute_totals;
/// use tip_engine::models::CashCount;
/// use rust_decimal::Decimal;
///
/// let cash = CashCount {
///     fives: Decimal::from(10),
///     registered_tips: Decimal::from(100),
///     ..CashCount::default()
/// };
///
/// let totals = compute_totals(&cash);
/// assert_eq!(totals.total_tips, Decimal::from(50));
/// assert_eq!(totals.sales_tax, Decimal::from(25));
/// assert_eq!(totals.net_tips, Decimal::from(25));
/// ```
pub fn compute_totals(cash: &CashCount) -> TotalsSnapshot {
    let total_tips = cash.counted_total();
    let sales_tax = round_to_step(cash.registered_tips * TAX_SET_ASIDE_RATE, PAYOUT_STEP);
    let net_tips = total_tips - sales_tax;

    TotalsSnapshot {
        total_tips,
        sales_tax,
        net_tips,
    }
}
