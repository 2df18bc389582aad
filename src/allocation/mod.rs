//! Allocation logic for the Tip Pool Allocation Engine.
//!
//! This module contains the computational core: parsing free-text numeric
//! input under a configurable policy, deriving the total/tax/net totals
//! snapshot, the proportional two-pass tip distribution with $5 flooring,
//! rounding helpers for the $5 grid, and the confirmation-boundary hours
//! validation.

mod distribute;
mod numeric;
mod rounding;
mod totals;
mod validate;

pub use distribute::{
    AllocationOutcome, EmployeeTip, FULL_TIME_WEEK_HOURS, OVERSHOOT_DISCOUNT, StaffHours,
    distribute_tips,
};
pub use numeric::{NumericPolicy, parse_amount};
pub use rounding::{PAYOUT_STEP, floor_to_step, round_to_step};
pub use totals::{TAX_SET_ASIDE_RATE, TotalsSnapshot, compute_totals};
pub use validate::validate_staff_hours;
