//! Proportional tip distribution.
//!
//! This module implements the payout policy: each employee's hours are
//! normalized against a 40-hour full-time week, the pool is converted into a
//! per-full-time-equivalent ratio floored to the $5 grid, and each payout is
//! independently floored to its own multiple of 5. If the floored payouts
//! overshoot the pool, one second pass runs with a 5%-discounted ratio; the
//! second pass is never re-checked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AuditStep, AuditTrace, AuditWarning};

use super::rounding::{PAYOUT_STEP, floor_to_step};

/// The full-time normalization constant: hours are weighted as `hours / 40`.
pub const FULL_TIME_WEEK_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The discount applied to the pool when the first pass overshoots it.
pub const OVERSHOOT_DISCOUNT: Decimal = Decimal::from_parts(95, 0, 0, false, 2);

/// An employee's hours input to a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffHours {
    /// The employee's roster id.
    pub employee_id: Uuid,
    /// The employee's display name.
    pub employee_name: String,
    /// Hours worked in the pay period.
    pub hours: Decimal,
}

/// An employee's computed payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTip {
    /// The employee's roster id.
    pub employee_id: Uuid,
    /// The employee's display name.
    pub employee_name: String,
    /// The allocated tip, a multiple of 5.
    pub deserved_tip: Decimal,
}

/// The result of a distribution.
///
/// `tips` preserves the input employee ordering. `remainder` is the portion
/// of the pool left unallocated; it is non-negative whenever the pool is,
/// but a still-negative value after the correction pass is returned as-is
/// and flagged in `trace.warnings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Per-employee payouts, in input order.
    pub tips: Vec<EmployeeTip>,
    /// The unallocated portion of the pool.
    pub remainder: Decimal,
    /// The per-full-time-equivalent ratio the payouts were derived from.
    pub ratio: Decimal,
    /// Whether the discounted second pass produced this outcome.
    pub adjusted: bool,
    /// The audit trace for the distribution.
    pub trace: AuditTrace,
}

/// Result of the discounted second pass.
struct CorrectionOutcome {
    tips: Vec<EmployeeTip>,
    remainder: Decimal,
    ratio: Decimal,
    step: AuditStep,
    warning: Option<AuditWarning>,
}

/// Distributes a net tip pool across employees proportionally to hours.
///
/// The policy, in order:
/// 1. `share = hours / 40` per employee; `total_share` is their sum. An
///    empty roster or zero total hours is terminal: every payout is zero
///    and the whole pool is the remainder.
/// 2. `ratio = floor(net_tips / total_share / 5) * 5`.
/// 3. `deserved_tip = floor(ratio * hours / 40 / 5) * 5`, floored per
///    employee.
/// 4. `remainder = net_tips - sum(deserved_tip)`. If negative, one retry
///    runs with `floor(net_tips * 0.95 / total_share / 5) * 5` as the
///    ratio; its remainder is returned without a further check.
///
/// The function is pure: identical inputs produce identical outcomes.
///
/// # Examples
///
/// ```
/// use tip_engine::allocation::{StaffHours, distribute_tips};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let staff = vec![
///     StaffHours {
///         employee_id: Uuid::new_v4(),
///         employee_name: "A".to_string(),
///         hours: Decimal::from(40),
///     },
///     StaffHours {
///         employee_id: Uuid::new_v4(),
///         employee_name: "B".to_string(),
///         hours: Decimal::from(0),
///     },
/// ];
///
/// let outcome = distribute_tips(Decimal::from(100), &staff);
/// assert_eq!(outcome.tips[0].deserved_tip, Decimal::from(100));
/// assert_eq!(outcome.tips[1].deserved_tip, Decimal::ZERO);
/// assert_eq!(outcome.remainder, Decimal::ZERO);
/// ```
pub fn distribute_tips(net_tips: Decimal, staff: &[StaffHours]) -> AllocationOutcome {
    let mut steps = Vec::new();

    let total_share: Decimal = staff
        .iter()
        .map(|entry| entry.hours / FULL_TIME_WEEK_HOURS)
        .sum();

    steps.push(AuditStep {
        step_number: 1,
        rule_id: "share_normalization".to_string(),
        rule_name: "Share Normalization".to_string(),
        input: serde_json::json!({
            "employees": staff.len(),
            "full_time_week_hours": FULL_TIME_WEEK_HOURS.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_share": total_share.normalize().to_string()
        }),
        reasoning: format!(
            "Summed hours/40 across {} employees: {}",
            staff.len(),
            total_share.normalize()
        ),
    });

    if total_share <= Decimal::ZERO {
        let tips = zero_payouts(staff);
        steps.push(AuditStep {
            step_number: 2,
            rule_id: "zero_share_terminal".to_string(),
            rule_name: "Zero Share Terminal".to_string(),
            input: serde_json::json!({
                "net_tips": net_tips.normalize().to_string(),
                "total_share": total_share.normalize().to_string()
            }),
            output: serde_json::json!({
                "remainder": net_tips.normalize().to_string()
            }),
            reasoning: "No hours logged; every payout is 0 and the pool stays unallocated"
                .to_string(),
        });

        return AllocationOutcome {
            tips,
            remainder: net_tips,
            ratio: Decimal::ZERO,
            adjusted: false,
            trace: AuditTrace {
                steps,
                warnings: vec![],
            },
        };
    }

    let ratio = floor_to_step(net_tips / total_share, PAYOUT_STEP);
    steps.push(AuditStep {
        step_number: 2,
        rule_id: "pool_ratio".to_string(),
        rule_name: "Pool Ratio".to_string(),
        input: serde_json::json!({
            "net_tips": net_tips.normalize().to_string(),
            "total_share": total_share.normalize().to_string()
        }),
        output: serde_json::json!({
            "ratio": ratio.normalize().to_string()
        }),
        reasoning: format!(
            "floor({} / {} / 5) x 5 = {}",
            net_tips.normalize(),
            total_share.normalize(),
            ratio.normalize()
        ),
    });

    let tips = payout_pass(ratio, staff);
    let allocated = allocated_total(&tips);
    let remainder = net_tips - allocated;
    steps.push(AuditStep {
        step_number: 3,
        rule_id: "payout_pass".to_string(),
        rule_name: "Payout Pass".to_string(),
        input: serde_json::json!({
            "ratio": ratio.normalize().to_string()
        }),
        output: serde_json::json!({
            "allocated": allocated.normalize().to_string(),
            "remainder": remainder.normalize().to_string()
        }),
        reasoning: format!(
            "Allocated {} of {}; remainder {}",
            allocated.normalize(),
            net_tips.normalize(),
            remainder.normalize()
        ),
    });

    if remainder >= Decimal::ZERO {
        return AllocationOutcome {
            tips,
            remainder,
            ratio,
            adjusted: false,
            trace: AuditTrace {
                steps,
                warnings: vec![],
            },
        };
    }

    // Overshoot: the independently floored payouts exceeded the pool.
    // Exactly one retry with a discounted ratio, not re-checked after.
    let correction = apply_correction(net_tips, total_share, staff, 4);
    steps.push(correction.step);

    AllocationOutcome {
        tips: correction.tips,
        remainder: correction.remainder,
        ratio: correction.ratio,
        adjusted: true,
        trace: AuditTrace {
            steps,
            warnings: correction.warning.into_iter().collect(),
        },
    }
}

/// Computes each employee's payout at the given ratio.
///
/// Each payout is floored to its own multiple of 5, so the sum can drift
/// from `ratio * total_share` by rounding slack.
fn payout_pass(ratio: Decimal, staff: &[StaffHours]) -> Vec<EmployeeTip> {
    staff
        .iter()
        .map(|entry| EmployeeTip {
            employee_id: entry.employee_id,
            employee_name: entry.employee_name.clone(),
            deserved_tip: floor_to_step(
                ratio * entry.hours / FULL_TIME_WEEK_HOURS,
                PAYOUT_STEP,
            ),
        })
        .collect()
}

fn zero_payouts(staff: &[StaffHours]) -> Vec<EmployeeTip> {
    staff
        .iter()
        .map(|entry| EmployeeTip {
            employee_id: entry.employee_id,
            employee_name: entry.employee_name.clone(),
            deserved_tip: Decimal::ZERO,
        })
        .collect()
}

fn allocated_total(tips: &[EmployeeTip]) -> Decimal {
    tips.iter().map(|tip| tip.deserved_tip).sum()
}

/// The discounted ratio used by the second pass.
fn discounted_ratio(net_tips: Decimal, total_share: Decimal) -> Decimal {
    floor_to_step(net_tips * OVERSHOOT_DISCOUNT / total_share, PAYOUT_STEP)
}

/// Runs the single discounted second pass.
///
/// The resulting remainder is reported as computed; if it is still negative
/// a `negative_remainder_unresolved` warning is attached instead of
/// clamping or looping.
fn apply_correction(
    net_tips: Decimal,
    total_share: Decimal,
    staff: &[StaffHours],
    step_number: u32,
) -> CorrectionOutcome {
    let ratio = discounted_ratio(net_tips, total_share);
    let tips = payout_pass(ratio, staff);
    let allocated = allocated_total(&tips);
    let remainder = net_tips - allocated;

    let step = AuditStep {
        step_number,
        rule_id: "overshoot_correction".to_string(),
        rule_name: "Overshoot Correction".to_string(),
        input: serde_json::json!({
            "net_tips": net_tips.normalize().to_string(),
            "total_share": total_share.normalize().to_string(),
            "discount": OVERSHOOT_DISCOUNT.normalize().to_string()
        }),
        output: serde_json::json!({
            "adjusted_ratio": ratio.normalize().to_string(),
            "allocated": allocated.normalize().to_string(),
            "remainder": remainder.normalize().to_string()
        }),
        reasoning: format!(
            "floor({} x 0.95 / {} / 5) x 5 = {}; allocated {}, remainder {}",
            net_tips.normalize(),
            total_share.normalize(),
            ratio.normalize(),
            allocated.normalize(),
            remainder.normalize()
        ),
    };

    let warning = (remainder < Decimal::ZERO).then(|| AuditWarning {
        code: "negative_remainder_unresolved".to_string(),
        message: format!(
            "payout table still exceeds the pool by {} after the discounted pass",
            (-remainder).normalize()
        ),
        severity: "high".to_string(),
    });

    CorrectionOutcome {
        tips,
        remainder,
        ratio,
        step,
        warning,
    }
}
