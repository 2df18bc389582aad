//! Confirmation-boundary validation.
//!
//! The distribution itself accepts whatever hours it is given; the check
//! that hours are sane happens once, when the caller is about to persist a
//! confirmed allocation.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::distribute::StaffHours;

/// Validates staff hours before a confirmed save.
///
/// Every employee's hours must be non-negative. The first offending entry
/// fails the whole batch with [`EngineError::InvalidHours`].
///
/// # Examples
///
/// ```
/// use tip_engine::allocation::{StaffHours, validate_staff_hours};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let staff = vec![StaffHours {
///     employee_id: Uuid::new_v4(),
///     employee_name: "A".to_string(),
///     hours: Decimal::from(12),
/// }];
/// assert!(validate_staff_hours(&staff).is_ok());
/// ```
pub fn validate_staff_hours(staff: &[StaffHours]) -> EngineResult<()> {
    for entry in staff {
        if entry.hours < Decimal::ZERO {
            return Err(EngineError::InvalidHours {
                employee: entry.employee_name.clone(),
                message: format!("hours must be non-negative, got {}", entry.hours.normalize()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn entry(name: &str, hours: &str) -> StaffHours {
        StaffHours {
            employee_id: Uuid::new_v4(),
            employee_name: name.to_string(),
            hours: Decimal::from_str(hours).unwrap(),
        }
    }

    #[test]
    fn test_non_negative_hours_pass() {
        let staff = vec![entry("A", "0"), entry("B", "37.5"), entry("C", "149")];
        assert!(validate_staff_hours(&staff).is_ok());
    }

    #[test]
    fn test_negative_hours_fail_with_employee_name() {
        let staff = vec![entry("A", "8"), entry("B", "-1")];
        match validate_staff_hours(&staff).unwrap_err() {
            EngineError::InvalidHours { employee, message } => {
                assert_eq!(employee, "B");
                assert!(message.contains("-1"));
            }
            other => panic!("Expected InvalidHours, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_staff_passes() {
        assert!(validate_staff_hours(&[]).is_ok());
    }
}
