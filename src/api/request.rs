//! Request types for the Tip Pool Allocation Engine API.
//!
//! Cash counts and hours arrive exactly as typed into the form: free-text
//! strings, parsed under the configured numeric policy when the request is
//! converted into domain types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::{NumericPolicy, parse_amount};
use crate::error::EngineResult;
use crate::models::CashCount;

/// Free-text denomination counts and the registered-tips field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashInput {
    /// Number of $5 bills, as typed.
    #[serde(default)]
    pub fives: String,
    /// Number of $10 bills, as typed.
    #[serde(default)]
    pub tens: String,
    /// Number of $20 bills, as typed.
    #[serde(default)]
    pub twenties: String,
    /// Number of $50 bills, as typed.
    #[serde(default)]
    pub fifties: String,
    /// Number of $100 bills, as typed.
    #[serde(default)]
    pub hundreds: String,
    /// Register-reported tips, as typed.
    #[serde(default)]
    pub registered_tips: String,
}

impl CashInput {
    /// Parses the free-text fields into a [`CashCount`] under the policy.
    pub fn parse(&self, policy: NumericPolicy) -> EngineResult<CashCount> {
        Ok(CashCount {
            fives: parse_amount("fives", &self.fives, policy)?,
            tens: parse_amount("tens", &self.tens, policy)?,
            twenties: parse_amount("twenties", &self.twenties, policy)?,
            fifties: parse_amount("fifties", &self.fifties, policy)?,
            hundreds: parse_amount("hundreds", &self.hundreds, policy)?,
            registered_tips: parse_amount("registered_tips", &self.registered_tips, policy)?,
        })
    }
}

/// Request body for previewing or confirming a distribution.
///
/// `hours` maps employee id to the hours field as typed; employees missing
/// from the map are treated as an empty field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// The counted cash fields.
    #[serde(default)]
    pub cash: CashInput,
    /// Per-employee hours fields, keyed by employee id.
    #[serde(default)]
    pub hours: HashMap<Uuid, String>,
}

/// Request body for adding an employee to the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    /// The new employee's display name.
    pub name: String,
}

/// Request body for reordering the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    /// Employee ids in their new order.
    pub order: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cash_input_parses_all_fields() {
        let input = CashInput {
            fives: "10".to_string(),
            tens: "2".to_string(),
            twenties: "".to_string(),
            fifties: "1".to_string(),
            hundreds: "0".to_string(),
            registered_tips: "100".to_string(),
        };

        let cash = input.parse(NumericPolicy::Reject).unwrap();
        assert_eq!(cash.fives, dec("10"));
        assert_eq!(cash.twenties, Decimal::ZERO);
        assert_eq!(cash.counted_total(), dec("120"));
        assert_eq!(cash.registered_tips, dec("100"));
    }

    #[test]
    fn test_cash_input_coerces_garbage_under_coerce() {
        let input = CashInput {
            fives: "a handful".to_string(),
            ..CashInput::default()
        };

        let cash = input.parse(NumericPolicy::Coerce).unwrap();
        assert_eq!(cash.fives, Decimal::ZERO);
    }

    #[test]
    fn test_cash_input_rejects_garbage_under_reject() {
        let input = CashInput {
            fives: "a handful".to_string(),
            ..CashInput::default()
        };

        assert!(input.parse(NumericPolicy::Reject).is_err());
    }

    #[test]
    fn test_allocation_request_defaults_are_empty() {
        let request: AllocationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.cash, CashInput::default());
        assert!(request.hours.is_empty());
    }

    #[test]
    fn test_allocation_request_deserializes_hours_by_id() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"cash": {{"fives": "1"}}, "hours": {{"{}": "12.5"}}}}"#, id);

        let request: AllocationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.hours.get(&id).unwrap(), "12.5");
        assert_eq!(request.cash.fives, "1");
    }
}
