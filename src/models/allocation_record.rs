//! Persisted allocation record models.
//!
//! This module contains the [`AllocationRecord`] snapshot that the history
//! store persists once a distribution is confirmed, and the [`HistoryEntry`]
//! wrapper the store hands back with its assigned identifier.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One employee's row in a persisted allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayout {
    /// Hours the employee worked in the pay period.
    pub hours: Decimal,
    /// The tip the employee was allocated, a multiple of 5.
    pub deserved_tip: Decimal,
}

/// An immutable snapshot of a confirmed tip distribution.
///
/// Created once per confirmed save from the engine's output; never mutated
/// afterwards. `employee_data` is keyed by employee name, mirroring how the
/// payout sheet is read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Total dollar value of the counted bills.
    pub total_tips: Decimal,
    /// The estimated sales-tax set-aside, a multiple of 5.
    pub sales_tax: Decimal,
    /// The distributable pool: `total_tips - sales_tax`.
    pub net_tips: Decimal,
    /// The unallocated portion of the pool after flooring each payout.
    pub remainder: Decimal,
    /// Per-employee hours and payouts, keyed by employee name.
    pub employee_data: BTreeMap<String, EmployeePayout>,
    /// When the distribution was confirmed.
    pub timestamp: DateTime<Utc>,
}

/// A persisted allocation record together with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The identifier assigned by the history store.
    pub id: Uuid,
    /// The persisted record.
    pub record: AllocationRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_record() -> AllocationRecord {
        let mut employee_data = BTreeMap::new();
        employee_data.insert(
            "Rami".to_string(),
            EmployeePayout {
                hours: dec("40"),
                deserved_tip: dec("100"),
            },
        );
        employee_data.insert(
            "Khader".to_string(),
            EmployeePayout {
                hours: dec("0"),
                deserved_tip: dec("0"),
            },
        );

        AllocationRecord {
            total_tips: dec("125"),
            sales_tax: dec("25"),
            net_tips: dec("100"),
            remainder: dec("0"),
            employee_data,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AllocationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_employee_data_keyed_by_name() {
        let record = create_test_record();
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(json["employee_data"]["Rami"].is_object());
        assert_eq!(
            json["employee_data"]["Rami"]["deserved_tip"].as_str().unwrap(),
            "100"
        );
    }

    #[test]
    fn test_history_entry_round_trip() {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            record: create_test_record(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
