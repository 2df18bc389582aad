//! Employee model for the tip pool roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the tip pool roster.
///
/// The roster is the ordered list of people a pool can be split across.
/// Ordering is explicit via the `order` field so that payout tables render
/// in the same sequence the crew was arranged in, independent of insertion
/// or name order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's display name.
    pub name: String,
    /// Position in the roster ordering (ascending).
    pub order: u32,
    /// When the employee was added to the roster.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(name: &str, order: u32) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.to_string(),
            order,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = create_test_employee("Rami", 3);
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "2f4df6a5-9f5a-4f1a-8de6-0e5a3a3f7a11",
            "name": "Khader",
            "order": 0,
            "created_at": "2026-08-01T09:30:00Z"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Khader");
        assert_eq!(employee.order, 0);
    }
}
