//! Response types for the Tip Pool Allocation Engine API.
//!
//! This module defines the success bodies, the error response structures,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation::{EmployeeTip, TotalsSnapshot};
use crate::error::EngineError;
use crate::models::AuditTrace;

/// Response body for a previewed (or just-confirmed) distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationPreview {
    /// The derived total/tax/net breakdown.
    pub totals: TotalsSnapshot,
    /// Per-employee payouts, in roster order.
    pub tips: Vec<EmployeeTip>,
    /// The unallocated portion of the pool.
    pub remainder: Decimal,
    /// Whether the discounted second pass produced this result.
    pub adjusted: bool,
    /// The audit trace for the distribution.
    pub trace: AuditTrace,
}

/// Response body for a confirmed save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAllocation {
    /// The identifier the history store assigned to the record.
    pub id: Uuid,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a not-found error response for a history record.
    pub fn record_not_found(id: Uuid) -> Self {
        Self::new("RECORD_NOT_FOUND", format!("History record not found: {}", id))
    }

    /// Creates a not-found error response for a roster employee.
    pub fn employee_not_found(id: Uuid) -> Self {
        Self::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id))
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Settings error",
                    format!("Settings file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Settings parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidNumericInput { field, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_NUMERIC_INPUT",
                    format!("Invalid numeric input for field '{}'", field),
                    format!("The value '{}' could not be parsed as a number", value),
                ),
            },
            EngineError::InvalidHours { employee, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_HOURS",
                    format!("Invalid hours for employee '{}'", employee),
                    message,
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(id),
            },
            EngineError::Storage { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_numeric_input_maps_to_bad_request() {
        let engine_error = EngineError::InvalidNumericInput {
            field: "fives".to_string(),
            value: "ten".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_NUMERIC_INPUT");
    }

    #[test]
    fn test_employee_not_found_maps_to_not_found() {
        let id = Uuid::new_v4();
        let api_error: ApiErrorResponse = EngineError::EmployeeNotFound { id }.into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert!(api_error.error.message.contains(&id.to_string()));
    }

    #[test]
    fn test_storage_error_maps_to_internal() {
        let api_error: ApiErrorResponse = EngineError::Storage {
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORAGE_ERROR");
    }
}
