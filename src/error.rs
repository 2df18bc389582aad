//! Error types for the Tip Pool Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around an allocation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Tip Pool Allocation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The pure
/// allocation core itself never fails; these errors arise at the input,
/// configuration, and storage boundaries.
///
/// # Example
///
/// ```
/// use tip_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Settings file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A free-text numeric field could not be parsed under the active policy.
    #[error("Invalid numeric input for field '{field}': '{value}'")]
    InvalidNumericInput {
        /// The name of the field that failed to parse.
        field: String,
        /// The raw input that was rejected.
        value: String,
    },

    /// An employee's hours failed validation at the confirmation boundary.
    #[error("Invalid hours for employee '{employee}': {message}")]
    InvalidHours {
        /// The name of the employee with invalid hours.
        employee: String,
        /// A description of what made the hours invalid.
        message: String,
    },

    /// An employee id was not present in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was not found.
        id: Uuid,
    },

    /// A storage backend failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Settings file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse settings file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_numeric_input_displays_field_and_value() {
        let error = EngineError::InvalidNumericInput {
            field: "fives".to_string(),
            value: "ten-ish".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid numeric input for field 'fives': 'ten-ish'"
        );
    }

    #[test]
    fn test_invalid_hours_displays_employee_and_message() {
        let error = EngineError::InvalidHours {
            employee: "Rami".to_string(),
            message: "hours must be non-negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid hours for employee 'Rami': hours must be non-negative"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let id = Uuid::nil();
        let error = EngineError::EmployeeNotFound { id };
        assert_eq!(
            error.to_string(),
            format!("Employee not found: {}", id)
        );
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = EngineError::Storage {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: lock poisoned");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
