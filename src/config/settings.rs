//! Settings loading functionality.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::allocation::NumericPolicy;
use crate::error::{EngineError, EngineResult};

fn default_history_limit() -> usize {
    50
}

/// Tunable settings for the engine and its surrounding API.
///
/// Every field has a default, so a settings file only needs to name what it
/// overrides.
///
/// # Example
///
/// ```
/// use tip_engine::config::EngineSettings;
/// use tip_engine::allocation::NumericPolicy;
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.numeric_policy, NumericPolicy::Coerce);
/// assert_eq!(settings.history_limit, 50);
/// assert!(settings.seed_employees.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// How free-text numeric fields that fail to parse are treated.
    #[serde(default)]
    pub numeric_policy: NumericPolicy,
    /// Maximum number of history entries returned per listing.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Names to seed an empty roster with.
    #[serde(default)]
    pub seed_employees: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            numeric_policy: NumericPolicy::default(),
            history_limit: default_history_limit(),
            seed_employees: Vec::new(),
        }
    }
}

impl EngineSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./settings.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed settings, or an error if the file is missing
    /// (`ConfigNotFound`) or not valid YAML (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.numeric_policy, NumericPolicy::Coerce);
        assert_eq!(settings.history_limit, 50);
        assert!(settings.seed_employees.is_empty());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: EngineSettings = serde_yaml::from_str("numeric_policy: reject\n").unwrap();
        assert_eq!(settings.numeric_policy, NumericPolicy::Reject);
        assert_eq!(settings.history_limit, 50);
        assert!(settings.seed_employees.is_empty());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
numeric_policy: coerce
history_limit: 10
seed_employees:
  - Rami
  - Khader
"#;
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.history_limit, 10);
        assert_eq!(settings.seed_employees, vec!["Rami", "Khader"]);
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let result = EngineSettings::load("/definitely/not/here.yaml");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("not/here.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let settings = EngineSettings {
            numeric_policy: NumericPolicy::Reject,
            history_limit: 25,
            seed_employees: vec!["Sultan".to_string()],
        };
        let yaml = serde_yaml::to_string(&settings).unwrap();
        let parsed: EngineSettings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(settings, parsed);
    }
}
