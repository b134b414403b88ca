//! Sampler configuration with validation and JSON file persistence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::{DEFAULT_DISTANCE_THRESHOLD_M, DEFAULT_LOG_FILE_NAME};

/// Tunable parameters of the sampling policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Minimum separation between consecutive saved samples (meters)
    pub distance_threshold_m: f64,
    /// Logical file name of the persisted sample log
    pub log_file_name: String,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            distance_threshold_m: DEFAULT_DISTANCE_THRESHOLD_M,
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
        }
    }
}

/// Configuration validation and persistence errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid parameter value
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    IoError { message: String },
    /// JSON serialization/deserialization error
    SerializationError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SamplerConfig {
    /// Set the distance threshold (meters)
    pub fn with_distance_threshold(mut self, meters: f64) -> Self {
        self.distance_threshold_m = meters;
        self
    }

    /// Set the log file name
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance_threshold_m.is_finite() || self.distance_threshold_m <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "distance_threshold_m".to_string(),
                value: self.distance_threshold_m.to_string(),
                reason: "Distance threshold must be a positive number of meters".to_string(),
            });
        }
        if self.log_file_name.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "log_file_name".to_string(),
                value: self.log_file_name.clone(),
                reason: "Log file name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: SamplerConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SamplerConfig::default();
        assert_eq!(config.distance_threshold_m, 30.0);
        assert_eq!(config.log_file_name, "locations.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_threshold_is_invalid() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SamplerConfig::default().with_distance_threshold(bad);
            let err = config.validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidParameter { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_empty_log_file_name_is_invalid() {
        let config = SamplerConfig::default().with_log_file_name("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sampler.json");

        let config = SamplerConfig::default()
            .with_distance_threshold(75.0)
            .with_log_file_name("trail.json");
        config.save_to_file(&path).unwrap();

        let loaded = SamplerConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sampler.json");
        std::fs::write(&path, "not json").unwrap();

        let err = SamplerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SerializationError { .. }));
    }

    #[test]
    fn test_from_file_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = SamplerConfig::from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_from_file_rejects_out_of_range_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sampler.json");
        std::fs::write(
            &path,
            r#"{"distance_threshold_m": -30.0, "log_file_name": "locations.json"}"#,
        )
        .unwrap();

        let err = SamplerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { .. }));
    }
}
