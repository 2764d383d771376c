//! Error types for acctweb-config

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigErrorCode {
    /// File not found
    FileNotFound,
    /// Invalid YAML format
    InvalidYaml,
    /// Invalid field value
    InvalidValue,
    /// IO error
    IoError,
}

impl std::fmt::Display for ConfigErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            ConfigErrorCode::InvalidYaml => write!(f, "INVALID_YAML"),
            ConfigErrorCode::InvalidValue => write!(f, "INVALID_VALUE"),
            ConfigErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("IO error occurred: {message}")]
    IoError { message: String },
}

impl ConfigError {
    /// Get the error code
    pub fn code(&self) -> ConfigErrorCode {
        match self {
            ConfigError::FileNotFound { .. } => ConfigErrorCode::FileNotFound,
            ConfigError::InvalidYaml { .. } => ConfigErrorCode::InvalidYaml,
            ConfigError::InvalidValue { .. } => ConfigErrorCode::InvalidValue,
            ConfigError::IoError { .. } => ConfigErrorCode::IoError,
        }
    }

    /// Suggestions for resolving the error, shown at startup
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            ConfigError::FileNotFound { .. } => vec![
                "Check if the config file path is correct.".to_string(),
                "Use --print-config to generate a starting config file.".to_string(),
            ],
            ConfigError::InvalidValue { field, reason } => vec![
                reason.clone(),
                format!("Fix the '{}' field in your config file.", field),
            ],
            _ => vec![],
        }
    }
}

/// Result type with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
