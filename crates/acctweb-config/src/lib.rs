//! Configuration management for acctweb
//!
//! This module handles loading, validation, and management of
//! acctweb configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Backend REST service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the accounts/transactions service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// User whose accounts are shown
    #[serde(default = "default_user_id")]
    pub user_id: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

fn default_user_id() -> i64 {
    1
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency label appended to amounts (empty for none)
    #[serde(default)]
    pub currency: String,
    /// chrono format used for numeric transaction dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: String::new(),
            date_format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Backend service settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let mut config: Config = serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
            message: e.to_string(),
        })?;

        config.normalize();
        config.validate()?;

        Ok(config)
    }

    fn normalize(&mut self) {
        let trimmed = self.backend.base_url.trim().trim_end_matches('/');
        self.backend.base_url = trimmed.to_string();
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if !self.backend.base_url.starts_with("http://") {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".to_string(),
                reason: "Base URL must start with http://".to_string(),
            });
        }

        if self.session.user_id <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.user_id".to_string(),
                reason: "User id must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Address the web server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ==================== Tests ====================
