//! Configuration file parsing for the Router.
//!
//! Loads settings from TOML files including bind address, the default
//! significance level, the request body limit and the log filter.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Field present but out of range
    #[error("Invalid configuration field {field}: {reason}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Significance level used when a request omits one (default: 0.05)
    #[serde(default = "default_significance_level")]
    pub default_significance_level: f64,

    /// Largest accepted request body in bytes (default: 1 MiB)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// tracing filter directive, overridden by RUST_LOG (default: "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_significance_level() -> f64 {
    0.05
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_significance_level) {
            return Err(ConfigError::InvalidField {
                field: "default_significance_level",
                reason: format!("{} is not in [0, 1]", self.default_significance_level),
            });
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidField {
                field: "max_body_bytes",
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Configuration for a local development server
    pub fn default_local_config() -> Self {
        RouterConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            default_significance_level: default_significance_level(),
            max_body_bytes: default_max_body_bytes(),
            log_filter: default_log_filter(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
