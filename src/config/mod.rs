//! Configuration management for the wstatus agent
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use wstatus_agent::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Coordinator endpoint: {}", config.coordinator.endpoint);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `WSTATUS__<section>__<key>`
//!
//! Examples:
//! - `WSTATUS__COORDINATOR__ENDPOINT=https://status.example.com/api/`
//! - `WSTATUS__COORDINATOR__POLL_INTERVAL=10s`
//! - `WSTATUS__HTTP__REQUEST_TIMEOUT=15s`
//!
//! The API token is a secret and is only read from the plain `WSTATUS_TOKEN`
//! environment variable (or the `--token` flag), never from the TOML file.
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/wstatus.toml`.
//! This can be overridden using the `WSTATUS_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

// Re-export public types
pub use crate::humanize::Interval;
pub use models::{Config, CoordinatorConfig, HttpConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`WSTATUS__*`, `WSTATUS_TOKEN`)
    /// 2. TOML file (default: `config/wstatus.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file is malformed
    /// - Validation fails (bad endpoint URL, zero intervals)
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[coordinator]
endpoint = "https://status.example.com/api/"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.coordinator.endpoint, "https://status.example.com/api/");
        assert_eq!(
            config.coordinator.poll_interval.as_duration(),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_validation_catches_bad_endpoint() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[coordinator]
endpoint = "unix:///var/run/wstatus.sock"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::InvalidEndpointScheme { .. })
        ));
    }

    #[test]
    fn test_full_config_example() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[coordinator]
endpoint = "http://coordinator:8008/api/"
poll_interval = "1m"

[http]
connect_timeout = "5s"
read_timeout = "3s"
request_timeout = "8s"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();

        assert_eq!(config.coordinator.endpoint, "http://coordinator:8008/api/");
        assert_eq!(
            config.coordinator.poll_interval.as_duration(),
            Duration::from_secs(60)
        );
        assert_eq!(config.http.connect_timeout.as_duration(), Duration::from_secs(5));
        assert_eq!(config.http.read_timeout.as_duration(), Duration::from_secs(3));
        assert_eq!(config.http.request_timeout.as_duration(), Duration::from_secs(8));
    }
}
