//! Configuration management for the directory reporting engine.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the directory reporting engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory service base URL
    pub directory_api_url: String,

    /// Directory API key for authentication
    pub directory_api_key: String,

    /// Tenant whose contacts are loaded
    pub tenant_id: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Directory the export artifact is written into (default: ".")
    pub export_dir: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DIRECTORY_API_BASE_URL`: Base URL for the directory service
    /// - `DIRECTORY_API_KEY`: API key for authentication
    /// - `TENANT_ID`: Tenant whose contacts are loaded
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `EXPORT_DIR`: Output directory for exports (default: ".")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, but don't fail without one
        let _ = dotenvy::dotenv();

        let directory_api_url = env::var("DIRECTORY_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("DIRECTORY_API_BASE_URL".to_string()))?;

        let directory_api_key = env::var("DIRECTORY_API_KEY")
            .map_err(|_| ConfigError::MissingVar("DIRECTORY_API_KEY".to_string()))?;

        let tenant_id =
            env::var("TENANT_ID").map_err(|_| ConfigError::MissingVar("TENANT_ID".to_string()))?;

        if !directory_api_url.starts_with("http://") && !directory_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTORY_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if directory_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DIRECTORY_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        if tenant_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "TENANT_ID".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let export_dir = PathBuf::from(env::var("EXPORT_DIR").unwrap_or_else(|_| ".".to_string()));
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            directory_api_url,
            directory_api_key,
            tenant_id,
            request_timeout,
            export_dir,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            directory_api_url: String::new(),
            directory_api_key: String::new(),
            tenant_id: String::new(),
            request_timeout: 10,
            export_dir: PathBuf::from("."),
            log_level: "error".to_string(),
        }
    }
}
