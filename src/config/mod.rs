//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//! - Secure database password storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use people_api::config::{Config, SecretString};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     db_password: SecretString::new("hunter2"),
//!     db_user: "root".to_string(),
//!     db_host: "db:3306".to_string(),
//!     db_name: "api_db".to_string(),
//!     listen_addr: "0.0.0.0:8080".to_string(),
//!     connect_retry_delay_secs: 3,
//!     connect_max_retries: 5,
//!     log_level: "info".to_string(),
//! };
//!
//! // Password is protected from accidental logging
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("hunter2"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_CONNECT_RETRIES, MAX_RETRY_DELAY_SECS};

use std::time::Duration;

use crate::error::ConfigError;
use crate::storage::RetryPolicy;

/// Environment variable holding the database password.
pub const PASSWORD_VAR: &str = "MYSQL_PASS";

/// Default database user.
pub const DEFAULT_DB_USER: &str = "root";

/// Default database host and port.
pub const DEFAULT_DB_HOST: &str = "db:3306";

/// Default database name.
pub const DEFAULT_DB_NAME: &str = "api_db";

/// Default listen address for the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default delay between connection attempts, in seconds.
pub const DEFAULT_CONNECT_RETRY_DELAY_SECS: u64 = 3;

/// Default number of connection retries after the first attempt.
pub const DEFAULT_CONNECT_MAX_RETRIES: u32 = 5;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
/// The password uses [`SecretString`] so it never shows up in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database password (protected from logging via [`SecretString`]).
    pub db_password: SecretString,
    /// Database user.
    pub db_user: String,
    /// Database `host:port`.
    pub db_host: String,
    /// Database (schema) name.
    pub db_name: String,
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// Fixed delay between connection attempts, in seconds.
    pub connect_retry_delay_secs: u64,
    /// Connection retries after the first failed attempt.
    pub connect_max_retries: u32,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MYSQL_PASS`: Database password
    ///
    /// Optional environment variables (with defaults):
    /// - `MYSQL_USER`: Database user (default: `root`)
    /// - `MYSQL_HOST`: Database `host:port` (default: `db:3306`)
    /// - `MYSQL_DATABASE`: Database name (default: `api_db`)
    /// - `LISTEN_ADDR`: HTTP listen address (default: `0.0.0.0:8080`)
    /// - `CONNECT_RETRY_DELAY_SECS`: Delay between connection attempts (default: `3`)
    /// - `CONNECT_MAX_RETRIES`: Retries after the first attempt (default: `5`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `MYSQL_PASS` is missing
    /// - a numeric variable is not a valid non-negative integer
    /// - any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let db_password = std::env::var(PASSWORD_VAR).map_err(|_| ConfigError::MissingRequired {
            var: PASSWORD_VAR.into(),
        })?;

        let config = Self {
            db_password: SecretString::new(db_password),
            db_user: env_or("MYSQL_USER", DEFAULT_DB_USER),
            db_host: env_or("MYSQL_HOST", DEFAULT_DB_HOST),
            db_name: env_or("MYSQL_DATABASE", DEFAULT_DB_NAME),
            listen_addr: env_or("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            connect_retry_delay_secs: parse_env_u64(
                "CONNECT_RETRY_DELAY_SECS",
                DEFAULT_CONNECT_RETRY_DELAY_SECS,
            )?,
            connect_max_retries: parse_env_u32("CONNECT_MAX_RETRIES", DEFAULT_CONNECT_MAX_RETRIES)?,
            log_level: Self::log_level_from_env(),
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Log level for subscriber setup, readable before the full config.
    ///
    /// Loads `.env` first, so a `LOG_LEVEL` set only there still applies.
    #[must_use]
    pub fn log_level_from_env() -> String {
        let _ = dotenvy::dotenv();
        env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL)
    }

    /// Connection URL for the database.
    ///
    /// Wrapped in [`SecretString`] since it embeds the password. User and
    /// password are percent-encoded, so any byte is allowed in either.
    #[must_use]
    pub fn database_url(&self) -> SecretString {
        SecretString::new(format!(
            "mysql://{}:{}@{}/{}",
            urlencoding::encode(&self.db_user),
            urlencoding::encode(self.db_password.expose()),
            self.db_host,
            self.db_name
        ))
    }

    /// Retry policy for the initial database connection.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            Duration::from_secs(self.connect_retry_delay_secs),
            self.connect_max_retries,
        )
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a non-negative integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a non-negative integer".into(),
        })
    })
}
