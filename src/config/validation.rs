//! Configuration validation.
//!
//! Range checks for values loaded by [`Config::from_env`].

use std::net::SocketAddr;

use super::{Config, PASSWORD_VAR};
use crate::error::ConfigError;

/// Maximum allowed delay between connection attempts, in seconds.
pub const MAX_RETRY_DELAY_SECS: u64 = 60;

/// Maximum allowed connection retry count.
pub const MAX_CONNECT_RETRIES: u32 = 20;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `MYSQL_PASS` is empty
/// - `CONNECT_RETRY_DELAY_SECS` is above 60
/// - `CONNECT_MAX_RETRIES` is above 20
/// - `LISTEN_ADDR` is not a socket address
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.db_password.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: PASSWORD_VAR.into(),
            reason: "must not be empty".into(),
        });
    }

    if config.connect_retry_delay_secs > MAX_RETRY_DELAY_SECS {
        return Err(ConfigError::InvalidValue {
            var: "CONNECT_RETRY_DELAY_SECS".into(),
            reason: format!("must be between 0 and {MAX_RETRY_DELAY_SECS}"),
        });
    }

    if config.connect_max_retries > MAX_CONNECT_RETRIES {
        return Err(ConfigError::InvalidValue {
            var: "CONNECT_MAX_RETRIES".into(),
            reason: format!("must be between 0 and {MAX_CONNECT_RETRIES}"),
        });
    }

    if config.listen_addr.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::InvalidValue {
            var: "LISTEN_ADDR".into(),
            reason: format!("'{}' is not a socket address", config.listen_addr),
        });
    }

    Ok(())
}
