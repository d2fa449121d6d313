//! Error types for the people API.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors (startup and serving)
//! - [`StorageError`]: Database operation errors
//! - [`ConfigError`]: Configuration errors
//!
//! HTTP-facing errors live in [`crate::server::ApiError`], which wraps
//! [`StorageError`] and decides what the client gets to see.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Returned by the process entry point. Every variant is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failed to bind or serve the HTTP listener.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A single connection attempt failed.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// Every connection attempt allowed by the retry policy failed.
    #[error("Database connection exhausted after {attempts} attempts: {message}")]
    ConnectionExhausted {
        /// Total number of attempts made.
        attempts: u32,
        /// Message of the last failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed.
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// No person is stored under the given email.
    #[error("Person not found: {email}")]
    NotFound {
        /// The email that was looked up.
        email: String,
    },

    /// Schema migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(AppError: Send, Sync, std::error::Error);
    assert_impl_all!(StorageError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);

    #[test]
    fn test_app_error_from_storage() {
        let err: AppError = StorageError::NotFound {
            email: "a@b.c".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Storage error: Person not found: a@b.c");
    }

    #[test]
    fn test_app_error_from_config() {
        let err: AppError = ConfigError::MissingRequired {
            var: "MYSQL_PASS".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Configuration error: Missing required: MYSQL_PASS");
    }

    #[test]
    fn test_app_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: AppError = io.into();
        assert!(err.to_string().starts_with("Server error:"));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn test_storage_error_connection_exhausted_display() {
        let err = StorageError::ConnectionExhausted {
            attempts: 6,
            message: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "Database connection exhausted after 6 attempts: connection refused"
        );
    }

    #[test]
    fn test_storage_error_query_failed_display() {
        let err = StorageError::QueryFailed {
            query: "INSERT persons".into(),
            message: "duplicate key".into(),
        };
        assert_eq!(err.to_string(), "Query failed: INSERT persons - duplicate key");
    }

    #[test]
    fn test_storage_error_migration_display() {
        let err = StorageError::MigrationFailed {
            version: "001".into(),
            message: "syntax error".into(),
        };
        assert_eq!(err.to_string(), "Migration failed: 001 - syntax error");
    }

    #[test]
    fn test_config_error_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "CONNECT_MAX_RETRIES".into(),
            reason: "must be a positive integer".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONNECT_MAX_RETRIES: must be a positive integer"
        );
    }
}
