//! Core SQL storage implementation.
//!
//! This module provides the main [`SqlStore`] struct: pool construction with
//! connection retry, schema bootstrap, and shutdown.

#![allow(clippy::missing_errors_doc)]

use std::time::Duration;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use super::retry::{retry_fixed, RetryPolicy};
use crate::error::StorageError;

/// Maximum pooled connections for a networked database.
const MAX_CONNECTIONS: u32 = 5;

/// Per-attempt limit on acquiring the first connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// SQL storage backend for person records.
///
/// Owns the connection pool. Construct once at startup and release with
/// [`SqlStore::close`] at shutdown; clones share the same pool.
#[derive(Debug, Clone)]
pub struct SqlStore {
    pub(crate) pool: AnyPool,
}

impl SqlStore {
    /// Connect to the database at `url`, retrying per `policy`, then make
    /// sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionExhausted`] if no attempt succeeds,
    /// or [`StorageError::MigrationFailed`] if the schema cannot be created.
    pub async fn connect(url: &str, policy: RetryPolicy) -> Result<Self, StorageError> {
        install_default_drivers();

        let pool = retry_fixed(policy, || {
            AnyPoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .connect(url)
        })
        .await?;

        tracing::info!("Connected to database");

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Create a new in-memory `SQLite` store for testing.
    ///
    /// Uses a single connection that is never recycled, since each `SQLite`
    /// memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Release every pooled connection.
    ///
    /// Waits for checked-out connections to be returned.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Database connection closed");
    }

    /// Run database migrations.
    ///
    /// Each migration is idempotent (uses IF NOT EXISTS).
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        let schema_001 = include_str!("../../migrations/001_persons.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Create a query error with the given query name and message.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }
}
