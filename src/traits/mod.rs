//! Trait definitions for mockable dependencies.
//!
//! This module defines [`PersonStore`], the storage accessor the HTTP
//! handlers talk to, and re-exports the shared domain types.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates `MockPersonStore` for handler tests.

mod types;

pub use types::{Person, SortKey, UnknownSortKey};

use async_trait::async_trait;

use crate::error::StorageError;

/// Storage accessor for person records.
///
/// Implementations must be safe to share across in-flight requests; the
/// handlers add no locking of their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert a new person.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the email already exists or the
    /// database is unavailable.
    async fn create(&self, person: &Person) -> Result<(), StorageError>;

    /// Delete the person stored under `email`.
    ///
    /// Deleting an email that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn delete(&self, email: &str) -> Result<(), StorageError>;

    /// List every person, ordered descending by `sort_key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn list(&self, sort_key: SortKey) -> Result<Vec<Person>, StorageError>;

    /// Fetch the person stored under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row matches, or another
    /// [`StorageError`] if the database operation fails.
    async fn retrieve(&self, email: &str) -> Result<Person, StorageError>;

    /// Overwrite every field of the person stored under `email`,
    /// including the email itself.
    ///
    /// Updating an email that does not exist is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the new email collides with another row
    /// or the database operation fails.
    async fn update(&self, email: &str, person: &Person) -> Result<(), StorageError>;
}
