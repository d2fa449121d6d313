//! Storage backend.
//!
//! This module provides:
//! - [`SqlStore`], the relational [`PersonStore`](crate::traits::PersonStore)
//! - Fixed-interval connection retry via [`RetryPolicy`]
//! - Schema bootstrap for the `persons` table
//!
//! # Architecture
//!
//! The storage layer uses `sqlx`'s `Any` driver so the same queries run
//! against MySQL in production and in-memory `SQLite` in tests. Every
//! statement is parameterized; the list query's `ORDER BY` column comes
//! from a closed [`SortKey`](crate::traits::SortKey) enum.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `person`: Person CRUD queries
//! - `retry`: Connection retry loop
//! - `trait_impl`: `PersonStore` implementation
//!
//! # Example
//!
//! ```ignore
//! use people_api::storage::{RetryPolicy, SqlStore};
//!
//! let store = SqlStore::connect("mysql://root:pw@db:3306/api_db", RetryPolicy::default()).await?;
//! let people = store.list_persons(SortKey::Email).await?;
//! store.close().await;
//! ```

mod core;
mod person;
mod retry;
mod trait_impl;

pub use self::core::SqlStore;
pub use retry::{retry_fixed, RetryPolicy, DEFAULT_RETRY_DELAY, DEFAULT_MAX_RETRIES};
