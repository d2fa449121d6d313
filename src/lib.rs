//! People API
//!
//! A REST service exposing CRUD operations over person records stored in a
//! single relational table, keyed by email.
//!
//! # Quick Start
//!
//! ```bash
//! MYSQL_PASS=secret ./people-api
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────┐  HTTP   ┌──────────┐  decode   ┌──────────┐   SQL   ┌───────┐
//! │ client │────────▶│  router  │──────────▶│ handlers │────────▶│ MySQL │
//! │        │◀────────│ (axum)   │◀──────────│          │◀────────│       │
//! └────────┘  JSON   └──────────┘  envelope └──────────┘         └───────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod traits;
