//! Response shaping for the HTTP API.
//!
//! Non-data responses use the [`Envelope`] wrapper. Failures are carried by
//! [`ApiError`], which picks the status code and the client-facing text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::StorageError;

/// Success message for create.
pub const CREATED_MESSAGE: &str = "Successfully created the person.";

/// Success message for delete.
pub const DELETED_MESSAGE: &str = "Successfully deleted the person.";

/// Success message for update.
pub const UPDATED_MESSAGE: &str = "Successfully updated the person.";

/// Client-facing text for every storage failure.
pub const SERVER_ERROR_MESSAGE: &str = "There was a problem with the server.";

/// JSON body for responses that carry no person data.
///
/// Empty fields are left out entirely, so a success body is
/// `{"message": "..."}` and a failure body is `{"error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Success text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Failure text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl Envelope {
    /// Success envelope.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: String::new(),
        }
    }

    /// Failure envelope.
    #[must_use]
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            error: error.into(),
        }
    }
}

/// HTTP API errors.
///
/// The `Display` text is exactly what the client sees. Storage failure
/// detail never reaches the client; it is logged instead.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body is not a valid person.
    #[error("Invalid payload.")]
    InvalidPayload {
        /// Why decoding or validation failed.
        reason: String,
    },

    /// A required query parameter is absent or empty.
    #[error("Missing parameter '{0}'.")]
    MissingParameter(&'static str),

    /// `orderBy` names a column outside the allow-list.
    #[error("Unsupported sorting column: {0}")]
    UnsupportedSortColumn(String),

    /// The query string could not be parsed.
    #[error("Invalid query string.")]
    InvalidQuery {
        /// Parser message.
        reason: String,
    },

    /// A path segment could not be decoded.
    #[error("Invalid path.")]
    InvalidPath {
        /// Extractor message.
        reason: String,
    },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage operation failed.
    #[error("There was a problem with the server.")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload { .. }
            | Self::MissingParameter(_)
            | Self::UnsupportedSortColumn(_)
            | Self::InvalidQuery { .. }
            | Self::InvalidPath { .. } => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Storage(source) => tracing::error!(error = %source, "Storage operation failed"),
            Self::InvalidPayload { reason }
            | Self::InvalidQuery { reason }
            | Self::InvalidPath { reason } => {
                tracing::debug!(%reason, "Rejected request: {self}");
            }
            Self::MissingParameter(_) | Self::UnsupportedSortColumn(_) => {
                tracing::debug!("Rejected request: {self}");
            }
        }

        let status = self.status_code();
        (status, Json(Envelope::error(self.to_string()))).into_response()
    }
}
