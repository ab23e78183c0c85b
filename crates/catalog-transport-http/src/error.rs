//! Error types for the HTTP transport layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use catalog_registry::RepositoryError;

/// Errors that can occur in the HTTP transport.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}

/// Request-level failure, rendered as `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No item has the requested id.
    #[error("Item not found")]
    NotFound,
    /// The request body is missing, malformed or incomplete.
    #[error("{0}")]
    BadRequest(String),
    /// The repository failed.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Repository(RepositoryError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Repository(RepositoryError::Storage { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
