//! Error types for the server harness.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that can occur while running the harness.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The PEM artifacts could not be loaded as TLS material.
    #[error("failed to load TLS material from {} / {}: {source}", .cert.display(), .key.display())]
    TlsConfig {
        /// Certificate path.
        cert: PathBuf,
        /// Private key path.
        key: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Binding or serving the listener failed.
    #[error("server error on {0}: {1}")]
    Serve(std::net::SocketAddr, std::io::Error),
}

/// Result type alias for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body or form was malformed.
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// The server could not complete the request.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            r#"{"error":"internal_error","message":"failed to serialize error"}"#.to_string()
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}
