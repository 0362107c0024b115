//! Error types for the client harness.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client harness.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The trusted certificate file could not be used.
    #[error("failed to load CA certificate from {}: {message}", .path.display())]
    CaCertificate {
        /// Certificate path.
        path: PathBuf,
        /// Why the certificate was rejected.
        message: String,
    },

    /// A local file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The request failed at the transport level.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Response body text.
        body: String,
    },
}
