//! Issuance error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for issuance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Issuance error variants.
///
/// None of these are retried internally; every variant is terminal for the
/// issuance call that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// Key pair generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// Random serial number draw failed.
    #[error("serial number generation failed: {0}")]
    SerialGeneration(String),

    /// The host identity list contained no usable token.
    #[error("no valid host identity: host list is empty or all tokens are blank")]
    NoValidIdentity,

    /// Template assembly or self-signing failed.
    #[error("certificate signing failed: {0}")]
    Signing(String),

    /// DER or PEM encoding of the key material failed.
    #[error("private key encoding failed: {0}")]
    KeyEncoding(String),

    /// An output artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    OutputWrite {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// Certificate parsing failed.
    #[error("certificate parsing failed: {0}")]
    Parse(String),

    /// The issuance request was rejected before any work was done.
    #[error("invalid issuance request: {0}")]
    Validation(String),
}
