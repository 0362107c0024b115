//! CLI error type.

use thiserror::Error;

/// Errors surfaced by the tlsboot CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Certificate issuance failed.
    #[error(transparent)]
    Issuance(#[from] tlsboot_pki::Error),

    /// The server harness failed.
    #[error(transparent)]
    Server(#[from] tlsboot_server::ServerError),

    /// The client harness failed.
    #[error(transparent)]
    Client(#[from] tlsboot_client::ClientError),

    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
