//! TLS server harness for exercising issued certificate/key artifacts.
//!
//! The harness loads the two PEM files written by issuance, terminates TLS,
//! and serves three endpoints:
//!
//! - `GET /` - greeting
//! - `POST /postjson` - decodes `{"message": ...}` and echoes it
//! - `POST /upload` - saves the `uploadfile` multipart field into the
//!   configured upload directory
//!
//! # Modules
//!
//! - [`server`] - Listener and TLS termination
//! - [`routes`] - Router construction
//! - [`handlers`] - Endpoint handlers
//! - [`config`] - Harness configuration
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

// Re-export commonly used types at crate root
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use server::HarnessServer;
