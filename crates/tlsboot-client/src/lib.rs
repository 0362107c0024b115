//! HTTP client harness for a locally trusted TLS endpoint.
//!
//! The client trusts a single issued certificate out-of-band and performs
//! the three harness requests against it: a plain GET, a JSON POST, and a
//! multipart file upload.
//!
//! # Modules
//!
//! - [`client`] - The harness client
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod client;
pub mod error;

// Re-export commonly used types at crate root
pub use client::HarnessClient;
pub use error::{ClientError, ClientResult};
