//! tlsboot CLI library.
//!
//! Argument parsing and command implementations for the `tlsboot` binary.

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
