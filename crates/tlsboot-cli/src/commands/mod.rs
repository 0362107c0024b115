//! CLI command implementations.

pub mod issue;
pub mod probe;
pub mod serve;
