//! Shared types for the SSM loader
//!
//! This crate contains the parameter entries that flow through the
//! resolution pipeline, the output envelope written to disk and the error
//! taxonomy shared by every stage.

pub mod error;
pub mod param;

// Re-export commonly used types
pub use error::{ConfigError, LoaderError, ResolveError, Result, StoreError, WriteError};
pub use param::*;
