//! Error types for the SSM loader

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for a loader run
///
/// Every variant is fatal: the run stops at the first one it meets.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A parameter could not be fetched from the store
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// The output file could not be produced
    #[error("Output error: {0}")]
    Write(#[from] WriteError),
}

/// Result type alias for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Configuration specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing required setting
    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    /// Invalid value
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Parse error
    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

/// Failures reported by a parameter store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No parameter exists at the requested path
    #[error("parameter not found: {path}")]
    NotFound { path: String },

    /// The caller may not read the parameter or its key
    #[error("access denied to {path}: {message}")]
    AccessDenied { path: String, message: String },

    /// The request did not complete
    #[error("transport error while fetching {path}: {message}")]
    Transport { path: String, message: String },

    /// The store answered without a usable parameter
    #[error("malformed response for {path}")]
    MalformedResponse { path: String },
}

impl StoreError {
    /// Path of the request that failed
    pub fn path(&self) -> &str {
        match self {
            StoreError::NotFound { path }
            | StoreError::AccessDenied { path, .. }
            | StoreError::Transport { path, .. }
            | StoreError::MalformedResponse { path } => path,
        }
    }
}

/// A named parameter failed to resolve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not obtain param '{name}': {cause}")]
pub struct ResolveError {
    /// Logical name of the failing parameter
    pub name: String,
    /// What the store reported
    #[source]
    pub cause: StoreError,
}

/// Output file errors
#[derive(Error, Debug)]
pub enum WriteError {
    /// The envelope could not be encoded as JSON
    #[error("could not marshal payload to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Creating or writing the destination failed
    #[error("could not write output file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
