//! Parameter store trait and interfaces

use async_trait::async_trait;
use types::StoreError;

/// A value returned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredParameter {
    /// Parameter value, decrypted when requested
    pub value: String,
    /// Version of the parameter in the store
    pub version: i64,
}

impl StoredParameter {
    pub fn new(value: impl Into<String>, version: i64) -> Self {
        Self {
            value: value.into(),
            version,
        }
    }
}

/// Trait for key-value parameter stores
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the current value at `path`
    ///
    /// With `with_decryption` set, encrypted values are returned in clear.
    async fn fetch(&self, path: &str, with_decryption: bool) -> Result<StoredParameter, StoreError>;

    /// Get the name of the store
    fn name(&self) -> &str;
}
