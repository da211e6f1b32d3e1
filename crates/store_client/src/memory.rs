//! In-memory parameter store (testing only)
//!
//! Answers from scripted values and failures, and records every path it
//! was asked for so tests can assert on call order.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use types::StoreError;

use crate::store::{ParameterStore, StoredParameter};

/// In-memory store backed by `HashMap<path, StoredParameter>`.
#[derive(Debug, Default)]
pub struct MemoryParameterStore {
    values: HashMap<String, StoredParameter>,
    failures: HashMap<String, StoreError>,
    requests: Mutex<Vec<Request>>,
}

/// A recorded fetch call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub path: String,
    pub with_decryption: bool,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with `value` at `version`
    pub fn with_value(mut self, path: impl Into<String>, value: impl Into<String>, version: i64) -> Self {
        self.values
            .insert(path.into(), StoredParameter::new(value, version));
        self
    }

    /// Fail every fetch of `path` with `error`
    pub fn with_failure(mut self, path: impl Into<String>, error: StoreError) -> Self {
        self.failures.insert(path.into(), error);
        self
    }

    /// Every fetch seen so far, in call order
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Paths fetched so far, in call order
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

#[async_trait]
impl ParameterStore for MemoryParameterStore {
    async fn fetch(&self, path: &str, with_decryption: bool) -> Result<StoredParameter, StoreError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Request {
                path: path.to_string(),
                with_decryption,
            });

        if let Some(error) = self.failures.get(path) {
            return Err(error.clone());
        }

        self.values
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                path: path.to_string(),
            })
    }

    fn name(&self) -> &str {
        "memory"
    }
}
