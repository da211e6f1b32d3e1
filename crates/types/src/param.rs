//! Parameter entries and the output envelope

use serde::{Deserialize, Serialize};
use std::fmt;

/// One parameter tracked from declaration to serialization
///
/// Created unresolved by the extractor, filled in once by the resolver and
/// read by the writer. Field order is the serialized order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Logical name derived from the declaring variable
    pub name: String,
    /// Resolved value, empty until resolved
    pub value: String,
    /// Fully-qualified lookup path in the store
    pub path: String,
    /// Store version of the value, zero until resolved
    pub version: i64,
    /// Always empty, kept for consumers that expect the field
    pub digest: String,
}

impl Param {
    /// Create an unresolved parameter
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Record the value and version returned by the store
    pub fn resolve(&mut self, value: impl Into<String>, version: i64) {
        self.value = value.into();
        self.version = version;
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name = {} value = {} path = {}",
            self.name, self.value, self.path
        )
    }
}

/// Envelope written to the output file
#[derive(Debug, Serialize)]
pub struct Output<'a> {
    pub parameters: &'a [Param],
}

impl<'a> Output<'a> {
    pub fn new(parameters: &'a [Param]) -> Self {
        Self { parameters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_param_is_unresolved() {
        let param = Param::new("db_password", "/prod/secret/db");
        assert_eq!(param.value, "");
        assert_eq!(param.version, 0);
        assert_eq!(param.digest, "");
    }

    #[test]
    fn test_resolve_overwrites() {
        let mut param = Param::new("token", "/token");
        param.resolve("first", 1);
        param.resolve("second", 2);
        assert_eq!(param.value, "second");
        assert_eq!(param.version, 2);
    }

    #[test]
    fn test_envelope_field_order() {
        let mut param = Param::new("db_password", "/prod/secret/db");
        param.resolve("p@ss", 3);
        let params = vec![param];

        let json = serde_json::to_string(&Output::new(&params)).unwrap();
        assert_eq!(
            json,
            r#"{"parameters":[{"name":"db_password","value":"p@ss","path":"/prod/secret/db","version":3,"digest":""}]}"#
        );
    }

    #[test]
    fn test_empty_envelope() {
        let json = serde_json::to_string(&Output::new(&[])).unwrap();
        assert_eq!(json, r#"{"parameters":[]}"#);
    }
}
