//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace shared by every setting the loader reads
pub const ENV_NAMESPACE: &str = "SSM_";

/// Directory the output file is written to
pub const OUTPUT_DIR_VAR: &str = "SSM_OUTPUT_DIR";
/// Name of the output file
pub const OUTPUT_FILENAME_VAR: &str = "SSM_OUTPUT_FILENAME";
/// Boolean-like debug switch
pub const DEBUG_VAR: &str = "SSM_DEBUG";
/// Name stripping mode, `all` or `prefix`
pub const NAME_STRIP_VAR: &str = "SSM_NAME_STRIP";
/// Prefix prepended to every lookup path
pub const PREFIX_VAR: &str = "SSM_PREFIX";
/// Marker identifying variables that declare a parameter
pub const LOAD_MARKER: &str = "SSM_LOAD_";

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory for the result file
    pub output_directory: String,
    /// File name for the result file
    pub output_filename: String,
    /// Log resolved parameters and the JSON payload
    pub debug: bool,
    /// How the marker is removed from variable names
    pub name_stripping: NameStripping,
}

/// How [`LOAD_MARKER`] is removed when deriving a parameter name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStripping {
    /// Remove every occurrence anywhere in the name
    #[default]
    All,
    /// Remove the marker only when the name starts with it
    Prefix,
}

impl FromStr for NameStripping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(NameStripping::All),
            "prefix" => Ok(NameStripping::Prefix),
            other => Err(format!("unknown name stripping mode '{}'", other)),
        }
    }
}

impl fmt::Display for NameStripping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameStripping::All => write!(f, "all"),
            NameStripping::Prefix => write!(f, "prefix"),
        }
    }
}

/// Raw settings as extracted from the environment, before validation
///
/// Keys are the variable names with [`ENV_NAMESPACE`] removed, lower-cased.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_strip: Option<String>,
}

impl RawSettings {
    /// Setting keys read from the environment
    pub const KEYS: &'static [&'static str] =
        &["output_dir", "output_filename", "debug", "name_strip"];
}
