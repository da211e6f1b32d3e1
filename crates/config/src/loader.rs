//! Configuration loader implementation

use crate::environment::Environment;
use crate::schema::{
    NameStripping, RawSettings, RunConfig, DEBUG_VAR, ENV_NAMESPACE, NAME_STRIP_VAR,
    OUTPUT_DIR_VAR, OUTPUT_FILENAME_VAR,
};
use figment::{providers::Serialized, Figment};
use std::collections::BTreeMap;
use types::ConfigError;

/// Configuration loader that reads `SSM_`-namespaced settings
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the run configuration from an environment snapshot
    pub fn load(env: &Environment) -> Result<RunConfig, ConfigError> {
        let settings: RawSettings = Self::figment(env)
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Self::validate(settings)
    }

    /// Layer the namespaced environment settings over the defaults
    pub fn figment(env: &Environment) -> Figment {
        Figment::from(Serialized::defaults(RawSettings::default()))
            .merge(Serialized::defaults(Self::namespaced(env)))
    }

    /// Known settings keyed the way [`RawSettings`] names them
    fn namespaced(env: &Environment) -> BTreeMap<String, String> {
        let mut settings = BTreeMap::new();
        for (name, value) in env.iter() {
            let Some(key) = name.strip_prefix(ENV_NAMESPACE) else {
                continue;
            };
            let key = key.to_ascii_lowercase();
            if RawSettings::KEYS.contains(&key.as_str()) {
                settings.entry(key).or_insert_with(|| value.to_string());
            }
        }
        settings
    }

    fn validate(settings: RawSettings) -> Result<RunConfig, ConfigError> {
        let output_directory = Self::required(settings.output_dir, OUTPUT_DIR_VAR)?;
        let output_filename = Self::required(settings.output_filename, OUTPUT_FILENAME_VAR)?;

        let debug = settings.debug.as_deref().and_then(parse_bool).unwrap_or(false);

        let name_stripping = match settings.name_strip.as_deref() {
            None | Some("") => NameStripping::default(),
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: NAME_STRIP_VAR.to_string(),
                value: raw.to_string(),
            })?,
        };

        Ok(RunConfig {
            output_directory,
            output_filename,
            debug,
            name_stripping,
        })
    }

    fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
        match value {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::MissingField {
                field: field.to_string(),
            }),
        }
    }
}

/// Parse the conventional boolean spellings
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`. Anything
/// else is not a boolean, and the debug flag treats it as off.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => {
            tracing::debug!(variable = DEBUG_VAR, value = raw, "Ignoring unparseable boolean");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        vars.iter().copied().collect()
    }

    #[test]
    fn test_load_minimal_config() {
        let config = ConfigLoader::load(&env(&[
            ("SSM_OUTPUT_DIR", "/etc/app"),
            ("SSM_OUTPUT_FILENAME", "cfg.json"),
        ]))
        .unwrap();

        assert_eq!(config.output_directory, "/etc/app");
        assert_eq!(config.output_filename, "cfg.json");
        assert!(!config.debug);
        assert_eq!(config.name_stripping, NameStripping::All);
    }

    #[test]
    fn test_missing_directory_fails() {
        for vars in [
            vec![("SSM_OUTPUT_FILENAME", "cfg.json"), ("SSM_DEBUG", "true")],
            vec![("SSM_OUTPUT_DIR", ""), ("SSM_OUTPUT_FILENAME", "cfg.json")],
        ] {
            let err = ConfigLoader::load(&env(&vars)).unwrap_err();
            assert_eq!(
                err,
                ConfigError::MissingField {
                    field: "SSM_OUTPUT_DIR".to_string()
                }
            );
        }
    }

    #[test]
    fn test_missing_filename_fails() {
        let err = ConfigLoader::load(&env(&[("SSM_OUTPUT_DIR", "/etc/app")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field } if field == "SSM_OUTPUT_FILENAME"));
    }

    #[test]
    fn test_debug_flag_forms() {
        let cases = [
            ("true", true),
            ("1", true),
            ("T", true),
            ("False", false),
            ("0", false),
            ("yes", false),
            ("", false),
            ("tRuE", false),
        ];

        for (raw, expected) in cases {
            let config = ConfigLoader::load(&env(&[
                ("SSM_OUTPUT_DIR", "/etc/app"),
                ("SSM_OUTPUT_FILENAME", "cfg.json"),
                ("SSM_DEBUG", raw),
            ]))
            .unwrap();
            assert_eq!(config.debug, expected, "SSM_DEBUG={raw:?}");
        }
    }

    #[test]
    fn test_name_strip_setting() {
        let config = ConfigLoader::load(&env(&[
            ("SSM_OUTPUT_DIR", "/etc/app"),
            ("SSM_OUTPUT_FILENAME", "cfg.json"),
            ("SSM_NAME_STRIP", "prefix"),
        ]))
        .unwrap();
        assert_eq!(config.name_stripping, NameStripping::Prefix);

        let err = ConfigLoader::load(&env(&[
            ("SSM_OUTPUT_DIR", "/etc/app"),
            ("SSM_OUTPUT_FILENAME", "cfg.json"),
            ("SSM_NAME_STRIP", "middle"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "SSM_NAME_STRIP"));
    }

    #[test]
    fn test_ignores_unrelated_variables() {
        let config = ConfigLoader::load(&env(&[
            ("OUTPUT_DIR", "/wrong"),
            ("SSM_LOAD_OUTPUT_DIR", "/also/wrong"),
            ("SSM_OUTPUT_DIR", "/etc/app"),
            ("SSM_OUTPUT_FILENAME", "cfg.json"),
            ("SSM_PREFIX", "/prod"),
        ]))
        .unwrap();
        assert_eq!(config.output_directory, "/etc/app");
    }

    #[test]
    fn test_numeric_filename_stays_text() {
        let config = ConfigLoader::load(&env(&[
            ("SSM_OUTPUT_DIR", "/etc/app"),
            ("SSM_OUTPUT_FILENAME", "2024"),
        ]))
        .unwrap();
        assert_eq!(config.output_filename, "2024");
    }
}
