//! Derive the parameter list from environment variables

use config::{Environment, NameStripping, LOAD_MARKER, PREFIX_VAR};
use types::Param;

/// Build one unresolved [`Param`] per variable whose name contains
/// [`LOAD_MARKER`], in enumeration order
///
/// The variable's value, behind the optional `SSM_PREFIX`, is the lookup
/// path. With [`NameStripping::All`] every occurrence of the marker is
/// removed from the name, so `X_SSM_LOAD_a_SSM_LOAD_b` becomes `X_a_b`.
pub fn extract(env: &Environment, stripping: NameStripping) -> Vec<Param> {
    let prefix = env.get(PREFIX_VAR).unwrap_or_default();

    let params: Vec<Param> = env
        .iter()
        .filter(|(name, _)| name.contains(LOAD_MARKER))
        .map(|(name, value)| Param::new(strip_marker(name, stripping), format!("{prefix}{value}")))
        .collect();

    tracing::debug!(count = params.len(), prefix, "Extracted parameter declarations");
    params
}

fn strip_marker(name: &str, stripping: NameStripping) -> String {
    match stripping {
        NameStripping::All => name.replace(LOAD_MARKER, ""),
        NameStripping::Prefix => name.strip_prefix(LOAD_MARKER).unwrap_or(name).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn env(vars: &[(&str, &str)]) -> Environment {
        vars.iter().copied().collect()
    }

    fn as_set(params: &[Param]) -> HashSet<(String, String)> {
        params
            .iter()
            .map(|p| (p.name.clone(), p.path.clone()))
            .collect()
    }

    #[test]
    fn test_no_qualifying_variables() {
        let params = extract(
            &env(&[("PATH", "/usr/bin"), ("SSM_PREFIX", "/prod"), ("LOAD", "x")]),
            NameStripping::All,
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_name_and_path_derivation() {
        let params = extract(
            &env(&[
                ("SSM_LOAD_db_password", "secret/db"),
                ("HOME", "/root"),
                ("SSM_PREFIX", "/prod/"),
                ("SSM_LOAD_api_key", "keys/api"),
            ]),
            NameStripping::All,
        );

        let expected: HashSet<(String, String)> = [
            ("db_password".to_string(), "/prod/secret/db".to_string()),
            ("api_key".to_string(), "/prod/keys/api".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(as_set(&params), expected);
        assert!(params.iter().all(|p| p.value.is_empty() && p.version == 0));
    }

    #[test]
    fn test_without_prefix_path_is_value() {
        let params = extract(&env(&[("SSM_LOAD_token", "/shared/token")]), NameStripping::All);
        assert_eq!(params, vec![Param::new("token", "/shared/token")]);
    }

    #[test]
    fn test_marker_removed_everywhere() {
        let params = extract(
            &env(&[("APP_SSM_LOAD_db_SSM_LOAD_user", "db/user")]),
            NameStripping::All,
        );
        assert_eq!(params[0].name, "APP_db_user");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let params = extract(&env(&[("ssm_load_db", "db")]), NameStripping::All);
        assert!(params.is_empty());
    }

    #[test]
    fn test_prefix_only_stripping() {
        let params = extract(
            &env(&[
                ("SSM_LOAD_db_SSM_LOAD_user", "db/user"),
                ("APP_SSM_LOAD_token", "token"),
            ]),
            NameStripping::Prefix,
        );

        let names: HashSet<String> = params.into_iter().map(|p| p.name).collect();
        let expected: HashSet<String> = ["db_SSM_LOAD_user", "APP_SSM_LOAD_token"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, expected);
    }
}
