//! Environment variable expansion for configuration files
//!
//! Publishing configs usually live in a repository while the key file path
//! and service account differ per machine or CI runner, so config text may
//! reference variables as `${VAR_NAME}`. Expansion runs over the raw YAML
//! before it is parsed.

use std::collections::BTreeSet;
use std::env;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::config::ConfigError;

/// Matches `${VAR_NAME}` references
static VAR_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("variable pattern is valid")
});

/// Expand every `${VAR_NAME}` reference in `input` from the process environment.
///
/// Unset variables are collected and reported together in a single
/// `ConfigError::ValidationError`, sorted by name.
pub fn expand_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut missing = BTreeSet::new();

    let expanded = VAR_REFERENCE.replace_all(input, |caps: &Captures<'_>| {
        let name = &caps[1];
        match env::var(name) {
            Ok(value) => value,
            Err(_) => {
                missing.insert(name.to_string());
                String::new()
            }
        }
    });

    if !missing.is_empty() {
        let names: Vec<String> = missing.into_iter().collect();
        return Err(ConfigError::ValidationError(format!(
            "Missing environment variables: {}",
            names.join(", ")
        )));
    }

    Ok(expanded.into_owned())
}
