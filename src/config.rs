//! Configuration parsing and structures

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::env::expand_env_vars;

/// Top-level configuration as loaded from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Play publishing configuration
    pub play: PublishConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Settings needed to authorize against the Google Play Developer API.
///
/// Every field is optional at this level; presence and content are checked
/// by [`crate::publisher::init`], which owns the validation order.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PublishConfig {
    /// Name sent to the API with each request (suggested format `Company-App/1.0`)
    pub application_name: Option<String>,

    /// Service account identity, e.g. `publisher@project.iam.gserviceaccount.com`
    pub service_email: Option<String>,

    /// Path to the service account private key file
    pub service_key: Option<PathBuf>,
}

impl PublishConfig {
    /// Create a config with all three fields set
    pub fn new(
        application_name: impl Into<String>,
        service_email: impl Into<String>,
        service_key: impl Into<PathBuf>,
    ) -> Self {
        Self {
            application_name: Some(application_name.into()),
            service_email: Some(service_email.into()),
            service_key: Some(service_key.into()),
        }
    }

    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }

    pub fn service_email(&self) -> Option<&str> {
        self.service_email.as_deref()
    }

    pub fn service_key(&self) -> Option<&Path> {
        self.service_key.as_deref()
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a YAML string, expanding `${VAR}` references first
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(content)?;
        serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
