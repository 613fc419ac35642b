use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for play-publisher operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PublishError {
    /// Short, stable name of the error kind, used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            PublishError::InvalidArgument(_) => "invalid_argument",
            PublishError::IllegalState(_) => "illegal_state",
            PublishError::NotFound(_) => "not_found",
            PublishError::Security(_) => "security",
            PublishError::Io(_) => "io",
            PublishError::TokenExchange(_) => "token_exchange",
            PublishError::Config(_) => "config",
        }
    }
}

/// Result type alias for play-publisher operations
pub type Result<T> = std::result::Result<T, PublishError>;
