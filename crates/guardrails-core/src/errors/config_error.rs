//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, GuardrailsErrorCode};

/// Errors that can occur during configuration loading and validation.
///
/// These are the only fatal errors in the engine: they abort a run before
/// any check executes.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Root directory does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Root directory is not readable: {path}: {message}")]
    RootUnreadable { path: PathBuf, message: String },
}

impl GuardrailsErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
