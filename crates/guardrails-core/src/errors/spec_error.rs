//! Spec artifact errors.

use std::path::PathBuf;

use super::error_code::{self, GuardrailsErrorCode};

/// Errors raised while locating a component's spec directory.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Spec directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Spec path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl GuardrailsErrorCode for SpecError {
    fn error_code(&self) -> &'static str {
        error_code::SPEC_ERROR
    }
}
