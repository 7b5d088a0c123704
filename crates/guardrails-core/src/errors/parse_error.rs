//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, GuardrailsErrorCode};

/// Errors that can occur while extracting imports from a single file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar unavailable for {path}: {message}")]
    GrammarUnavailable { path: PathBuf, message: String },

    #[error("Syntax error in {path} near line {line}")]
    Syntax { path: PathBuf, line: u32 },

    #[error("Unreadable file {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },
}

impl GuardrailsErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => error_code::UNSUPPORTED_LANGUAGE,
            _ => error_code::PARSE_ERROR,
        }
    }
}
