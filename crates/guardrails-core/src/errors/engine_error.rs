//! Top-level engine error.

use super::error_code::GuardrailsErrorCode;
use super::{ConfigError, ParseError, ScanError, SpecError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),
}

impl EngineError {
    /// Only configuration errors abort a run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl GuardrailsErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Spec(e) => e.error_code(),
        }
    }
}
