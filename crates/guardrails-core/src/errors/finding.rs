//! Non-fatal per-file error records.

use serde::{Deserialize, Serialize};

use super::error_code::GuardrailsErrorCode;
use super::EngineError;

/// A per-file problem captured as data instead of propagated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileFinding {
    /// Path relative to the scanned root.
    pub file: String,
    /// Stable error code (`PARSE_ERROR`, `SCAN_ERROR`, ...).
    pub code: String,
    pub message: String,
}

impl FileFinding {
    pub fn new(file: impl Into<String>, error: impl Into<EngineError>) -> Self {
        let error = error.into();
        Self {
            file: file.into(),
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}
