//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, GuardrailsErrorCode};

/// Errors that can occur while reading a single candidate file.
/// Never fatal: the scanner records them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    MaxFileSizeExceeded { path: PathBuf, size: u64, max: u64 },
}

impl ScanError {
    /// Classify an I/O failure for `path`.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path }
        } else {
            Self::IoError { path, source }
        }
    }
}

impl GuardrailsErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
