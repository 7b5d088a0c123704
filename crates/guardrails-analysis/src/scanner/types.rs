//! Scanner data types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use guardrails_core::errors::FileFinding;

/// A candidate file discovered under the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    /// Path relative to the scan root, always `/`-separated.
    pub relative_path: String,
    pub size: u64,
}

/// Output of one scan: path-sorted candidates plus non-fatal findings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub root: PathBuf,
    pub files: Vec<ScannedFile>,
    /// Candidates removed by the exemption predicate.
    pub exempt: usize,
    pub errors: Vec<FileFinding>,
}
