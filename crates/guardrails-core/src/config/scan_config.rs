//! Scanner configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_MAX_FILE_SIZE, DEFAULT_THREADS};

/// Configuration for the source tree scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions (without the dot) treated as component code.
    pub extensions: Option<Vec<String>>,
    /// Include globs, relative to the scanned directory. Empty = everything.
    pub include: Vec<String>,
    /// Extra gitignore-style exclusions on top of the built-in ones.
    pub extra_ignore: Vec<String>,
    /// Maximum file size in bytes. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Worker threads for per-file stages. Default: 0 (auto).
    pub threads: Option<usize>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective extension list.
    pub fn effective_extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        })
    }

    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }

    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
