//! Project-level compliance check configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CI_COMMAND, DEFAULT_LINT_PRESET, DEFAULT_REQUIRED_DEPENDENCY, DEFAULT_SRC_DIR,
};

/// Configuration for the compliance aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Component source directory, relative to the root. Default: "src".
    pub src_dir: Option<String>,
    /// Package the root `package.json` must declare.
    pub required_dependency: Option<String>,
    /// Preset the ESLint configuration must extend.
    pub lint_preset: Option<String>,
    /// Globs locating violation-test files under the root.
    pub violation_test_globs: Option<Vec<String>>,
    /// Command a CI workflow must reference.
    pub ci_command: Option<String>,
}

impl ComplianceConfig {
    pub fn effective_src_dir(&self) -> String {
        self.src_dir.clone().unwrap_or_else(|| DEFAULT_SRC_DIR.to_string())
    }

    pub fn effective_required_dependency(&self) -> String {
        self.required_dependency
            .clone()
            .unwrap_or_else(|| DEFAULT_REQUIRED_DEPENDENCY.to_string())
    }

    pub fn effective_lint_preset(&self) -> String {
        self.lint_preset
            .clone()
            .unwrap_or_else(|| DEFAULT_LINT_PRESET.to_string())
    }

    pub fn effective_violation_test_globs(&self) -> Vec<String> {
        self.violation_test_globs.clone().unwrap_or_else(|| {
            vec![
                "**/*.violation.test.*".to_string(),
                "**/__violations__/**".to_string(),
            ]
        })
    }

    pub fn effective_ci_command(&self) -> String {
        self.ci_command
            .clone()
            .unwrap_or_else(|| DEFAULT_CI_COMMAND.to_string())
    }
}
