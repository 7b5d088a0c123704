//! Spec validation result types.

use serde::{Deserialize, Serialize};

/// One problem with a spec directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpecFinding {
    /// Spec file id when the file is missing, otherwise the file name.
    pub file: String,
    pub message: String,
    /// Field or heading inside the file, for structural findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SpecFinding {
    pub fn file(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            path: None,
        }
    }

    pub fn field(file: impl Into<String>, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// `errors` and `warnings` are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecValidationResult {
    pub component_name: String,
    pub valid: bool,
    pub errors: Vec<SpecFinding>,
    pub warnings: Vec<SpecFinding>,
}
