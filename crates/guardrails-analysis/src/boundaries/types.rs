//! Boundary check result types.

use serde::{Deserialize, Serialize};

use guardrails_core::errors::FileFinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoundaryViolationKind {
    UpwardLayerImport,
    ForbiddenPackageImport,
    CrossBoundary,
}

impl BoundaryViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpwardLayerImport => "UPWARD_LAYER_IMPORT",
            Self::ForbiddenPackageImport => "FORBIDDEN_PACKAGE_IMPORT",
            Self::CrossBoundary => "CROSS_BOUNDARY",
        }
    }
}

impl std::fmt::Display for BoundaryViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One import that breaks a boundary rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryViolation {
    pub file: String,
    pub imported_specifier: String,
    pub kind: BoundaryViolationKind,
    pub message: String,
    pub line: u32,
}

pub const UNCLASSIFIED_FILE: &str = "UNCLASSIFIED_FILE";

/// A file that was placed in foundation by fallback.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerWarning {
    pub file: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryReport {
    pub passed: bool,
    pub violations: Vec<BoundaryViolation>,
    pub warnings: Vec<LayerWarning>,
    pub errors: Vec<FileFinding>,
    pub files_scanned: usize,
}
