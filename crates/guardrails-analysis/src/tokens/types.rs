//! Design token result types.

use serde::{Deserialize, Serialize};

use guardrails_core::errors::FileFinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenViolationKind {
    RawElement,
    InlineColor,
    InlinePixelValue,
}

impl TokenViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RawElement => "RAW_ELEMENT",
            Self::InlineColor => "INLINE_COLOR",
            Self::InlinePixelValue => "INLINE_PIXEL_VALUE",
        }
    }
}

impl std::fmt::Display for TokenViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokenViolation {
    pub file: String,
    /// 1-based physical line.
    pub line: u32,
    /// 1-based character column of the match.
    pub column: u32,
    pub kind: TokenViolationKind,
    pub snippet: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReport {
    pub passed: bool,
    pub violations: Vec<DesignTokenViolation>,
    pub errors: Vec<FileFinding>,
    pub files_scanned: usize,
    pub files_exempt: usize,
}
