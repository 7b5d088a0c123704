//! Compliance report types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Check identifiers. Declaration order is the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    Boundaries,
    CiWorkflow,
    DependencyDeclared,
    DesignTokens,
    LintPreset,
    ViolationTests,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boundaries => "boundaries",
            Self::CiWorkflow => "ci-workflow",
            Self::DependencyDeclared => "dependency-declared",
            Self::DesignTokens => "design-tokens",
            Self::LintPreset => "lint-preset",
            Self::ViolationTests => "violation-tests",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Boundaries => "Layer and package boundaries",
            Self::CiWorkflow => "CI workflow runs guardrails",
            Self::DependencyDeclared => "Guardrails dependency declared",
            Self::DesignTokens => "Design token usage",
            Self::LintPreset => "Lint preset extended",
            Self::ViolationTests => "Violation tests present",
        }
    }

    pub fn all() -> &'static [CheckId] {
        &[
            Self::Boundaries,
            Self::CiWorkflow,
            Self::DependencyDeclared,
            Self::DesignTokens,
            Self::LintPreset,
            Self::ViolationTests,
        ]
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warn,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of evidence behind a check's status.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Finding {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub message: String,
}

impl Finding {
    pub fn new(file: impl Into<String>, line: Option<u32>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub id: CheckId,
    pub label: String,
    pub status: CheckStatus,
    pub details: String,
    pub findings: Vec<Finding>,
}

impl ComplianceCheck {
    fn with_status(id: CheckId, status: CheckStatus, details: String, findings: Vec<Finding>) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            status,
            details,
            findings,
        }
    }

    pub fn pass(id: CheckId, details: impl Into<String>) -> Self {
        Self::with_status(id, CheckStatus::Pass, details.into(), Vec::new())
    }

    pub fn fail(id: CheckId, details: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self::with_status(id, CheckStatus::Fail, details.into(), findings)
    }

    pub fn warn(id: CheckId, details: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self::with_status(id, CheckStatus::Warn, details.into(), findings)
    }

    /// WARN counts as passing; only FAIL fails the report.
    pub fn passed(&self) -> bool {
        self.status != CheckStatus::Fail
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub checks: Vec<ComplianceCheck>,
    pub overall_passed: bool,
    pub generated_at: DateTime<Utc>,
}

impl ComplianceReport {
    /// Sorts `checks` by id and derives `overall_passed`: WARN never fails.
    pub fn new(mut checks: Vec<ComplianceCheck>) -> Self {
        checks.sort_by_key(|c| c.id);
        Self {
            overall_passed: checks.iter().all(ComplianceCheck::passed),
            checks,
            generated_at: Utc::now(),
        }
    }

    pub fn check(&self, id: CheckId) -> Option<&ComplianceCheck> {
        self.checks.iter().find(|c| c.id == id)
    }
}
