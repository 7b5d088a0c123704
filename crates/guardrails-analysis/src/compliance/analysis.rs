//! Gates wrapping the boundary and design-token engines.

use guardrails_core::errors::FileFinding;

use super::orchestrator::{ComplianceGate, ProjectContext};
use super::types::{CheckId, ComplianceCheck, Finding};
use crate::boundaries::BoundaryCheck;
use crate::tokens::TokenCheck;

pub struct BoundaryGate {
    check: BoundaryCheck,
}

impl BoundaryGate {
    pub fn new(check: BoundaryCheck) -> Self {
        Self { check }
    }
}

impl ComplianceGate for BoundaryGate {
    fn id(&self) -> CheckId {
        CheckId::Boundaries
    }

    fn evaluate(&self, _ctx: &ProjectContext<'_>) -> ComplianceCheck {
        let report = self.check.run();
        let details = format!(
            "{} files scanned, {} violations, {} warnings, {} errors",
            report.files_scanned,
            report.violations.len(),
            report.warnings.len(),
            report.errors.len()
        );

        let mut findings: Vec<Finding> = report
            .violations
            .iter()
            .map(|v| {
                Finding::new(
                    &v.file,
                    Some(v.line),
                    format!("{} '{}': {}", v.kind, v.imported_specifier, v.message),
                )
            })
            .collect();
        if !report.violations.is_empty() {
            return ComplianceCheck::fail(self.id(), details, findings);
        }

        findings.extend(
            report
                .warnings
                .iter()
                .map(|w| Finding::new(&w.file, None, format!("{}: {}", w.code, w.message))),
        );
        findings.extend(report.errors.iter().map(error_finding));
        if findings.is_empty() {
            ComplianceCheck::pass(self.id(), details)
        } else {
            ComplianceCheck::warn(self.id(), details, findings)
        }
    }
}

pub struct DesignTokenGate {
    check: TokenCheck,
}

impl DesignTokenGate {
    pub fn new(check: TokenCheck) -> Self {
        Self { check }
    }
}

impl ComplianceGate for DesignTokenGate {
    fn id(&self) -> CheckId {
        CheckId::DesignTokens
    }

    fn evaluate(&self, _ctx: &ProjectContext<'_>) -> ComplianceCheck {
        let report = self.check.run();
        let details = format!(
            "{} files scanned ({} exempt), {} violations, {} errors",
            report.files_scanned,
            report.files_exempt,
            report.violations.len(),
            report.errors.len()
        );

        if !report.violations.is_empty() {
            let findings = report
                .violations
                .iter()
                .map(|v| Finding::new(&v.file, Some(v.line), format!("{}: {}", v.kind, v.message)))
                .collect();
            return ComplianceCheck::fail(self.id(), details, findings);
        }
        if !report.errors.is_empty() {
            let findings = report.errors.iter().map(error_finding).collect();
            return ComplianceCheck::warn(self.id(), details, findings);
        }
        ComplianceCheck::pass(self.id(), details)
    }
}

fn error_finding(error: &FileFinding) -> Finding {
    Finding::new(&error.file, None, format!("[{}] {}", error.code, error.message))
}
