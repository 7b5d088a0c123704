//! Compliance aggregator: every check, one report.
//!
//! Configuration is compiled up front so a `ConfigError` aborts before any
//! check runs. After that nothing short-circuits: each gate produces a
//! `ComplianceCheck` regardless of what the others found.

pub mod analysis;
pub mod orchestrator;
pub mod project;
pub mod types;

use std::path::Path;

use guardrails_core::errors::ConfigError;
use guardrails_core::GuardrailsConfig;

use crate::boundaries::BoundaryCheck;
use crate::tokens::TokenCheck;

pub use orchestrator::{ComplianceGate, ComplianceOrchestrator, ProjectContext};
pub use types::{CheckId, CheckStatus, ComplianceCheck, ComplianceReport, Finding};

/// Run every check against `root`, reading components from `src_root`.
pub fn run_compliance(
    root: &Path,
    src_root: &Path,
    config: &GuardrailsConfig,
) -> Result<ComplianceReport, ConfigError> {
    let boundaries = BoundaryCheck::new(src_root, root, config)?;
    let tokens = TokenCheck::new(src_root, root, config)?;
    let project = project::ProjectGates::compile(config)?;

    let orchestrator = ComplianceOrchestrator::with_gates(vec![
        Box::new(analysis::BoundaryGate::new(boundaries)),
        Box::new(analysis::DesignTokenGate::new(tokens)),
        Box::new(project.dependency),
        Box::new(project.lint_preset),
        Box::new(project.violation_tests),
        Box::new(project.ci_workflow),
    ]);

    let ctx = ProjectContext {
        root: root.to_path_buf(),
        config,
    };
    Ok(ComplianceReport::new(orchestrator.execute(&ctx)))
}
