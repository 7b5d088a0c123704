//! Gate execution for the compliance report.

use std::path::PathBuf;
use std::time::Instant;

use guardrails_core::GuardrailsConfig;

use super::types::{CheckId, ComplianceCheck};

/// Shared, read-only input for every gate.
pub struct ProjectContext<'a> {
    pub root: PathBuf,
    pub config: &'a GuardrailsConfig,
}

/// A single compliance check. Gates never fail: problems are statuses.
pub trait ComplianceGate: Send + Sync {
    fn id(&self) -> CheckId;
    fn evaluate(&self, ctx: &ProjectContext<'_>) -> ComplianceCheck;
}

/// Runs every gate, in id order, with no short-circuit.
pub struct ComplianceOrchestrator {
    gates: Vec<Box<dyn ComplianceGate>>,
}

impl ComplianceOrchestrator {
    pub fn with_gates(mut gates: Vec<Box<dyn ComplianceGate>>) -> Self {
        gates.sort_by_key(|g| g.id());
        Self { gates }
    }

    pub fn execute(&self, ctx: &ProjectContext<'_>) -> Vec<ComplianceCheck> {
        self.gates
            .iter()
            .map(|gate| {
                let start = Instant::now();
                let check = gate.evaluate(ctx);
                tracing::info!(
                    check = %check.id,
                    status = %check.status,
                    findings = check.findings.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "compliance check finished"
                );
                check
            })
            .collect()
    }
}
