//! Reporters: output formats for check results.

pub mod console;
pub mod json;

use crate::boundaries::BoundaryReport;
use crate::compliance::ComplianceReport;
use crate::spec_artifacts::SpecValidationResult;
use crate::tokens::TokenReport;

/// Any result the engine hands back to a caller.
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    Boundaries(&'a BoundaryReport),
    Tokens(&'a TokenReport),
    Spec(&'a SpecValidationResult),
    Compliance(&'a ComplianceReport),
}

impl Report<'_> {
    pub fn passed(&self) -> bool {
        match self {
            Report::Boundaries(r) => r.passed,
            Report::Tokens(r) => r.passed,
            Report::Spec(r) => r.valid,
            Report::Compliance(r) => r.overall_passed,
        }
    }
}

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &Report<'_>) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

