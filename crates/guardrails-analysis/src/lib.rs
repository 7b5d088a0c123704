//! guardrails-analysis: the Guardrails compliance engine.
//!
//! Stages, leaves first:
//! - Scanner: candidate file discovery with exclusion and exemption filters
//! - Imports: tree-sitter import extraction and relative/alias resolution
//! - Layers: directory-convention layer classification
//! - Boundaries: upward-layer, forbidden-package and cross-package rules
//! - Tokens: raw element, inline colour and inline pixel detection
//! - Spec artifacts: per-component spec directory validation
//! - Compliance: project-level checks aggregated into one report
//!
//! Every stage is a pure function of its input; results are sorted into a
//! canonical order so parallel scheduling never changes output.

pub mod api;
pub mod boundaries;
pub mod compliance;
pub mod imports;
pub mod layers;
pub mod reporters;
pub mod scanner;
pub mod spec_artifacts;
pub mod tokens;

pub use api::{
    check_compliance, check_compliance_with, validate_spec, validate_spec_with,
    verify_boundaries, verify_boundaries_with, verify_design_tokens, verify_design_tokens_with,
    VerifyOptions,
};
pub use boundaries::{BoundaryReport, BoundaryViolation, BoundaryViolationKind, LayerWarning};
pub use compliance::{CheckId, CheckStatus, ComplianceCheck, ComplianceReport, Finding};
pub use layers::{Layer, LayerClassifier, LayerTable};
pub use reporters::{create_reporter, Report, Reporter};
pub use spec_artifacts::{SpecFinding, SpecValidationResult};
pub use tokens::{DesignTokenViolation, TokenReport, TokenViolationKind};
