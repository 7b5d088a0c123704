//! The engine's exported operations.
//!
//! Each `*_with` function takes its rule tables explicitly, so several
//! configurations can run side by side. The plain variants load the layered
//! configuration from the root directory first.

use std::path::{Path, PathBuf};

use guardrails_core::config::guardrails_config::ensure_root;
use guardrails_core::config::SpecConfig;
use guardrails_core::constants::DEFAULT_SRC_DIR;
use guardrails_core::errors::ConfigError;
use guardrails_core::GuardrailsConfig;

use crate::boundaries::{BoundaryCheck, BoundaryReport};
use crate::compliance::{run_compliance, ComplianceReport};
use crate::spec_artifacts::{validate_spec_dir, SpecValidationResult};
use crate::tokens::{TokenCheck, TokenReport};

/// Where to look: the component source directory and the project root.
/// A relative `src_dir` is resolved against `root_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOptions {
    pub src_dir: PathBuf,
    pub root_dir: PathBuf,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from(DEFAULT_SRC_DIR),
            root_dir: PathBuf::from("."),
        }
    }
}

impl VerifyOptions {
    pub fn new(src_dir: impl Into<PathBuf>, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            root_dir: root_dir.into(),
        }
    }

    /// Canonical `(root, src)` pair. Either one missing is fatal.
    pub fn resolve(&self) -> Result<(PathBuf, PathBuf), ConfigError> {
        let root = canonical_dir(&self.root_dir)?;
        let src = if self.src_dir.is_absolute() {
            self.src_dir.clone()
        } else {
            root.join(&self.src_dir)
        };
        let src = canonical_dir(&src)?;
        Ok((root, src))
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    ensure_root(path)?;
    path.canonicalize().map_err(|e| ConfigError::RootUnreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn verify_boundaries(options: &VerifyOptions) -> Result<BoundaryReport, ConfigError> {
    let config = GuardrailsConfig::load(&options.root_dir, None)?;
    verify_boundaries_with(options, &config)
}

pub fn verify_boundaries_with(
    options: &VerifyOptions,
    config: &GuardrailsConfig,
) -> Result<BoundaryReport, ConfigError> {
    let (root, src) = options.resolve()?;
    Ok(BoundaryCheck::new(&src, &root, config)?.run())
}

pub fn verify_design_tokens(options: &VerifyOptions) -> Result<TokenReport, ConfigError> {
    let config = GuardrailsConfig::load(&options.root_dir, None)?;
    verify_design_tokens_with(options, &config)
}

pub fn verify_design_tokens_with(
    options: &VerifyOptions,
    config: &GuardrailsConfig,
) -> Result<TokenReport, ConfigError> {
    let (root, src) = options.resolve()?;
    Ok(TokenCheck::new(&src, &root, config)?.run())
}

/// Validate a spec directory against the default required-file table.
pub fn validate_spec(spec_dir: &Path) -> SpecValidationResult {
    validate_spec_with(spec_dir, &SpecConfig::default())
}

pub fn validate_spec_with(spec_dir: &Path, config: &SpecConfig) -> SpecValidationResult {
    validate_spec_dir(spec_dir, config)
}

pub fn check_compliance(root_dir: &Path) -> Result<ComplianceReport, ConfigError> {
    let config = GuardrailsConfig::load(root_dir, None)?;
    check_compliance_with(root_dir, &config)
}

/// Run every check. The source directory comes from `compliance.src_dir`.
pub fn check_compliance_with(
    root_dir: &Path,
    config: &GuardrailsConfig,
) -> Result<ComplianceReport, ConfigError> {
    let options = VerifyOptions::new(config.compliance.effective_src_dir(), root_dir);
    let (root, src) = options.resolve()?;
    let report = run_compliance(&root, &src, config)?;
    tracing::info!(
        checks = report.checks.len(),
        overall_passed = report.overall_passed,
        "compliance report generated"
    );
    Ok(report)
}
