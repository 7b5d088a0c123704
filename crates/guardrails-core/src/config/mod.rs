//! Configuration system for Guardrails.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.
//!
//! The rule tables (layers, forbidden imports, forbidden elements, spec
//! files) live here as plain data so callers can re-target the engine
//! without code changes.

pub mod boundary_config;
pub mod compliance_config;
pub mod guardrails_config;
pub mod layer_config;
pub mod scan_config;
pub mod spec_config;
pub mod token_config;

pub use boundary_config::{BoundaryConfig, CrossPackageRule, ForbiddenImport, MatchKind};
pub use compliance_config::ComplianceConfig;
pub use guardrails_config::{CliOverrides, GuardrailsConfig};
pub use layer_config::{LayerConfig, LayerDefinition};
pub use scan_config::ScanConfig;
pub use spec_config::{SpecConfig, SpecFileRule};
pub use token_config::TokenConfig;

use crate::errors::ConfigError;

/// Validate every glob in `patterns`, naming `field` on failure.
pub(crate) fn validate_globs(field: &str, patterns: &[String]) -> Result<(), ConfigError> {
    for pattern in patterns {
        globset::Glob::new(pattern).map_err(|e| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("invalid glob '{pattern}': {e}"),
        })?;
    }
    Ok(())
}
