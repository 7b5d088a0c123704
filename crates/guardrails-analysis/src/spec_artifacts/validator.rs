//! Spec directory validation.

use std::path::Path;

use guardrails_core::config::{SpecConfig, SpecFileRule};
use guardrails_core::errors::SpecError;

use super::structure::SpecDocument;
use super::types::{SpecFinding, SpecValidationResult};

pub const MISSING_REQUIRED: &str = "Required spec file missing";
pub const MISSING_RECOMMENDED: &str = "Recommended spec file missing";

/// Validate one component's spec directory against the required-file table.
/// Never fails: every problem is a finding in the result.
pub fn validate_spec_dir(spec_dir: &Path, config: &SpecConfig) -> SpecValidationResult {
    let component_name = spec_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| spec_dir.display().to_string());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let missing = if !spec_dir.exists() {
        Some(SpecError::DirectoryNotFound {
            path: spec_dir.to_path_buf(),
        })
    } else if !spec_dir.is_dir() {
        Some(SpecError::NotADirectory {
            path: spec_dir.to_path_buf(),
        })
    } else {
        None
    };

    if let Some(e) = missing {
        errors.push(SpecFinding::file(spec_dir.display().to_string(), e.to_string()));
    } else {
        for rule in config.effective_required_files() {
            check_rule(spec_dir, &rule, &mut errors, &mut warnings);
        }
    }

    tracing::debug!(
        component = %component_name,
        errors = errors.len(),
        warnings = warnings.len(),
        "spec validated"
    );

    SpecValidationResult {
        component_name,
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_rule(
    spec_dir: &Path,
    rule: &SpecFileRule,
    errors: &mut Vec<SpecFinding>,
    warnings: &mut Vec<SpecFinding>,
) {
    let Some(file_name) = rule
        .file_names
        .iter()
        .find(|name| spec_dir.join(name).is_file())
    else {
        if rule.required {
            errors.push(SpecFinding::file(&rule.id, MISSING_REQUIRED));
        } else {
            warnings.push(SpecFinding::file(&rule.id, MISSING_RECOMMENDED));
        }
        return;
    };

    let text = match std::fs::read_to_string(spec_dir.join(file_name)) {
        Ok(text) => text,
        Err(e) => {
            errors.push(SpecFinding::file(file_name, format!("Unreadable spec file: {e}")));
            return;
        }
    };

    let document = match SpecDocument::parse(file_name, &text) {
        Ok(doc) => doc,
        Err(message) => {
            // A malformed optional file cannot fail the spec.
            if rule.required {
                errors.push(SpecFinding::file(file_name, message));
            } else {
                warnings.push(SpecFinding::file(file_name, message));
            }
            return;
        }
    };

    for key in &rule.required_keys {
        if !document.has(key) {
            errors.push(SpecFinding::field(
                file_name,
                format!("Missing required {} '{key}'", document.noun()),
                key,
            ));
        }
    }
    for key in &rule.recommended_keys {
        if !document.has(key) {
            warnings.push(SpecFinding::field(
                file_name,
                format!("Missing recommended {} '{key}'", document.noun()),
                key,
            ));
        }
    }
}
