//! Spec artifact configuration: the required-file table.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::collections::FxHashSet;

/// One artifact a component's spec directory must (or should) contain.
///
/// Structure is checked by extension: `.json`, `.yaml`/`.yml` are parsed and
/// checked for top-level keys, `.md` is checked for headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecFileRule {
    /// Logical name reported in findings (e.g. "api-contract").
    pub id: String,
    /// Accepted file names, first existing one wins.
    pub file_names: Vec<String>,
    /// Missing required files are errors; missing optional files are warnings.
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default)]
    pub required_keys: Vec<String>,
    #[serde(default)]
    pub recommended_keys: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Configuration for the spec artifact validator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpecConfig {
    pub required_files: Option<Vec<SpecFileRule>>,
}

impl SpecConfig {
    pub fn effective_required_files(&self) -> Vec<SpecFileRule> {
        self.required_files.clone().unwrap_or_else(default_spec_files)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = FxHashSet::default();
        for rule in self.effective_required_files() {
            if rule.file_names.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "spec.required_files".to_string(),
                    message: format!("'{}' lists no file names", rule.id),
                });
            }
            if !ids.insert(rule.id.clone()) {
                return Err(ConfigError::ValidationFailed {
                    field: "spec.required_files".to_string(),
                    message: format!("duplicate spec file id '{}'", rule.id),
                });
            }
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The default required-file table.
pub fn default_spec_files() -> Vec<SpecFileRule> {
    vec![
        SpecFileRule {
            id: "api-contract".to_string(),
            file_names: strings(&["api-contract.json", "api-contract.yaml", "api-contract.yml"]),
            required: true,
            required_keys: strings(&["component", "props"]),
            recommended_keys: strings(&["description", "accessibility"]),
        },
        SpecFileRule {
            id: "states".to_string(),
            file_names: strings(&["states.md"]),
            required: true,
            required_keys: strings(&["States"]),
            recommended_keys: strings(&["Interactions"]),
        },
        SpecFileRule {
            id: "tokens".to_string(),
            file_names: strings(&["tokens.json"]),
            required: false,
            required_keys: Vec::new(),
            recommended_keys: Vec::new(),
        },
    ]
}
