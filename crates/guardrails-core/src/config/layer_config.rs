//! Layer table configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::collections::FxHashSet;

/// One tier of the component architecture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerDefinition {
    /// Directory name that marks the layer (e.g. "primitives"). Unique.
    pub value: String,
    pub label: String,
    /// Composition order: 0 is the most primitive. Unique, strictly increasing.
    pub level: u32,
    #[serde(default)]
    pub description: String,
}

impl LayerDefinition {
    pub fn new(value: &str, label: &str, level: u32, description: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            level,
            description: description.to_string(),
        }
    }
}

/// Configuration for the layer classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayerConfig {
    /// Ordered layer table. Default: primitives → pages.
    pub definitions: Option<Vec<LayerDefinition>>,
    /// Directory names that mark shared/infra code.
    pub foundation_dirs: Option<Vec<String>>,
}

impl LayerConfig {
    pub fn effective_definitions(&self) -> Vec<LayerDefinition> {
        self.definitions.clone().unwrap_or_else(default_layers)
    }

    pub fn effective_foundation_dirs(&self) -> Vec<String> {
        self.foundation_dirs.clone().unwrap_or_else(|| {
            DEFAULT_FOUNDATION_DIRS.iter().map(|d| d.to_string()).collect()
        })
    }

    /// Check the table invariants: unique values, levels strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_layer_table(&self.effective_definitions())
    }
}

/// Validate a layer table in declaration order.
pub fn validate_layer_table(definitions: &[LayerDefinition]) -> Result<(), ConfigError> {
    let mut values = FxHashSet::default();
    let mut previous: Option<u32> = None;
    for def in definitions {
        if def.value.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "layers.definitions".to_string(),
                message: format!("layer at level {} has an empty value", def.level),
            });
        }
        if !values.insert(def.value.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "layers.definitions".to_string(),
                message: format!("duplicate layer value '{}'", def.value),
            });
        }
        if let Some(prev) = previous {
            if def.level <= prev {
                return Err(ConfigError::ValidationFailed {
                    field: "layers.definitions".to_string(),
                    message: format!(
                        "layer '{}' has level {} but levels must strictly increase (previous {})",
                        def.value, def.level, prev
                    ),
                });
            }
        }
        previous = Some(def.level);
    }
    Ok(())
}

const DEFAULT_FOUNDATION_DIRS: &[&str] = &[
    "lib",
    "utils",
    "hooks",
    "theme",
    "tokens",
    "types",
    "styles",
    "providers",
    "internal",
];

/// The default six-tier component architecture.
pub fn default_layers() -> Vec<LayerDefinition> {
    vec![
        LayerDefinition::new(
            "primitives",
            "Primitives",
            0,
            "Atomic building blocks that wrap raw elements and design tokens",
        ),
        LayerDefinition::new(
            "composed",
            "Composed",
            1,
            "Small compositions of primitives",
        ),
        LayerDefinition::new(
            "blocks",
            "Blocks",
            2,
            "Self-contained feature blocks built from composed components",
        ),
        LayerDefinition::new(
            "patterns",
            "Patterns",
            3,
            "Reusable interaction patterns spanning several blocks",
        ),
        LayerDefinition::new(
            "shells",
            "Shells",
            4,
            "Application frames: navigation, layout chrome",
        ),
        LayerDefinition::new("pages", "Pages", 5, "Full page compositions"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        assert!(validate_layer_table(&default_layers()).is_ok());
    }

    #[test]
    fn rejects_duplicate_value() {
        let table = vec![
            LayerDefinition::new("a", "A", 0, ""),
            LayerDefinition::new("a", "A again", 1, ""),
        ];
        assert!(matches!(
            validate_layer_table(&table),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn rejects_non_increasing_levels() {
        let table = vec![
            LayerDefinition::new("a", "A", 1, ""),
            LayerDefinition::new("b", "B", 1, ""),
        ];
        assert!(validate_layer_table(&table).is_err());

        let table = vec![
            LayerDefinition::new("a", "A", 2, ""),
            LayerDefinition::new("b", "B", 1, ""),
        ];
        assert!(validate_layer_table(&table).is_err());
    }
}
