//! Directory-name based layer assignment.

use guardrails_core::config::LayerConfig;
use guardrails_core::errors::ConfigError;
use guardrails_core::types::collections::FxHashSet;

use super::table::{Layer, LayerTable};

/// Result of classifying one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub layer: Layer,
    /// Foundation only because nothing else matched: the path has directory
    /// segments but none names a layer or a known foundation directory.
    pub unclassified: bool,
}

/// Maps source-root relative paths to layers.
#[derive(Debug, Clone)]
pub struct LayerClassifier {
    table: LayerTable,
    foundation_dirs: FxHashSet<String>,
}

impl LayerClassifier {
    pub fn new(table: LayerTable, foundation_dirs: &[String]) -> Self {
        Self {
            table,
            foundation_dirs: foundation_dirs.iter().cloned().collect(),
        }
    }

    pub fn from_config(config: &LayerConfig) -> Result<Self, ConfigError> {
        let table = LayerTable::new(config.effective_definitions())?;
        Ok(Self::new(table, &config.effective_foundation_dirs()))
    }

    /// The first directory segment, walking from the root, that names a
    /// layer decides. The file name itself never does.
    pub fn classify(&self, relative_path: &str) -> Classification {
        let mut segments: Vec<&str> = relative_path.split('/').filter(|s| !s.is_empty()).collect();
        segments.pop();

        if let Some(def) = segments.iter().find_map(|s| self.table.get(s)) {
            return Classification {
                layer: Layer::Leveled(def.clone()),
                unclassified: false,
            };
        }

        let known_foundation = segments.iter().any(|s| self.foundation_dirs.contains(*s));
        Classification {
            layer: Layer::Foundation,
            unclassified: !segments.is_empty() && !known_foundation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LayerClassifier {
        LayerClassifier::from_config(&LayerConfig::default()).unwrap()
    }

    #[test]
    fn first_layer_segment_wins() {
        let c = classifier();
        assert_eq!(c.classify("primitives/Button.tsx").layer.name(), "primitives");
        assert_eq!(c.classify("pages/settings/composed/Row.tsx").layer.name(), "pages");
        assert_eq!(c.classify("packages/ui/blocks/Table.tsx").layer.level(), Some(2));
    }

    #[test]
    fn file_name_does_not_classify() {
        let c = classifier();
        let result = c.classify("primitives.ts");
        assert!(result.layer.is_foundation());
        assert!(!result.unclassified);
    }

    #[test]
    fn foundation_dirs_are_not_flagged() {
        let c = classifier();
        let result = c.classify("hooks/useToggle.ts");
        assert!(result.layer.is_foundation());
        assert!(!result.unclassified);
    }

    #[test]
    fn unknown_dirs_are_flagged() {
        let c = classifier();
        let result = c.classify("experimental/Widget.tsx");
        assert!(result.layer.is_foundation());
        assert!(result.unclassified);
    }
}
