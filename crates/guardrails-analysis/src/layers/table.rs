//! The ordered layer table with O(1) lookups by value and by level.

use serde::{Serialize, Serializer};

use guardrails_core::config::layer_config::validate_layer_table;
use guardrails_core::config::LayerDefinition;
use guardrails_core::constants::FOUNDATION_LAYER;
use guardrails_core::errors::ConfigError;
use guardrails_core::types::collections::FxHashMap;

/// A validated, immutable layer table.
#[derive(Debug, Clone)]
pub struct LayerTable {
    definitions: Vec<LayerDefinition>,
    by_value: FxHashMap<String, usize>,
    by_level: FxHashMap<u32, usize>,
}

impl LayerTable {
    pub fn new(definitions: Vec<LayerDefinition>) -> Result<Self, ConfigError> {
        validate_layer_table(&definitions)?;
        let by_value = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.value.clone(), i))
            .collect();
        let by_level = definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (d.level, i))
            .collect();
        Ok(Self {
            definitions,
            by_value,
            by_level,
        })
    }

    pub fn get(&self, value: &str) -> Option<&LayerDefinition> {
        self.by_value.get(value).map(|&i| &self.definitions[i])
    }

    pub fn by_level(&self, level: u32) -> Option<&LayerDefinition> {
        self.by_level.get(&level).map(|&i| &self.definitions[i])
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// The layer a file belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Shared code with no level. Sits below level 0 and may not import
    /// any leveled code.
    Foundation,
    Leveled(LayerDefinition),
}

impl Layer {
    /// `None` for foundation; `None < Some(0)` keeps it below every level.
    pub fn level(&self) -> Option<u32> {
        match self {
            Layer::Foundation => None,
            Layer::Leveled(def) => Some(def.level),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Layer::Foundation => FOUNDATION_LAYER,
            Layer::Leveled(def) => &def.value,
        }
    }

    pub fn is_foundation(&self) -> bool {
        matches!(self, Layer::Foundation)
    }

    /// `layer 2 (blocks)` or `foundation`.
    pub fn describe(&self) -> String {
        match self {
            Layer::Foundation => FOUNDATION_LAYER.to_string(),
            Layer::Leveled(def) => format!("layer {} ({})", def.level, def.value),
        }
    }
}

impl Serialize for Layer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
