//! Boundary rule configuration: forbidden packages, cross-package pairs,
//! exemptions and path aliases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How a forbidden-import pattern is compared with a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The package itself or any of its subpaths (`pkg`, `pkg/sub`).
    #[default]
    Exact,
    /// Any specifier starting with the pattern.
    Prefix,
}

/// A package callers must not import, with the replacement guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenImport {
    pub pattern: String,
    #[serde(default, rename = "match")]
    pub match_kind: MatchKind,
    pub message: String,
}

impl ForbiddenImport {
    pub fn exact(pattern: &str, message: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            match_kind: MatchKind::Exact,
            message: message.to_string(),
        }
    }

    pub fn prefix(pattern: &str, message: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            match_kind: MatchKind::Prefix,
            message: message.to_string(),
        }
    }

    /// Returns true if `specifier` is covered by this entry.
    pub fn matches(&self, specifier: &str) -> bool {
        match self.match_kind {
            MatchKind::Prefix => specifier.starts_with(&self.pattern),
            MatchKind::Exact => {
                specifier == self.pattern
                    || specifier
                        .strip_prefix(&self.pattern)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Package `from` may not import from package `to`, regardless of layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossPackageRule {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Configuration for the boundary rule engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoundaryConfig {
    pub forbidden_imports: Option<Vec<ForbiddenImport>>,
    pub cross_package: Vec<CrossPackageRule>,
    /// Globs removed from the boundary scan (stories, tests, root barrel).
    pub exempt: Option<Vec<String>>,
    /// Specifier prefix → directory relative to the source root.
    pub aliases: BTreeMap<String, String>,
}

impl BoundaryConfig {
    pub fn effective_forbidden_imports(&self) -> Vec<ForbiddenImport> {
        self.forbidden_imports
            .clone()
            .unwrap_or_else(default_forbidden_imports)
    }

    pub fn effective_exempt(&self) -> Vec<String> {
        self.exempt.clone().unwrap_or_else(|| {
            DEFAULT_BOUNDARY_EXEMPT.iter().map(|g| g.to_string()).collect()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in self.effective_forbidden_imports() {
            if entry.pattern.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "boundaries.forbidden_imports".to_string(),
                    message: "pattern must not be empty".to_string(),
                });
            }
        }
        for rule in &self.cross_package {
            if rule.from.is_empty() || rule.to.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "boundaries.cross_package".to_string(),
                    message: "both 'from' and 'to' are required".to_string(),
                });
            }
        }
        super::validate_globs("boundaries.exempt", &self.effective_exempt())
    }
}

const DEFAULT_BOUNDARY_EXEMPT: &[&str] = &[
    "**/*.stories.*",
    "**/*.test.*",
    "**/*.spec.*",
    "**/__tests__/**",
    "index.ts",
    "index.tsx",
];

/// The default forbidden-import table.
pub fn default_forbidden_imports() -> Vec<ForbiddenImport> {
    vec![
        ForbiddenImport::exact(
            "@guardrails/design-system",
            "Import the wrapped primitive from the primitives layer instead of the raw design-system package",
        ),
        ForbiddenImport::prefix(
            "@radix-ui/",
            "Wrap Radix behaviour in a primitive; components must not import @radix-ui directly",
        ),
        ForbiddenImport::exact(
            "styled-components",
            "Style with design tokens through the theme layer instead of styled-components",
        ),
    ]
}
