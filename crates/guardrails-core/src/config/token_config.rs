//! Design token rule configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for the design token rule engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenConfig {
    /// Raw structural tags that must be replaced by approved primitives.
    pub forbidden_elements: Option<Vec<String>>,
    /// Globs exempt from every token rule (docs, stories, tests).
    pub exempt: Option<Vec<String>>,
    /// Globs where raw elements are allowed; colour/pixel rules still apply.
    pub raw_elements_allowed: Option<Vec<String>>,
    /// Regexes for token-reference expressions that may wrap literals.
    pub token_patterns: Option<Vec<String>>,
}

impl TokenConfig {
    pub fn effective_forbidden_elements(&self) -> Vec<String> {
        self.forbidden_elements
            .clone()
            .unwrap_or_else(|| to_owned(DEFAULT_FORBIDDEN_ELEMENTS))
    }

    pub fn effective_exempt(&self) -> Vec<String> {
        self.exempt
            .clone()
            .unwrap_or_else(|| to_owned(DEFAULT_TOKEN_EXEMPT))
    }

    pub fn effective_raw_elements_allowed(&self) -> Vec<String> {
        self.raw_elements_allowed
            .clone()
            .unwrap_or_else(|| to_owned(&["**/primitives/**", "primitives/**"]))
    }

    pub fn effective_token_patterns(&self) -> Vec<String> {
        self.token_patterns
            .clone()
            .unwrap_or_else(|| to_owned(DEFAULT_TOKEN_PATTERNS))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        super::validate_globs("tokens.exempt", &self.effective_exempt())?;
        super::validate_globs(
            "tokens.raw_elements_allowed",
            &self.effective_raw_elements_allowed(),
        )
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const DEFAULT_FORBIDDEN_ELEMENTS: &[&str] = &[
    "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6", "button", "input", "textarea",
    "select", "a", "img", "ul", "ol", "li", "section", "header", "footer", "nav", "main",
    "article", "aside", "label", "form", "table",
];

const DEFAULT_TOKEN_EXEMPT: &[&str] = &[
    "**/*.stories.*",
    "**/*.mdx",
    "**/*.test.*",
    "**/*.spec.*",
    "**/__tests__/**",
    "**/docs/**",
    "docs/**",
];

const DEFAULT_TOKEN_PATTERNS: &[&str] = &[
    r"var\(--[^)]*\)",
    r"\btoken\([^)]*\)",
    r"\btokens?(?:\.[A-Za-z_$][\w$-]*|\[[^\]]*\])+",
    r"\btheme(?:\.[A-Za-z_$][\w$-]*|\[[^\]]*\])+",
    r"\btheme\([^)]*\)",
];
