//! Path predicates built from glob lists.

use globset::{Glob, GlobSet, GlobSetBuilder};

use guardrails_core::errors::ConfigError;

/// A compiled glob list matched against root-relative, `/`-separated paths.
///
/// Used both for exemption (stories, docs, tests) and for allow-lists; the
/// scanner composes it as a predicate so rule engines stay pure.
#[derive(Debug, Clone)]
pub struct PathFilter {
    set: GlobSet,
    patterns: Vec<String>,
}

impl PathFilter {
    pub fn new(field: &str, patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("invalid glob '{pattern}': {e}"),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| ConfigError::ValidationFailed {
            field: field.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            set,
            patterns: patterns.to_vec(),
        })
    }

    /// A filter that matches nothing.
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }

    pub fn is_match(&self, relative_path: &str) -> bool {
        !self.set.is_empty() && self.set.is_match(relative_path)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
