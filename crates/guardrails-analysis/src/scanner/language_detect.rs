//! Source language detection from file extension.

use serde::{Deserialize, Serialize};

/// Languages the import extractor has a grammar for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    TypeScript,
    Tsx,
    JavaScript,
}

impl SourceLanguage {
    /// Detect language from a file extension string.
    pub fn from_extension(ext: Option<&str>) -> Option<SourceLanguage> {
        match ext? {
            "ts" | "mts" | "cts" => Some(SourceLanguage::TypeScript),
            "tsx" => Some(SourceLanguage::Tsx),
            "js" | "jsx" | "mjs" | "cjs" => Some(SourceLanguage::JavaScript),
            _ => None,
        }
    }

    /// Detect language from a path.
    pub fn from_path(path: &str) -> Option<SourceLanguage> {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext);
        Self::from_extension(ext)
    }

    /// Returns the tree-sitter grammar for this language.
    pub fn ts_language(&self) -> tree_sitter::Language {
        match self {
            SourceLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            // The JavaScript grammar parses JSX natively.
            SourceLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceLanguage::TypeScript => "TypeScript",
            SourceLanguage::Tsx => "TSX",
            SourceLanguage::JavaScript => "JavaScript",
        }
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(SourceLanguage::from_path("a/Button.tsx"), Some(SourceLanguage::Tsx));
        assert_eq!(SourceLanguage::from_path("a/types.d.ts"), Some(SourceLanguage::TypeScript));
        assert_eq!(SourceLanguage::from_path("legacy.jsx"), Some(SourceLanguage::JavaScript));
        assert_eq!(SourceLanguage::from_path("styles.css"), None);
        assert_eq!(SourceLanguage::from_path("Makefile"), None);
    }
}
