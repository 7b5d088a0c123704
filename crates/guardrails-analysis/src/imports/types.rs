//! Import graph data types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use guardrails_core::errors::ParseError;

use crate::layers::Layer;

/// Syntactic construct an import was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportForm {
    /// `import … from 'x'`, `import 'x'`, `import x = require('x')`.
    Import,
    /// `export … from 'x'`.
    ReExport,
    /// `import('x')`.
    Dynamic,
    /// `require('x')`.
    Require,
}

/// A specifier as written in the source, with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImport {
    pub specifier: String,
    pub line: u32,
    pub form: ImportForm,
}

/// Extraction output for one file.
#[derive(Debug, Default)]
pub struct ParsedImports {
    pub imports: Vec<RawImport>,
    /// Set when the tree contained ERROR or MISSING nodes. The imports
    /// outside the damaged region are still present in `imports`.
    pub syntax_error: Option<ParseError>,
}

/// A scanned file with its layer, owning package and imports.
/// Built once per scan and only read afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub layer: Layer,
    pub package_name: Option<String>,
    pub imports: Vec<RawImport>,
    /// Foundation by fallback rather than by a known foundation directory.
    #[serde(skip)]
    pub unclassified: bool,
}

/// How an import's target was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolvedKind {
    RelativeLayered,
    RelativeFoundation,
    ExternalPackage,
}

/// One import of one file, resolved against the scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEdge {
    pub from_file: String,
    pub raw_specifier: String,
    pub line: u32,
    pub resolved_kind: ResolvedKind,
    /// Target path relative to the source root, for local targets inside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_layer: Option<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_package: Option<String>,
}
