//! Import graph builder: specifier extraction, resolution, graph assembly.

pub mod error_tolerant;
pub mod extractor;
pub mod graph;
pub mod packages;
pub mod resolver;
pub mod types;

pub use extractor::extract_imports;
pub use graph::{ImportGraph, ImportGraphBuilder};
pub use packages::PackageResolver;
pub use resolver::{ImportResolver, Resolution};
pub use types::{ImportEdge, ImportForm, ParsedImports, RawImport, ResolvedKind, SourceFile};
