//! Scanner subsystem: candidate discovery, exclusion, exemption, reading.
//!
//! The scanner is the entry point to every check. It walks a source root,
//! skips dependency caches and build output, keeps component file types,
//! and hands back a path-sorted candidate list. Exemption globs are applied
//! here as a predicate so rule engines never see exempt files.

pub mod filter;
pub mod ignores;
pub mod language_detect;
pub mod pool;
pub mod source;
pub mod types;
pub mod walker;

pub use filter::PathFilter;
pub use ignores::IgnorePatterns;
pub use language_detect::SourceLanguage;
pub use source::{read_sources, SourceText};
pub use types::{ScanResult, ScannedFile};
pub use walker::Scanner;
