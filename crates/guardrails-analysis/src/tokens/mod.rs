//! Design token rule engine: raw elements and literal styling values.

pub mod rules;
pub mod types;

use std::path::Path;

use rayon::prelude::*;

use guardrails_core::errors::{ConfigError, FileFinding};
use guardrails_core::GuardrailsConfig;

use crate::scanner::{pool, read_sources, PathFilter, Scanner};

pub use rules::TokenRules;
pub use types::{DesignTokenViolation, TokenReport, TokenViolationKind};

/// Prepared inputs for one token run.
pub struct TokenCheck {
    rules: TokenRules,
    exempt: PathFilter,
    scanner: Scanner,
    threads: usize,
}

impl TokenCheck {
    pub fn new(src_root: &Path, root: &Path, config: &GuardrailsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: TokenRules::compile(&config.tokens)?,
            exempt: PathFilter::new("tokens.exempt", &config.tokens.effective_exempt())?,
            scanner: Scanner::new(src_root, &config.scan)?.with_project_root(root),
            threads: config.scan.effective_threads(),
        })
    }

    pub fn run(&self) -> TokenReport {
        let scan = self.scanner.scan(&self.exempt);
        let (sources, read_errors) = read_sources(&scan.files, self.threads);

        let mut violations: Vec<DesignTokenViolation> = pool::install(self.threads, || {
            sources
                .par_iter()
                .flat_map_iter(|s| self.rules.scan_file(&s.file.relative_path, &s.text))
                .collect()
        });
        violations.sort_by(|a, b| {
            (&a.file, a.kind, a.line, a.column).cmp(&(&b.file, b.kind, b.line, b.column))
        });

        let mut errors: Vec<FileFinding> = scan.errors.into_iter().chain(read_errors).collect();
        errors.sort();

        let report = TokenReport {
            passed: violations.is_empty(),
            violations,
            errors,
            files_scanned: scan.files.len(),
            files_exempt: scan.exempt,
        };
        tracing::info!(
            files = report.files_scanned,
            exempt = report.files_exempt,
            violations = report.violations.len(),
            errors = report.errors.len(),
            passed = report.passed,
            "design token check complete"
        );
        report
    }
}
