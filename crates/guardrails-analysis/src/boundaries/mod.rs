//! Boundary rule engine: layering, forbidden packages, package separation.

pub mod engine;
pub mod types;

use std::path::Path;

use guardrails_core::errors::{ConfigError, FileFinding};
use guardrails_core::GuardrailsConfig;

use crate::imports::{ImportGraphBuilder, ImportResolver, PackageResolver};
use crate::layers::LayerClassifier;
use crate::scanner::{read_sources, PathFilter, Scanner};

pub use engine::BoundaryRules;
pub use types::{BoundaryReport, BoundaryViolation, BoundaryViolationKind, LayerWarning};

/// Prepared inputs for one boundary run. Building it surfaces every
/// configuration problem before any file is read.
pub struct BoundaryCheck {
    classifier: LayerClassifier,
    rules: BoundaryRules,
    exempt: PathFilter,
    scanner: Scanner,
    resolver: ImportResolver,
    packages: PackageResolver,
    threads: usize,
}

impl BoundaryCheck {
    pub fn new(src_root: &Path, root: &Path, config: &GuardrailsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            classifier: LayerClassifier::from_config(&config.layers)?,
            rules: BoundaryRules::from_config(&config.boundaries),
            exempt: PathFilter::new("boundaries.exempt", &config.boundaries.effective_exempt())?,
            scanner: Scanner::new(src_root, &config.scan)?.with_project_root(root),
            resolver: ImportResolver::new(
                src_root,
                &config.boundaries.aliases,
                config.scan.effective_extensions(),
            ),
            packages: PackageResolver::new(root),
            threads: config.scan.effective_threads(),
        })
    }

    pub fn run(&self) -> BoundaryReport {
        let scan = self.scanner.scan(&self.exempt);
        let (sources, read_errors) = read_sources(&scan.files, self.threads);
        let graph = ImportGraphBuilder::new(&self.classifier, &self.resolver, &self.packages)
            .threads(self.threads)
            .build(&sources);

        let violations = self.rules.evaluate(&graph, self.threads);
        let warnings = engine::unclassified_warnings(&graph);

        let mut errors: Vec<FileFinding> = scan
            .errors
            .into_iter()
            .chain(read_errors)
            .chain(graph.errors)
            .collect();
        errors.sort();

        let report = BoundaryReport {
            passed: violations.is_empty(),
            violations,
            warnings,
            errors,
            files_scanned: scan.files.len(),
        };
        tracing::info!(
            files = report.files_scanned,
            violations = report.violations.len(),
            warnings = report.warnings.len(),
            errors = report.errors.len(),
            passed = report.passed,
            "boundary check complete"
        );
        report
    }
}
