//! Import graph assembly: classify files, extract imports, resolve edges.

use rayon::prelude::*;

use guardrails_core::errors::{FileFinding, ParseError};

use super::extractor::extract_imports;
use super::packages::PackageResolver;
use super::resolver::{ImportResolver, Resolution};
use super::types::{ImportEdge, ResolvedKind, SourceFile};
use crate::layers::{Layer, LayerClassifier};
use crate::scanner::pool;
use crate::scanner::{SourceLanguage, SourceText};

/// All files of one scan and every import edge between them.
#[derive(Debug, Default)]
pub struct ImportGraph {
    pub files: Vec<SourceFile>,
    pub edges: Vec<ImportEdge>,
    pub errors: Vec<FileFinding>,
}

impl ImportGraph {
    pub fn file(&self, relative_path: &str) -> Option<&SourceFile> {
        self.files
            .binary_search_by(|f| f.relative_path.as_str().cmp(relative_path))
            .ok()
            .map(|i| &self.files[i])
    }
}

/// Builds an `ImportGraph` from already-read sources.
pub struct ImportGraphBuilder<'a> {
    classifier: &'a LayerClassifier,
    resolver: &'a ImportResolver,
    packages: &'a PackageResolver,
    threads: usize,
}

impl<'a> ImportGraphBuilder<'a> {
    pub fn new(
        classifier: &'a LayerClassifier,
        resolver: &'a ImportResolver,
        packages: &'a PackageResolver,
    ) -> Self {
        Self {
            classifier,
            resolver,
            packages,
            threads: 0,
        }
    }

    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(&self, sources: &[SourceText]) -> ImportGraph {
        let per_file: Vec<(SourceFile, Option<FileFinding>)> = pool::install(self.threads, || {
            sources.par_iter().map(|s| self.source_file(s)).collect()
        });

        let mut files = Vec::with_capacity(per_file.len());
        let mut errors = Vec::new();
        for (file, finding) in per_file {
            files.push(file);
            errors.extend(finding);
        }
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        let mut edges: Vec<ImportEdge> = pool::install(self.threads, || {
            files.par_iter().flat_map_iter(|f| self.edges_of(f)).collect()
        });
        edges.sort_by(|a, b| {
            (&a.from_file, a.line, &a.raw_specifier).cmp(&(&b.from_file, b.line, &b.raw_specifier))
        });
        errors.sort();

        tracing::debug!(
            files = files.len(),
            edges = edges.len(),
            errors = errors.len(),
            "import graph built"
        );

        ImportGraph {
            files,
            edges,
            errors,
        }
    }

    fn source_file(&self, source: &SourceText) -> (SourceFile, Option<FileFinding>) {
        let relative = &source.file.relative_path;
        let classification = self.classifier.classify(relative);

        let (imports, finding) = match SourceLanguage::from_path(relative) {
            Some(language) => match extract_imports(&source.text, &source.file.path, language) {
                Ok(parsed) => (
                    parsed.imports,
                    parsed.syntax_error.map(|e| FileFinding::new(relative.clone(), e)),
                ),
                Err(e) => (Vec::new(), Some(FileFinding::new(relative.clone(), e))),
            },
            None => {
                let extension = relative.rsplit_once('.').map_or("", |(_, e)| e).to_string();
                (
                    Vec::new(),
                    Some(FileFinding::new(
                        relative.clone(),
                        ParseError::UnsupportedLanguage { extension },
                    )),
                )
            }
        };

        let file = SourceFile {
            path: source.file.path.clone(),
            relative_path: relative.clone(),
            layer: classification.layer,
            package_name: self.packages.package_of(&source.file.path),
            imports,
            unclassified: classification.unclassified,
        };
        (file, finding)
    }

    fn edges_of<'f>(&'f self, file: &'f SourceFile) -> impl Iterator<Item = ImportEdge> + 'f {
        file.imports.iter().map(move |import| {
            let mut edge = ImportEdge {
                from_file: file.relative_path.clone(),
                raw_specifier: import.specifier.clone(),
                line: import.line,
                resolved_kind: ResolvedKind::ExternalPackage,
                target_path: None,
                target_layer: None,
                target_package: None,
            };
            match self.resolver.resolve(&file.relative_path, &import.specifier) {
                Resolution::External { package } => {
                    edge.target_package = Some(package);
                }
                Resolution::Local { relative_path, .. } => {
                    let layer = self.classifier.classify(&relative_path).layer;
                    edge.resolved_kind = kind_for(&layer);
                    edge.target_package = self
                        .packages
                        .package_of(&self.resolver.src_root().join(&relative_path));
                    edge.target_layer = Some(layer);
                    edge.target_path = Some(relative_path);
                }
                Resolution::OutsideRoot { path } => {
                    edge.resolved_kind = ResolvedKind::RelativeFoundation;
                    edge.target_layer = Some(Layer::Foundation);
                    edge.target_package = self.packages.package_of(&path);
                }
            }
            edge
        })
    }
}

fn kind_for(layer: &Layer) -> ResolvedKind {
    match layer {
        Layer::Foundation => ResolvedKind::RelativeFoundation,
        Layer::Leveled(_) => ResolvedKind::RelativeLayered,
    }
}
