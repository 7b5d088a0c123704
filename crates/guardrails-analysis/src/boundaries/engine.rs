//! Per-edge boundary rule evaluation.
//!
//! Rules run in a fixed order and the first match wins, so one import never
//! yields more than one violation.

use rayon::prelude::*;

use guardrails_core::config::{BoundaryConfig, CrossPackageRule, ForbiddenImport};

use super::types::{BoundaryViolation, BoundaryViolationKind, LayerWarning, UNCLASSIFIED_FILE};
use crate::imports::{ImportEdge, ImportGraph, ResolvedKind, SourceFile};
use crate::layers::Layer;
use crate::scanner::pool;

/// The forbidden-package and cross-package tables.
#[derive(Debug, Clone, Default)]
pub struct BoundaryRules {
    pub forbidden: Vec<ForbiddenImport>,
    pub cross_package: Vec<CrossPackageRule>,
}

impl BoundaryRules {
    pub fn from_config(config: &BoundaryConfig) -> Self {
        Self {
            forbidden: config.effective_forbidden_imports(),
            cross_package: config.cross_package.clone(),
        }
    }

    /// Evaluate every edge of the graph. Output is sorted by file, then
    /// specifier, then line.
    pub fn evaluate(&self, graph: &ImportGraph, threads: usize) -> Vec<BoundaryViolation> {
        let mut violations: Vec<BoundaryViolation> = pool::install(threads, || {
            graph
                .edges
                .par_iter()
                .filter_map(|edge| {
                    let source = graph.file(&edge.from_file)?;
                    self.check_edge(source, edge)
                })
                .collect()
        });
        violations.sort_by(|a, b| {
            (&a.file, &a.imported_specifier, a.line, a.kind)
                .cmp(&(&b.file, &b.imported_specifier, b.line, b.kind))
        });
        violations
    }

    pub fn check_edge(&self, source: &SourceFile, edge: &ImportEdge) -> Option<BoundaryViolation> {
        let violation = |kind, message| BoundaryViolation {
            file: edge.from_file.clone(),
            imported_specifier: edge.raw_specifier.clone(),
            kind,
            message,
            line: edge.line,
        };

        if let Some(entry) = self.forbidden.iter().find(|f| f.matches(&edge.raw_specifier)) {
            return Some(violation(
                BoundaryViolationKind::ForbiddenPackageImport,
                entry.message.clone(),
            ));
        }

        if edge.resolved_kind != ResolvedKind::ExternalPackage {
            if let Some(target) = &edge.target_layer {
                if target.level() > source.layer.level() {
                    return Some(violation(
                        BoundaryViolationKind::UpwardLayerImport,
                        upward_message(&source.layer, target),
                    ));
                }
            }
        }

        let from = source.package_name.as_deref()?;
        let to = edge.target_package.as_deref()?;
        if from == to {
            return None;
        }
        let rule = self
            .cross_package
            .iter()
            .find(|r| r.from == from && r.to == to)?;
        let message = rule
            .message
            .clone()
            .unwrap_or_else(|| format!("package '{from}' must not import from package '{to}'"));
        Some(violation(BoundaryViolationKind::CrossBoundary, message))
    }
}

fn upward_message(source: &Layer, target: &Layer) -> String {
    match (source, target) {
        (Layer::Leveled(s), Layer::Leveled(t)) => format!(
            "file in layer {} ({}) must not depend on layer {} ({}) > {}; layers compose upward only",
            s.level, s.value, t.level, t.value, s.level
        ),
        _ => format!(
            "foundation file must not depend on {}; foundation code sits below every layer",
            target.describe()
        ),
    }
}

/// One warning per file that landed in foundation by fallback.
pub fn unclassified_warnings(graph: &ImportGraph) -> Vec<LayerWarning> {
    graph
        .files
        .iter()
        .filter(|f| f.unclassified)
        .map(|f| LayerWarning {
            file: f.relative_path.clone(),
            code: UNCLASSIFIED_FILE.to_string(),
            message: "no layer or foundation directory in path; treated as foundation".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use guardrails_core::config::LayerDefinition;
    use std::path::PathBuf;

    fn leveled(value: &str, level: u32) -> Layer {
        Layer::Leveled(LayerDefinition::new(value, value, level, ""))
    }

    fn file(rel: &str, layer: Layer, package: Option<&str>) -> SourceFile {
        SourceFile {
            path: PathBuf::from(rel),
            relative_path: rel.to_string(),
            layer,
            package_name: package.map(str::to_string),
            imports: Vec::new(),
            unclassified: false,
        }
    }

    fn edge(from: &str, spec: &str, kind: ResolvedKind, target: Option<Layer>, pkg: Option<&str>) -> ImportEdge {
        ImportEdge {
            from_file: from.to_string(),
            raw_specifier: spec.to_string(),
            line: 1,
            resolved_kind: kind,
            target_path: None,
            target_layer: target,
            target_package: pkg.map(str::to_string),
        }
    }

    fn rules() -> BoundaryRules {
        BoundaryRules::from_config(&BoundaryConfig::default())
    }

    #[test]
    fn upward_import_is_reported() {
        let src = file("primitives/Button.tsx", leveled("primitives", 0), None);
        let e = edge(&src.relative_path, "../composed/Card", ResolvedKind::RelativeLayered, Some(leveled("composed", 1)), None);
        let v = rules().check_edge(&src, &e).unwrap();
        assert_eq!(v.kind, BoundaryViolationKind::UpwardLayerImport);
        assert!(v.message.contains("layers compose upward only"));
    }

    #[test]
    fn same_and_lower_levels_pass() {
        let src = file("composed/Card.tsx", leveled("composed", 1), None);
        for target in [leveled("composed", 1), leveled("primitives", 0), Layer::Foundation] {
            let e = edge(&src.relative_path, "./x", ResolvedKind::RelativeLayered, Some(target), None);
            assert!(rules().check_edge(&src, &e).is_none());
        }
    }

    #[test]
    fn foundation_may_not_import_leveled_code() {
        let src = file("hooks/useButton.ts", Layer::Foundation, None);
        let e = edge(&src.relative_path, "../primitives/Button", ResolvedKind::RelativeLayered, Some(leveled("primitives", 0)), None);
        let v = rules().check_edge(&src, &e).unwrap();
        assert_eq!(v.kind, BoundaryViolationKind::UpwardLayerImport);
        assert!(v.message.starts_with("foundation file"));
    }

    #[test]
    fn forbidden_package_wins_over_other_rules() {
        let src = file("composed/Dialog.tsx", leveled("composed", 1), Some("@acme/ui"));
        let e = edge(&src.relative_path, "@radix-ui/react-dialog", ResolvedKind::ExternalPackage, None, Some("@radix-ui/react-dialog"));
        let v = rules().check_edge(&src, &e).unwrap();
        assert_eq!(v.kind, BoundaryViolationKind::ForbiddenPackageImport);
        assert_eq!(v.message, rules().forbidden[1].message);
    }

    #[test]
    fn cross_package_is_directional() {
        let rules = BoundaryRules {
            forbidden: Vec::new(),
            cross_package: vec![CrossPackageRule {
                from: "@acme/ui".into(),
                to: "@acme/app".into(),
                message: None,
            }],
        };
        let ui = file("composed/A.tsx", leveled("composed", 1), Some("@acme/ui"));
        let e = edge(&ui.relative_path, "@acme/app", ResolvedKind::ExternalPackage, None, Some("@acme/app"));
        assert_eq!(rules.check_edge(&ui, &e).unwrap().kind, BoundaryViolationKind::CrossBoundary);

        let app = file("pages/Home.tsx", leveled("pages", 5), Some("@acme/app"));
        let back = edge(&app.relative_path, "@acme/ui", ResolvedKind::ExternalPackage, None, Some("@acme/ui"));
        assert!(rules.check_edge(&app, &back).is_none());
    }
}
