//! Project-level checks over the repository root.

use std::fs;
use std::path::Path;

use serde_json::Value;

use guardrails_core::errors::ConfigError;
use guardrails_core::GuardrailsConfig;

use super::orchestrator::{ComplianceGate, ProjectContext};
use super::types::{CheckId, ComplianceCheck, Finding};
use crate::scanner::{PathFilter, Scanner};

const DEPENDENCY_SECTIONS: &[&str] = &["dependencies", "devDependencies", "peerDependencies"];

const ESLINT_CONFIG_FILES: &[&str] = &[
    ".eslintrc",
    ".eslintrc.json",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    ".eslintrc.js",
    ".eslintrc.cjs",
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
    "eslint.config.ts",
    "eslint.config.mts",
];

/// The four project gates, compiled from configuration.
pub struct ProjectGates {
    pub dependency: DependencyGate,
    pub lint_preset: LintPresetGate,
    pub violation_tests: ViolationTestsGate,
    pub ci_workflow: CiWorkflowGate,
}

impl ProjectGates {
    pub fn compile(config: &GuardrailsConfig) -> Result<Self, ConfigError> {
        let compliance = &config.compliance;
        Ok(Self {
            dependency: DependencyGate {
                package: compliance.effective_required_dependency(),
            },
            lint_preset: LintPresetGate {
                preset: compliance.effective_lint_preset(),
            },
            violation_tests: ViolationTestsGate {
                globs: PathFilter::new(
                    "compliance.violation_test_globs",
                    &compliance.effective_violation_test_globs(),
                )?,
            },
            ci_workflow: CiWorkflowGate {
                command: compliance.effective_ci_command(),
            },
        })
    }
}

fn read_package_json(root: &Path) -> Result<Value, Finding> {
    let text = fs::read_to_string(root.join("package.json"))
        .map_err(|e| Finding::new("package.json", None, format!("cannot read package.json: {e}")))?;
    serde_json::from_str(&text)
        .map_err(|e| Finding::new("package.json", None, format!("invalid package.json: {e}")))
}

/// Root `package.json` declares the guardrails package.
pub struct DependencyGate {
    package: String,
}

impl ComplianceGate for DependencyGate {
    fn id(&self) -> CheckId {
        CheckId::DependencyDeclared
    }

    fn evaluate(&self, ctx: &ProjectContext<'_>) -> ComplianceCheck {
        let manifest = match read_package_json(&ctx.root) {
            Ok(v) => v,
            Err(finding) => {
                return ComplianceCheck::fail(
                    self.id(),
                    format!("{} is not declared", self.package),
                    vec![finding],
                )
            }
        };
        let section = DEPENDENCY_SECTIONS.iter().find(|section| {
            manifest
                .get(**section)
                .and_then(Value::as_object)
                .is_some_and(|deps| deps.contains_key(&self.package))
        });
        match section {
            Some(section) => ComplianceCheck::pass(
                self.id(),
                format!("{} declared in {section}", self.package),
            ),
            None => ComplianceCheck::fail(
                self.id(),
                format!("{} is not declared", self.package),
                vec![Finding::new(
                    "package.json",
                    None,
                    format!("add {} to devDependencies", self.package),
                )],
            ),
        }
    }
}

/// Some ESLint configuration extends the guardrails preset.
pub struct LintPresetGate {
    preset: String,
}

impl LintPresetGate {
    fn names_preset(&self, entry: &str) -> bool {
        entry == self.preset
            || entry
                .strip_prefix(self.preset.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    fn extends_in(&self, config: &Value) -> bool {
        match config.get("extends") {
            Some(Value::String(s)) => self.names_preset(s),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .any(|s| self.names_preset(s)),
            _ => false,
        }
    }

    /// Flat and script configs are matched textually on a quoted preset name.
    fn mentions_preset(&self, source: &str) -> bool {
        ['\'', '"', '`'].iter().any(|q| {
            source.contains(&format!("{q}{}{q}", self.preset))
                || source.contains(&format!("{q}{}/", self.preset))
        })
    }

    fn file_extends(&self, name: &str, text: &str) -> Result<bool, String> {
        let ext = name.rsplit_once('.').map_or("", |(_, e)| e);
        match (name, ext) {
            (".eslintrc", _) | (_, "json") => {
                let value = serde_json::from_str::<Value>(text)
                    .or_else(|_| serde_yaml::from_str::<Value>(text))
                    .map_err(|e| format!("unparsable ESLint config: {e}"))?;
                Ok(self.extends_in(&value))
            }
            (_, "yaml" | "yml") => {
                let value: Value =
                    serde_yaml::from_str(text).map_err(|e| format!("unparsable ESLint config: {e}"))?;
                Ok(self.extends_in(&value))
            }
            _ => Ok(self.mentions_preset(text)),
        }
    }
}

impl ComplianceGate for LintPresetGate {
    fn id(&self) -> CheckId {
        CheckId::LintPreset
    }

    fn evaluate(&self, ctx: &ProjectContext<'_>) -> ComplianceCheck {
        let mut inspected = Vec::new();
        let mut findings = Vec::new();

        for name in ESLINT_CONFIG_FILES {
            let Ok(text) = fs::read_to_string(ctx.root.join(name)) else {
                continue;
            };
            inspected.push(*name);
            match self.file_extends(name, &text) {
                Ok(true) => {
                    return ComplianceCheck::pass(self.id(), format!("{name} extends {}", self.preset))
                }
                Ok(false) => findings.push(Finding::new(
                    *name,
                    None,
                    format!("does not extend {}", self.preset),
                )),
                Err(message) => findings.push(Finding::new(*name, None, message)),
            }
        }

        if let Ok(manifest) = read_package_json(&ctx.root) {
            if let Some(config) = manifest.get("eslintConfig") {
                inspected.push("package.json#eslintConfig");
                if self.extends_in(config) {
                    return ComplianceCheck::pass(
                        self.id(),
                        format!("package.json eslintConfig extends {}", self.preset),
                    );
                }
                findings.push(Finding::new(
                    "package.json",
                    None,
                    format!("eslintConfig does not extend {}", self.preset),
                ));
            }
        }

        let details = if inspected.is_empty() {
            "no ESLint configuration found".to_string()
        } else {
            format!("no ESLint configuration extends {}", self.preset)
        };
        ComplianceCheck::fail(self.id(), details, findings)
    }
}

/// At least one violation test exists somewhere under the root.
pub struct ViolationTestsGate {
    globs: PathFilter,
}

impl ComplianceGate for ViolationTestsGate {
    fn id(&self) -> CheckId {
        CheckId::ViolationTests
    }

    fn evaluate(&self, ctx: &ProjectContext<'_>) -> ComplianceCheck {
        let scan = Scanner::all_files(&ctx.root, &ctx.config.scan).scan(&PathFilter::empty());
        let found: Vec<&str> = scan
            .files
            .iter()
            .map(|f| f.relative_path.as_str())
            .filter(|p| self.globs.is_match(p))
            .collect();

        if found.is_empty() {
            return ComplianceCheck::warn(
                self.id(),
                format!("no files match {}", self.globs.patterns().join(", ")),
                Vec::new(),
            );
        }
        ComplianceCheck::pass(self.id(), format!("{} violation test files", found.len()))
    }
}

/// A GitHub Actions workflow invokes the guardrails command.
pub struct CiWorkflowGate {
    command: String,
}

impl ComplianceGate for CiWorkflowGate {
    fn id(&self) -> CheckId {
        CheckId::CiWorkflow
    }

    fn evaluate(&self, ctx: &ProjectContext<'_>) -> ComplianceCheck {
        let dir = ctx.root.join(".github").join("workflows");
        let mut workflows: Vec<String> = fs::read_dir(&dir)
            .map(|entries| {
                entries
                    .flatten()
                    .filter(|e| e.path().is_file())
                    .filter_map(|e| e.file_name().to_str().map(str::to_string))
                    .filter(|name| name.ends_with(".yml") || name.ends_with(".yaml"))
                    .collect()
            })
            .unwrap_or_default();
        workflows.sort();

        if workflows.is_empty() {
            return ComplianceCheck::fail(
                self.id(),
                "no workflows in .github/workflows",
                Vec::new(),
            );
        }

        let mut findings = Vec::new();
        for name in &workflows {
            let rel = format!(".github/workflows/{name}");
            let Ok(text) = fs::read_to_string(dir.join(name)) else {
                findings.push(Finding::new(rel, None, "unreadable workflow"));
                continue;
            };
            if let Some(index) = text.lines().position(|l| l.contains(&self.command)) {
                return ComplianceCheck::pass(
                    self.id(),
                    format!("{rel} runs `{}` (line {})", self.command, index + 1),
                );
            }
            findings.push(Finding::new(rel, None, format!("does not run `{}`", self.command)));
        }

        ComplianceCheck::warn(
            self.id(),
            format!("{} workflows, none runs `{}`", workflows.len(), self.command),
            findings,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::CheckStatus;

    fn gates() -> ProjectGates {
        ProjectGates::compile(&GuardrailsConfig::default()).unwrap()
    }

    fn run(gate: &dyn ComplianceGate, root: &Path) -> ComplianceCheck {
        let config = GuardrailsConfig::default();
        gate.evaluate(&ProjectContext {
            root: root.to_path_buf(),
            config: &config,
        })
    }

    #[test]
    fn dependency_found_in_dev_dependencies() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"devDependencies":{"@guardrails/eslint-config":"^1.0.0"}}"#,
        )
        .unwrap();
        assert!(run(&gates().dependency, dir.path()).passed());
    }

    #[test]
    fn missing_manifest_fails_dependency() {
        let dir = tempfile::tempdir().unwrap();
        let check = run(&gates().dependency, dir.path());
        assert_eq!(check.status, CheckStatus::Fail);
        assert_eq!(check.findings.len(), 1);
    }

    #[test]
    fn lint_preset_in_eslintrc_array() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".eslintrc.json"),
            r#"{"extends":["eslint:recommended","@guardrails/eslint-config/react"]}"#,
        )
        .unwrap();
        assert!(run(&gates().lint_preset, dir.path()).passed());
    }

    #[test]
    fn lint_preset_in_flat_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("eslint.config.mjs"),
            "import guardrails from '@guardrails/eslint-config';\nexport default [...guardrails];\n",
        )
        .unwrap();
        assert!(run(&gates().lint_preset, dir.path()).passed());
    }

    #[test]
    fn lint_preset_missing_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".eslintrc.yml"), "extends: airbnb\n").unwrap();
        let check = run(&gates().lint_preset, dir.path());
        assert!(!check.passed());
        assert_eq!(check.findings[0].file, ".eslintrc.yml");
    }

    #[test]
    fn violation_tests_warn_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let check = run(&gates().violation_tests, dir.path());
        assert_eq!(check.status, CheckStatus::Warn);

        fs::create_dir_all(dir.path().join("tests/__violations__")).unwrap();
        fs::write(dir.path().join("tests/__violations__/upward.tsx"), "").unwrap();
        assert!(run(&gates().violation_tests, dir.path()).passed());
    }

    #[test]
    fn ci_workflow_statuses() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            run(&gates().ci_workflow, dir.path()).status,
            CheckStatus::Fail
        );

        let workflows = dir.path().join(".github/workflows");
        fs::create_dir_all(&workflows).unwrap();
        fs::write(workflows.join("ci.yml"), "jobs:\n  test:\n    steps:\n      - run: npm test\n").unwrap();
        assert_eq!(
            run(&gates().ci_workflow, dir.path()).status,
            CheckStatus::Warn
        );

        fs::write(workflows.join("guard.yaml"), "steps:\n  - run: npx guardrails verify\n").unwrap();
        assert!(run(&gates().ci_workflow, dir.path()).passed());
    }
}
