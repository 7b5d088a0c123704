//! Fixture trees shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use guardrails_analysis::VerifyOptions;
use guardrails_core::GuardrailsConfig;
use tempfile::TempDir;

pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A temp project root with a `src/` component directory.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) -> &Self {
        write(self.root(), rel, content);
        self
    }

    pub fn src(&self, rel: &str, content: &str) -> &Self {
        write(&self.root().join("src"), rel, content);
        self
    }

    pub fn options(&self) -> VerifyOptions {
        VerifyOptions::new("src", self.root())
    }

    /// Everything the project-level checks look for.
    pub fn with_project_files(&self) -> &Self {
        self.file(
            "package.json",
            r#"{"name":"@acme/ui","devDependencies":{"@guardrails/eslint-config":"1.0.0"}}"#,
        )
        .file(".eslintrc.json", r#"{"extends":"@guardrails/eslint-config"}"#)
        .file(
            ".github/workflows/ci.yml",
            "jobs:\n  verify:\n    steps:\n      - run: pnpm guardrails verify\n",
        )
        .file("tests/__violations__/upward.violation.test.tsx", "// fixture\n")
    }
}

pub fn config() -> GuardrailsConfig {
    GuardrailsConfig::default()
}
