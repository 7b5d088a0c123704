//! End-to-end tests driving the `guardrails` binary.

use std::path::Path;
use std::process::{Command, Output};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// A project that satisfies every check.
fn compliant_project(root: &Path) {
    write(
        root,
        "package.json",
        r#"{
  "name": "@acme/ui",
  "devDependencies": { "@guardrails/eslint-config": "^1.0.0" },
  "eslintConfig": { "extends": ["@guardrails/eslint-config"] }
}"#,
    );
    write(
        root,
        ".github/workflows/ci.yml",
        "jobs:\n  guard:\n    steps:\n      - run: npx guardrails verify\n",
    );
    write(root, "tests/__violations__/upward.tsx", "// fixture\n");
    write(root, "src/types/button.ts", "export type ButtonProps = { label: string };\n");
    write(
        root,
        "src/primitives/Button.tsx",
        "import type { ButtonProps } from '../types/button';\n\nexport const Button = (props: ButtonProps) => <button>{props.label}</button>;\n",
    );
    write(
        root,
        "src/composed/Card.tsx",
        "import { Button } from '../primitives/Button';\n\nexport const Card = () => <Button label=\"ok\" />;\n",
    );
    write(root, "src/index.ts", "export * from './composed/Card';\n");
}

fn guardrails(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_guardrails"))
        .args(args)
        .current_dir(root)
        .env("HOME", root)
        .env("GUARDRAILS_LOG", "off")
        .env_remove("GUARDRAILS_SRC_DIR")
        .env_remove("GUARDRAILS_CI_COMMAND")
        .output()
        .expect("run guardrails")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn help_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let out = guardrails(dir.path(), &["help"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("verify:boundaries"));
}

#[test]
fn usage_errors_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(guardrails(dir.path(), &[]).status.code(), Some(1));
    assert_eq!(guardrails(dir.path(), &["frobnicate"]).status.code(), Some(1));
    assert_eq!(
        guardrails(dir.path(), &["verify", "--format=xml"]).status.code(),
        Some(1)
    );
}

#[test]
fn verify_passes_on_compliant_project() {
    let dir = tempfile::tempdir().unwrap();
    compliant_project(dir.path());
    let out = guardrails(dir.path(), &["verify", "--no-color"]);
    assert!(
        out.status.success(),
        "stdout={}\nstderr={}",
        stdout(&out),
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(stdout(&out).contains("Result: PASSED"));
}

#[test]
fn upward_import_fails_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    compliant_project(dir.path());
    write(
        dir.path(),
        "src/primitives/Icon.tsx",
        "import { Card } from '../composed/Card';\nexport const Icon = Card;\n",
    );
    let out = guardrails(dir.path(), &["verify:boundaries", "--no-color"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("primitives/Icon.tsx:1 UPWARD_LAYER_IMPORT '../composed/Card'"));
}

#[test]
fn json_token_report() {
    let dir = tempfile::tempdir().unwrap();
    compliant_project(dir.path());
    write(
        dir.path(),
        "src/composed/Badge.tsx",
        "export const Badge = () => (\n  <span style={{ color: '#ff0000' }}>new</span>\n);\n",
    );
    let out = guardrails(dir.path(), &["verify:tokens", "--format=json"]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["passed"], false);
    let kinds: Vec<&str> = report["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["RAW_ELEMENT", "INLINE_COLOR"]);
    assert_eq!(report["violations"][0]["line"], 2);
}

#[test]
fn src_flag_is_relative_to_root() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "project/lib/components/primitives/Box.tsx", "export const Box = 1;\n");
    let root = dir.path().join("project");
    let root_arg = format!("--root={}", root.display());
    let out = guardrails(dir.path(), &["verify:tokens", &root_arg, "--src=lib/components"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn missing_root_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = guardrails(dir.path(), &["verify", "--root=does-not-exist"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("[CONFIG_ERROR]"));
}

#[test]
fn validate_spec_reports_missing_contract() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "specs/Button/states.md", "# Button\n\n## States\n\n## Interactions\n");
    let out = guardrails(dir.path(), &["validate-spec", "specs/Button", "--format=json"]);
    assert_eq!(out.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert_eq!(result["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(result["errors"][0]["file"], "api-contract");
    assert_eq!(result["errors"][0]["message"], "Required spec file missing");
}
