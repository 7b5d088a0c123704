//! Whole-project compliance runs.

mod common;

use common::{config, Project};
use guardrails_analysis::{check_compliance_with, CheckId, CheckStatus, ComplianceReport};
use guardrails_core::errors::ConfigError;

fn statuses(report: &ComplianceReport) -> Vec<(CheckId, CheckStatus)> {
    report.checks.iter().map(|c| (c.id, c.status)).collect()
}

fn clean_project() -> Project {
    let p = Project::new();
    p.with_project_files()
        .src("types/button.ts", "export interface ButtonProps { label: string }\n")
        .src(
            "primitives/Button.tsx",
            "import type { ButtonProps } from '../types/button';\nexport const Button = (props: ButtonProps) => <button>{props.label}</button>;\n",
        )
        .src(
            "composed/Toolbar.tsx",
            "import { Button } from '../primitives/Button';\nexport const Toolbar = () => <Button label=\"save\" />;\n",
        );
    p
}

#[test]
fn clean_project_passes_every_check() {
    let p = clean_project();
    let report = check_compliance_with(p.root(), &config()).unwrap();
    assert!(report.overall_passed, "{:#?}", report.checks);
    assert_eq!(
        statuses(&report),
        CheckId::all()
            .iter()
            .map(|id| (*id, CheckStatus::Pass))
            .collect::<Vec<_>>()
    );
}

#[test]
fn failing_checks_do_not_short_circuit() {
    let p = Project::new();
    p.src("primitives/Chip.tsx", "import '../pages/Home';\nconst c = '#123456';\n")
        .src("pages/Home.tsx", "export const Home = 1;\n");

    let report = check_compliance_with(p.root(), &config()).unwrap();
    assert!(!report.overall_passed);
    assert_eq!(
        statuses(&report),
        vec![
            (CheckId::Boundaries, CheckStatus::Fail),
            (CheckId::CiWorkflow, CheckStatus::Fail),
            (CheckId::DependencyDeclared, CheckStatus::Fail),
            (CheckId::DesignTokens, CheckStatus::Fail),
            (CheckId::LintPreset, CheckStatus::Fail),
            (CheckId::ViolationTests, CheckStatus::Warn),
        ]
    );
    let boundaries = report.check(CheckId::Boundaries).unwrap();
    assert_eq!(boundaries.findings.len(), 1);
    assert_eq!(boundaries.findings[0].file, "primitives/Chip.tsx");
    assert_eq!(boundaries.findings[0].line, Some(1));
}

#[test]
fn warnings_do_not_fail_the_report() {
    let p = clean_project();
    p.src("experimental/Labs.tsx", "export const Labs = 1;\n")
        .src("composed/Broken.tsx", "export const = ;\n");

    let report = check_compliance_with(p.root(), &config()).unwrap();
    assert!(report.overall_passed);
    let boundaries = report.check(CheckId::Boundaries).unwrap();
    assert_eq!(boundaries.status, CheckStatus::Warn);
    let files: Vec<&str> = boundaries.findings.iter().map(|f| f.file.as_str()).collect();
    assert!(files.contains(&"experimental/Labs.tsx"));
    assert!(files.contains(&"composed/Broken.tsx"));
}

#[test]
fn repeated_runs_agree() {
    let p = clean_project();
    p.src("composed/Bad.tsx", "import '@radix-ui/react-tooltip';\nexport const Bad = () => <div />;\n");

    let first = check_compliance_with(p.root(), &config()).unwrap();
    let second = check_compliance_with(p.root(), &config()).unwrap();
    assert_eq!(first.checks, second.checks);
    assert_eq!(first.overall_passed, second.overall_passed);
}

#[test]
fn src_dir_comes_from_config() {
    let p = Project::new();
    p.with_project_files()
        .file("packages/ui/primitives/Icon.tsx", "export const Icon = () => null;\n");
    let mut cfg = config();
    cfg.compliance.src_dir = Some("packages/ui".to_string());

    let report = check_compliance_with(p.root(), &cfg).unwrap();
    assert!(report.overall_passed, "{:#?}", report.checks);
}

#[test]
fn src_dir_from_project_config_file() {
    let p = Project::new();
    p.with_project_files()
        .file("guardrails.toml", "[compliance]\nsrc_dir = \"lib\"\n")
        .file("lib/composed/Row.tsx", "export const Row = () => null;\n");

    let report = guardrails_analysis::check_compliance(p.root()).unwrap();
    assert!(report.overall_passed, "{:#?}", report.checks);
}

#[test]
fn missing_src_aborts_before_any_check() {
    let p = Project::new();
    p.with_project_files();
    let err = check_compliance_with(p.root(), &config()).unwrap_err();
    assert!(matches!(err, ConfigError::RootNotFound { .. }));
}

#[test]
fn json_report_is_camel_case() {
    let p = clean_project();
    let report = check_compliance_with(p.root(), &config()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overallPassed"], serde_json::json!(true));
    assert!(json["generatedAt"].is_string());
    assert_eq!(json["checks"][0]["id"], "boundaries");
    assert_eq!(json["checks"][0]["status"], "PASS");
}
