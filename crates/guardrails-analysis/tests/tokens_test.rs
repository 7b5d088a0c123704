//! Design token checks against fixture trees.

mod common;

use common::{config, Project};
use guardrails_analysis::{verify_design_tokens_with, TokenViolationKind};
use guardrails_core::errors::ConfigError;

fn summary(report: &guardrails_analysis::TokenReport) -> Vec<(&str, u32, TokenViolationKind)> {
    report
        .violations
        .iter()
        .map(|v| (v.file.as_str(), v.line, v.kind))
        .collect()
}

#[test]
fn raw_div_with_hex_color_reports_both_on_one_line() {
    let p = Project::new();
    p.src(
        "composed/Card.tsx",
        "export const Card = () => (\n  <div style={{ color: '#ff0000' }}>hi</div>\n);\n",
    );

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert!(!report.passed);
    assert_eq!(
        summary(&report),
        vec![
            ("composed/Card.tsx", 2, TokenViolationKind::RawElement),
            ("composed/Card.tsx", 2, TokenViolationKind::InlineColor),
        ]
    );
    assert_eq!(report.violations[0].column, 3);
    assert_eq!(report.violations[1].snippet, "#ff0000");
}

#[test]
fn stories_and_docs_are_exempt() {
    let p = Project::new();
    p.src("composed/Card.stories.tsx", "export const S = () => <div style={{ color: '#fff' }} />;\n")
        .src("docs/Usage.tsx", "export const D = () => <p>12px</p>;\n")
        .src("composed/Card.tsx", "export const Card = () => <Surface tone=\"muted\" />;\n");

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert!(report.passed, "{:?}", report.violations);
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.files_exempt, 2);
}

#[test]
fn same_markup_counts_only_outside_exempt_files() {
    let snippet = "export const X = () => <section />;\n";
    let p = Project::new();
    p.src("composed/X.stories.tsx", snippet);

    let exempt_only = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert!(exempt_only.violations.is_empty());
    assert_eq!(exempt_only.files_exempt, 1);

    p.src("composed/X.tsx", snippet);
    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert_eq!(
        summary(&report),
        vec![("composed/X.tsx", 1, TokenViolationKind::RawElement)]
    );
}

#[test]
fn markup_beside_comments_is_still_checked() {
    let p = Project::new();
    p.src(
        "composed/Mixed.tsx",
        "export const M = () => (\n  {/* body */} <div style={{ color: '#ff0000' }}>x</div>\n);\n/* note */ const w = '12px';\nconst a = 1; /* retired\n  <span />\n*/\n",
    );

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert_eq!(
        summary(&report),
        vec![
            ("composed/Mixed.tsx", 2, TokenViolationKind::RawElement),
            ("composed/Mixed.tsx", 2, TokenViolationKind::InlineColor),
            ("composed/Mixed.tsx", 4, TokenViolationKind::InlinePixelValue),
        ]
    );
}

#[test]
fn project_root_ignore_files_apply() {
    let p = Project::new();
    p.file(".guardrailsignore", "legacy/\n")
        .file(".gitignore", "generated/\n")
        .src("legacy/composed/Old.tsx", "export const O = () => <div />;\n")
        .src("generated/composed/Gen.tsx", "export const G = () => <span />;\n")
        .src("composed/Ok.tsx", "export const Ok = 1;\n");

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert!(report.passed, "{:?}", report.violations);
    assert_eq!(report.files_scanned, 1);
}

#[test]
fn primitives_may_render_raw_elements_but_not_literals() {
    let p = Project::new();
    p.src(
        "primitives/Box.tsx",
        "export const Box = () => <div style={{ padding: '12px', color: 'var(--color-fg)' }} />;\n",
    );

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert_eq!(
        summary(&report),
        vec![("primitives/Box.tsx", 1, TokenViolationKind::InlinePixelValue)]
    );
}

#[test]
fn token_references_are_not_literals() {
    let p = Project::new();
    p.src(
        "composed/Panel.tsx",
        "const gap = tokens.space['12px'];\nconst fg = theme('#ffffff');\nconst bg = theme.colors.primary;\n",
    );

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert!(report.passed, "{:?}", report.violations);
}

#[test]
fn comments_are_skipped() {
    let p = Project::new();
    p.src(
        "composed/Note.tsx",
        "// <div> with #fff is fine here\n/*\n  <span>16px</span>\n*/\nexport const Note = 1;\n",
    );

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert!(report.passed, "{:?}", report.violations);
}

#[test]
fn crlf_line_numbers_match_lf() {
    let lf = "const a = 1;\nconst c = '#abcdef';\n";
    let crlf = lf.replace('\n', "\r\n");

    let p = Project::new();
    p.src("composed/Lf.tsx", lf).src("composed/Crlf.tsx", &crlf);

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    let lines: Vec<u32> = report.violations.iter().map(|v| v.line).collect();
    assert_eq!(lines, vec![2, 2]);
    assert!(report.violations.iter().all(|v| v.snippet == "#abcdef"));
}

#[test]
fn report_is_sorted_by_file_then_kind() {
    let p = Project::new();
    p.src("composed/B.tsx", "const c = '#000';\nexport const B = () => <span />;\n")
        .src("composed/A.tsx", "const w = '4px';\n");

    let report = verify_design_tokens_with(&p.options(), &config()).unwrap();
    assert_eq!(
        summary(&report),
        vec![
            ("composed/A.tsx", 1, TokenViolationKind::InlinePixelValue),
            ("composed/B.tsx", 2, TokenViolationKind::RawElement),
            ("composed/B.tsx", 1, TokenViolationKind::InlineColor),
        ]
    );
}

#[test]
fn invalid_token_pattern_is_a_config_error() {
    let p = Project::new();
    p.src("composed/A.tsx", "export const A = 1;\n");
    let mut cfg = config();
    cfg.tokens.token_patterns = Some(vec!["tokens(".to_string()]);

    let err = verify_design_tokens_with(&p.options(), &cfg).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
