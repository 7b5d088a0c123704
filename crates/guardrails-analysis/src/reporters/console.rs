//! Console reporter: human-readable output with color codes.

use std::fmt::Write;

use guardrails_core::errors::FileFinding;

use super::{Report, Reporter};
use crate::boundaries::BoundaryReport;
use crate::compliance::{CheckStatus, ComplianceReport};
use crate::spec_artifacts::{SpecFinding, SpecValidationResult};
use crate::tokens::TokenReport;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const GRAY: &str = "\x1b[90m";

/// Console reporter: one line per finding, grouped by check.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_color {
            format!("{color}{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn status_symbol(&self, status: CheckStatus) -> String {
        match status {
            CheckStatus::Pass => self.paint(GREEN, "✓"),
            CheckStatus::Fail => self.paint(RED, "✗"),
            CheckStatus::Warn => self.paint(YELLOW, "⚠"),
        }
    }

    fn location(file: &str, line: Option<u32>) -> String {
        match line {
            Some(line) => format!("{file}:{line}"),
            None => file.to_string(),
        }
    }

    fn result_line(&self, out: &mut String, passed: bool) {
        if passed {
            let _ = writeln!(out, "Result: {}", self.paint(GREEN, "PASSED ✓"));
        } else {
            let _ = writeln!(out, "Result: {}", self.paint(RED, "FAILED ✗"));
        }
    }

    fn file_errors(&self, out: &mut String, errors: &[FileFinding]) {
        for e in errors {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                self.paint(GRAY, &e.code),
                e.file,
                e.message
            );
        }
    }

    fn boundaries(&self, out: &mut String, report: &BoundaryReport) {
        let _ = writeln!(out, "Boundaries ({} files)", report.files_scanned);
        for v in &report.violations {
            let _ = writeln!(
                out,
                "  {}: {} {} '{}': {}",
                self.paint(RED, "error"),
                Self::location(&v.file, Some(v.line)),
                v.kind,
                v.imported_specifier,
                v.message
            );
        }
        for w in &report.warnings {
            let _ = writeln!(out, "  {}: {} {}: {}", self.paint(YELLOW, "warning"), w.file, w.code, w.message);
        }
        self.file_errors(out, &report.errors);
        let _ = writeln!(
            out,
            "─── {} violations, {} warnings, {} errors ───",
            report.violations.len(),
            report.warnings.len(),
            report.errors.len()
        );
        self.result_line(out, report.passed);
    }

    fn tokens(&self, out: &mut String, report: &TokenReport) {
        let _ = writeln!(
            out,
            "Design tokens ({} files, {} exempt)",
            report.files_scanned, report.files_exempt
        );
        for v in &report.violations {
            let _ = writeln!(
                out,
                "  {}: {}:{} {} `{}`: {}",
                self.paint(RED, "error"),
                v.file,
                v.line,
                v.kind,
                v.snippet,
                v.message
            );
        }
        self.file_errors(out, &report.errors);
        let _ = writeln!(
            out,
            "─── {} violations, {} errors ───",
            report.violations.len(),
            report.errors.len()
        );
        self.result_line(out, report.passed);
    }

    fn spec(&self, out: &mut String, result: &SpecValidationResult) {
        let _ = writeln!(out, "Spec: {}", result.component_name);
        let line = |f: &SpecFinding| match &f.path {
            Some(path) => format!("{} ({}): {}", f.file, path, f.message),
            None => format!("{}: {}", f.file, f.message),
        };
        for e in &result.errors {
            let _ = writeln!(out, "  {}: {}", self.paint(RED, "error"), line(e));
        }
        for w in &result.warnings {
            let _ = writeln!(out, "  {}: {}", self.paint(YELLOW, "warning"), line(w));
        }
        let _ = writeln!(
            out,
            "─── {} errors, {} warnings ───",
            result.errors.len(),
            result.warnings.len()
        );
        self.result_line(out, result.valid);
    }

    fn compliance(&self, out: &mut String, report: &ComplianceReport) {
        out.push_str("╔══════════════════════════════════════════╗\n");
        out.push_str("║        Guardrails Compliance Report      ║\n");
        out.push_str("╚══════════════════════════════════════════╝\n\n");

        for check in &report.checks {
            let _ = writeln!(
                out,
                "{} {} {}: {}",
                self.status_symbol(check.status),
                check.status,
                check.label,
                check.details
            );
            for f in &check.findings {
                let _ = writeln!(out, "    {}: {}", Self::location(&f.file, f.line), f.message);
            }
        }

        let passed = report.checks.iter().filter(|c| c.passed()).count();
        let _ = writeln!(
            out,
            "\n─── Summary: {passed}/{} checks passed ───",
            report.checks.len()
        );
        self.result_line(out, report.overall_passed);
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &Report<'_>) -> Result<String, String> {
        let mut output = String::new();
        match report {
            Report::Boundaries(r) => self.boundaries(&mut output, r),
            Report::Tokens(r) => self.tokens(&mut output, r),
            Report::Spec(r) => self.spec(&mut output, r),
            Report::Compliance(r) => self.compliance(&mut output, r),
        }
        Ok(output)
    }
}
