//! `guardrails`: runs the compliance engine and maps results to exit codes.
//!
//! The binary does no analysis of its own: it parses flags, loads the layered
//! configuration, calls the engine and prints the report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use guardrails_analysis::reporters::{create_reporter, Report};
use guardrails_analysis::{
    check_compliance_with, validate_spec_with, verify_boundaries_with, verify_design_tokens_with,
    VerifyOptions,
};
use guardrails_core::config::CliOverrides;
use guardrails_core::errors::ConfigError;
use guardrails_core::tracing::init_tracing;
use guardrails_core::{GuardrailsConfig, GuardrailsErrorCode};

#[derive(Parser, Debug)]
#[command(
    name = "guardrails",
    version,
    about = "Enforce layering, import boundaries, design tokens and spec artifacts",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Component source directory, relative to the root [default: src]
    #[arg(long, global = true, value_name = "PATH")]
    src: Option<PathBuf>,

    /// Project root directory [default: current directory]
    #[arg(long, global = true, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Disable ANSI colours in console output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every check and print the compliance report
    Verify,
    /// Check layer, forbidden-package and cross-package boundaries
    #[command(name = "verify:boundaries")]
    VerifyBoundaries,
    /// Check for raw elements and inline styling literals
    #[command(name = "verify:tokens")]
    VerifyTokens,
    /// Validate one component's spec directory
    #[command(name = "validate-spec")]
    ValidateSpec {
        /// Path to the spec directory
        dir: PathBuf,
    },
    /// Print this help
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Console,
    Json,
}

impl Format {
    fn as_str(self) -> &'static str {
        match self {
            Format::Console => "console",
            Format::Json => "json",
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_tracing();

    let Some(command) = &cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    };
    if matches!(command, Command::Help) {
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    }

    match run(&cli, command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e.tagged_string());
            ExitCode::FAILURE
        }
    }
}

/// Run `command` and print its report. Returns whether it passed.
fn run(cli: &Cli, command: &Command) -> Result<bool, ConfigError> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().map_err(|e| ConfigError::RootUnreadable {
            path: PathBuf::from("."),
            message: e.to_string(),
        })?,
    };
    let overrides = CliOverrides {
        src_dir: cli.src.as_ref().map(|p| p.to_string_lossy().into_owned()),
        ..Default::default()
    };
    let config = GuardrailsConfig::load(&root, Some(&overrides))?;
    let options = VerifyOptions::new(config.compliance.effective_src_dir(), &root);

    let reporter = create_reporter(cli.format.as_str(), !cli.no_color).ok_or_else(|| {
        ConfigError::InvalidValue {
            field: "format".to_string(),
            message: format!("unknown format '{}'", cli.format.as_str()),
        }
    })?;

    let emit = |report: Report<'_>| -> bool {
        match reporter.generate(&report) {
            Ok(text) => print!("{text}"),
            Err(e) => eprintln!("failed to render {} report: {e}", reporter.name()),
        }
        report.passed()
    };

    let passed = match command {
        Command::Verify => emit(Report::Compliance(&check_compliance_with(&root, &config)?)),
        Command::VerifyBoundaries => {
            emit(Report::Boundaries(&verify_boundaries_with(&options, &config)?))
        }
        Command::VerifyTokens => {
            emit(Report::Tokens(&verify_design_tokens_with(&options, &config)?))
        }
        Command::ValidateSpec { dir } => emit(Report::Spec(&validate_spec_with(dir, &config.spec))),
        Command::Help => true,
    };
    tracing::debug!(passed, "command finished");
    Ok(passed)
}
