//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Guardrails tracing/logging system.
///
/// Reads `GUARDRAILS_LOG` for per-module log levels, e.g.
/// `GUARDRAILS_LOG=guardrails_analysis::boundaries=debug,guardrails=info`.
/// Falls back to `guardrails=info` if unset or invalid. Output goes to
/// stderr so report output on stdout stays machine-readable.
///
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GUARDRAILS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("guardrails=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
