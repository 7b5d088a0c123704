//! guardrails-core: foundation for the Guardrails compliance engine.
//!
//! - Errors: one enum per subsystem plus stable error codes
//! - Config: TOML configuration and the static rule tables it carries
//! - Tracing: `GUARDRAILS_LOG`-driven subscriber setup
//! - Types: collection aliases shared by the analysis crate

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::GuardrailsConfig;
pub use errors::{ConfigError, FileFinding, GuardrailsErrorCode};
