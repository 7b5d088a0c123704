//! Error handling for Guardrails.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod finding;
pub mod parse_error;
pub mod scan_error;
pub mod spec_error;

pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::GuardrailsErrorCode;
pub use finding::FileFinding;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
pub use spec_error::SpecError;
