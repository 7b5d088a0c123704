//! GuardrailsErrorCode trait for caller-facing error tagging.

/// Trait for attaching a stable code to Guardrails errors.
/// Every error enum implements this so CLI output and serialized findings
/// carry a machine-readable tag next to the human message.
pub trait GuardrailsErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const SPEC_ERROR: &str = "SPEC_ERROR";
pub const UNSUPPORTED_LANGUAGE: &str = "UNSUPPORTED_LANGUAGE";
