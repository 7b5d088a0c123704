//! JSON reporter: the result types serialized as-is.

use super::{Report, Reporter};

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report<'_>) -> Result<String, String> {
        let output = match report {
            Report::Boundaries(r) => serde_json::to_string_pretty(r),
            Report::Tokens(r) => serde_json::to_string_pretty(r),
            Report::Spec(r) => serde_json::to_string_pretty(r),
            Report::Compliance(r) => serde_json::to_string_pretty(r),
        };
        output.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec_artifacts::{SpecFinding, SpecValidationResult};

    #[test]
    fn spec_result_uses_camel_case() {
        let result = SpecValidationResult {
            component_name: "Button".to_string(),
            valid: false,
            errors: vec![SpecFinding::file("api-contract", "Required spec file missing")],
            warnings: Vec::new(),
        };
        let text = JsonReporter.generate(&Report::Spec(&result)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["componentName"], "Button");
        assert_eq!(value["errors"][0]["file"], "api-contract");
        assert!(value["errors"][0].get("path").is_none());
        assert_eq!(value["warnings"].as_array().map(Vec::len), Some(0));
    }
}
