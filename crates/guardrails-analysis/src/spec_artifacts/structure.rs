//! Minimal structural checks for contract and markdown spec files.

use serde_json::Value;

/// Parsed shape of a spec file, reduced to what the checks need.
pub enum SpecDocument {
    /// Top-level keys of a JSON or YAML mapping.
    Mapping(Vec<String>),
    /// Lower-cased markdown heading texts.
    Headings(Vec<String>),
    /// A format with no structural check.
    Opaque,
}

impl SpecDocument {
    /// Parse `text` according to the file name's extension.
    pub fn parse(file_name: &str, text: &str) -> Result<Self, String> {
        let ext = file_name.rsplit_once('.').map_or("", |(_, e)| e).to_ascii_lowercase();
        match ext.as_str() {
            "json" => {
                let value: Value =
                    serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {e}"))?;
                mapping_keys(value)
            }
            "yaml" | "yml" => {
                let value: Value =
                    serde_yaml::from_str(text).map_err(|e| format!("Invalid YAML: {e}"))?;
                mapping_keys(value)
            }
            "md" | "markdown" => Ok(SpecDocument::Headings(headings(text))),
            _ => Ok(SpecDocument::Opaque),
        }
    }

    /// Whether the document carries `key` as a top-level field or heading.
    pub fn has(&self, key: &str) -> bool {
        match self {
            SpecDocument::Mapping(keys) => keys.iter().any(|k| k == key),
            SpecDocument::Headings(found) => {
                let wanted = key.to_lowercase();
                found.iter().any(|h| *h == wanted)
            }
            SpecDocument::Opaque => true,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            SpecDocument::Headings(_) => "heading",
            _ => "field",
        }
    }
}

fn mapping_keys(value: Value) -> Result<SpecDocument, String> {
    match value {
        Value::Object(map) => Ok(SpecDocument::Mapping(map.keys().cloned().collect())),
        _ => Err("Spec root must be a mapping".to_string()),
    }
}

fn headings(text: &str) -> Vec<String> {
    let mut in_fence = false;
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") {
                in_fence = !in_fence;
                return None;
            }
            if in_fence || !trimmed.starts_with('#') {
                return None;
            }
            let title = trimmed.trim_start_matches('#');
            if !title.is_empty() && !title.starts_with(char::is_whitespace) {
                return None;
            }
            Some(title.trim().trim_end_matches('#').trim().to_lowercase())
        })
        .collect()
}
