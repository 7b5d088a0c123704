//! Tests for the Guardrails error handling system.

use std::path::PathBuf;

use guardrails_core::errors::*;

#[test]
fn every_error_has_a_code() {
    let config = ConfigError::RootNotFound {
        path: PathBuf::from("/missing"),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let scan = ScanError::PermissionDenied {
        path: PathBuf::from("a.ts"),
    };
    assert_eq!(scan.error_code(), "SCAN_ERROR");

    let parse = ParseError::Syntax {
        path: PathBuf::from("a.ts"),
        line: 3,
    };
    assert_eq!(parse.error_code(), "PARSE_ERROR");

    let unsupported = ParseError::UnsupportedLanguage {
        extension: "vue".into(),
    };
    assert_eq!(unsupported.error_code(), "UNSUPPORTED_LANGUAGE");

    let spec = SpecError::DirectoryNotFound {
        path: PathBuf::from("specs/Button"),
    };
    assert_eq!(spec.error_code(), "SPEC_ERROR");
}

#[test]
fn engine_error_preserves_subsystem_code() {
    let engine: EngineError = ParseError::Syntax {
        path: PathBuf::from("a.ts"),
        line: 1,
    }
    .into();
    assert_eq!(engine.error_code(), "PARSE_ERROR");
    assert!(!engine.is_fatal());

    let engine: EngineError = ConfigError::InvalidValue {
        field: "scan.threads".into(),
        message: "bad".into(),
    }
    .into();
    assert!(engine.is_fatal());
}

#[test]
fn tagged_string_prefixes_code() {
    let err = ConfigError::FileNotFound {
        path: "guardrails.toml".into(),
    };
    assert_eq!(
        err.tagged_string(),
        "[CONFIG_ERROR] Config file not found: guardrails.toml"
    );
}

#[test]
fn file_finding_captures_code_and_message() {
    let finding = FileFinding::new(
        "primitives/Broken.tsx",
        ParseError::Syntax {
            path: PathBuf::from("primitives/Broken.tsx"),
            line: 7,
        },
    );
    assert_eq!(finding.code, "PARSE_ERROR");
    assert!(finding.message.contains("near line 7"));
}

#[test]
fn permission_denied_is_classified() {
    let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    let err = ScanError::from_io(PathBuf::from("x.ts"), io);
    assert!(matches!(err, ScanError::PermissionDenied { .. }));
}
