//! # Error Tests
//!
//! Display text and conversions for the library's error enums.

use std::path::PathBuf;

use hazard_unit_core::common::{ConfigError, RegisterError, TraceError};

#[test]
fn register_error_display() {
    let err = RegisterError::OutOfRange {
        index: 40,
        limit: 32,
    };
    assert_eq!(
        err.to_string(),
        "register index 40 is out of range (register file has 32 entries)"
    );
}

#[test]
fn trace_register_error_names_cycle() {
    let err = TraceError::Register {
        cycle: 3,
        source: RegisterError::OutOfRange {
            index: 20,
            limit: 16,
        },
    };
    let msg = err.to_string();
    assert!(msg.starts_with("cycle 3:"), "{msg}");
    assert!(msg.contains("index 20"), "{msg}");
}

#[test]
fn trace_error_exposes_source() {
    use std::error::Error;
    let err = TraceError::Register {
        cycle: 0,
        source: RegisterError::OutOfRange { index: 1, limit: 1 },
    };
    assert!(err.source().is_some());
}

#[test]
fn trace_io_error_names_path() {
    let err = TraceError::Io {
        path: PathBuf::from("missing.json"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn json_errors_convert() {
    let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
    let trace: TraceError = json_err.into();
    assert!(matches!(trace, TraceError::Parse(_)));

    let json_err = serde_json::from_str::<u8>("{").unwrap_err();
    let config: ConfigError = json_err.into();
    assert!(matches!(config, ConfigError::Parse(_)));
}

#[test]
fn empty_trace_display() {
    assert_eq!(TraceError::Empty.to_string(), "trace contains no cycles");
}
