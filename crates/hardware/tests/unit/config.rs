//! Configuration Tests.

use std::io::Write;

use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(config.general.emit_state);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.memory.words, 127);
}

#[test]
fn empty_document_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_keep_field_defaults() {
    let config = Config::from_json(r#"{ "general": { "emit_state": false } }"#).unwrap();
    assert!(!config.general.emit_state);
    assert_eq!(config.memory.words, 127);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Config::from_json(r#"{ "memory": { "bytes": 4 } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "memory": {{ "words": 512 }}, "general": {{ "max_steps": 9 }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.memory.words, 512);
    assert_eq!(config.general.max_steps, Some(9));
}
