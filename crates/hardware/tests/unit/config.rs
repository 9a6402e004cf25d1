//! # Configuration Tests

use pretty_assertions::assert_eq;
use shpipe_core::common::SimError;
use shpipe_core::config::Config;

#[test]
fn test_empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = Config::from_json(r#"{ "memory": { "blocks": 8 } }"#).unwrap();
    assert_eq!(config.memory.blocks, 8);
    assert_eq!(config.memory.words_per_block, Config::default().memory.words_per_block);
    assert!(config.pipeline.halt_on_sleep);
}

#[test]
fn test_serialized_default_parses_back() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), Config::default());
}

#[test]
fn test_rejects_non_power_of_two_block() {
    let err = Config::from_json(r#"{ "memory": { "words_per_block": 100 } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)), "{err}");
}

#[test]
fn test_rejects_zero_blocks_and_zero_cycle_limit() {
    assert!(matches!(
        Config::from_json(r#"{ "memory": { "blocks": 0 } }"#),
        Err(SimError::Config(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "general": { "max_cycles": 0 } }"#),
        Err(SimError::Config(_))
    ));
}

#[test]
fn test_rejects_memory_beyond_address_space() {
    let json = r#"{ "memory": { "blocks": 4096, "words_per_block": 1048576 } }"#;
    assert!(matches!(Config::from_json(json), Err(SimError::Config(_))));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(Config::from_json("{ memory"), Err(SimError::Json(_))));
    assert!(matches!(
        Config::from_json(r#"{ "general": { "max_cycles": "many" } }"#),
        Err(SimError::Json(_))
    ));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "general": { "max_cycles": 77, "trace": true } }"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.general.max_cycles, 77);
    assert!(config.general.trace);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Config::from_file(&path) {
        Err(SimError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
