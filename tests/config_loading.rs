use std::fs;

use index_derive::derivation::{ConfigError, DerivationConfig, SourceKeys};
use index_derive::types::FieldKey;
use tempfile::tempdir;

#[test]
fn v0_defaults() {
    let config = DerivationConfig::v0();
    assert_eq!(config.version, "1");
    assert_eq!(config.fields, FieldKey::ALL.to_vec());
    assert_eq!(config.ngram_size, 2);
    assert_eq!(config.geocell_precision, 12);
    assert_eq!(config.keys, SourceKeys::default());
    assert_eq!(config.keys.event_dates, "dates");
    assert_eq!(DerivationConfig::default(), config);
}

#[test]
fn empty_object_is_all_defaults() {
    let config = DerivationConfig::from_json_str("{}").unwrap();
    assert_eq!(config, DerivationConfig::v0());
}

#[test]
fn partial_keys_keep_remaining_defaults() {
    let config = DerivationConfig::from_json_str(r#"{"keys": {"ward": "district"}}"#).unwrap();
    assert_eq!(config.keys.ward, "district");
    assert_eq!(config.keys.prefecture, "prefecture");
}

#[test]
fn zero_sizes_are_rejected() {
    let err = DerivationConfig::from_json_str(r#"{"ngram_size": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNgramSize(0)));

    let err = DerivationConfig::from_json_str(r#"{"geocell_precision": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidGeocellPrecision(0)));
}

#[test]
fn empty_key_is_rejected() {
    let err = DerivationConfig::from_json_str(r#"{"keys": {"ward": ""}}"#).unwrap_err();
    match err {
        ConfigError::EmptyKey(field) => assert_eq!(field, "ward"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repeated_fields_keep_first_occurrence() {
    let config = DerivationConfig::from_json_str(
        r#"{"fields": ["geocell", "nameBigram", "geocell", "recurringDates"]}"#,
    )
    .unwrap();
    assert_eq!(
        config.fields,
        vec![FieldKey::Geocell, FieldKey::NameBigram, FieldKey::RecurringDates]
    );
}

#[test]
fn unknown_field_key_is_a_serialization_error() {
    let err = DerivationConfig::from_json_str(r#"{"fields": ["wordTrigram"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Serialization(_)));
}

#[test]
fn config_loads_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("derive.json");

    let mut expected = DerivationConfig::v0();
    expected.geocell_precision = 9;
    expected.keys.latitude = "lat".into();
    fs::write(&path, serde_json::to_vec_pretty(&expected).unwrap()).unwrap();

    let loaded = DerivationConfig::from_path(&path).unwrap();
    assert_eq!(loaded, expected);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = DerivationConfig::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_file_is_serialization_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = DerivationConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Serialization(_)));
}
