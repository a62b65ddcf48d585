//! Unit tests for loading and saving the canvas configuration.

use design_canvas::{ConfigError, LayoutConfig};
use tempfile::TempDir;

#[test]
fn test_save_then_load_preserves_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("layout.json");

    let config = LayoutConfig {
        border_width: 2,
        margin_step: 4,
        drag_threshold: 12,
        ..LayoutConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = LayoutConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = LayoutConfig::load_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, LayoutConfig::default());
}

#[test]
fn test_malformed_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = LayoutConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "got {:?}", err);
}

#[test]
fn test_zero_margin_step_is_rejected() {
    let err = LayoutConfig::from_json(r#"{ "margin_step": 0 }"#).unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "margin_step"),
        other => panic!("expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_error_messages_name_the_field() {
    let err = LayoutConfig::from_json(r#"{ "dimension_font_size": -1.0 }"#).unwrap_err();
    assert!(err.to_string().contains("dimension_font_size"));
}
