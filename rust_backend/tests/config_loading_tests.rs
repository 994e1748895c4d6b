//! Integration tests for loading engine configuration from TOML files.

mod support;

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;
use tzgeo_rust::config::{ColorStrategy, EngineConfig};
use tzgeo_rust::{EngineError, TimezoneEngine};

// ==================== Helper Functions ====================

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ==================== from_file ====================

#[test]
fn test_from_file_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "tzgeo.toml",
        r#"
[classification]
business_start_hour = 8
business_end_hour = 18
night_start_hour = 22
night_end_hour = 5
dst_lookahead_hours = 48

[terminator]
longitude_step_deg = 2.5

[color]
strategy = "hue"
saturation = 0.5
lightness = 0.4
"#,
    );

    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(config.classification.business_start_hour, 8);
    assert_eq!(config.classification.dst_lookahead_hours, 48);
    assert_eq!(config.terminator.longitude_step_deg, 2.5);
    assert_eq!(config.color.strategy, ColorStrategy::Hue);
}

#[test]
fn test_from_file_empty_is_default() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "tzgeo.toml", "");
    assert_eq!(EngineConfig::from_file(&path).unwrap(), EngineConfig::default());
}

#[test]
fn test_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, EngineError::Configuration(_)));
}

#[test]
fn test_from_file_rejects_out_of_range_hour() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "[classification]\nnight_start_hour = 24\n");
    let err = EngineConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("night_start_hour"), "{}", err);
}

#[test]
fn test_from_file_rejects_unknown_strategy() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "[color]\nstrategy = \"rainbow\"\n");
    assert!(EngineConfig::from_file(&path).is_err());
}

// ==================== from_default_location ====================

#[test]
fn test_default_location_found_in_current_dir() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "tzgeo.toml", "[terminator]\nlongitude_step_deg = 5.0\n");

    let config = support::with_current_dir(dir.path(), EngineConfig::from_default_location)
        .unwrap();
    assert_eq!(config.terminator.longitude_step_deg, 5.0);
}

#[test]
fn test_default_location_missing() {
    let dir = TempDir::new().unwrap();
    let result = support::with_current_dir(dir.path(), EngineConfig::from_default_location);
    assert!(matches!(result, Err(EngineError::Configuration(_))));
}

// ==================== Engine wiring ====================

/// Test that loaded settings flow into the engine components
#[test]
fn test_config_drives_engine() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "tzgeo.toml",
        "[classification]\nbusiness_start_hour = 14\n\n[terminator]\nlongitude_step_deg = 10.0\n",
    );
    let engine = TimezoneEngine::with_config(EngineConfig::from_file(&path).unwrap()).unwrap();

    // 13:00 BST is no longer inside business hours
    let instant = Utc.with_ymd_and_hms(2024, 6, 17, 12, 0, 0).unwrap();
    assert!(!engine.classify("Europe/London", instant).unwrap().is_business_hours);

    assert_eq!(engine.terminator(instant).curve().len(), 37);
}
