/// Integration tests for configuration loading
///
/// Tests that verify config loading from files and environment variables.

use serial_test::serial;
use std::fs;
use tetrasym_core::Pacing;
use tetrasym_terminal::{AppConfig, AppError};

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path().join("absent")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[timer]\ninterval_secs = 3.0\nauto_cycle = true\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("user.toml"),
        "[timer]\nauto_cycle = false\n\n[cycler.pacing]\nmode = \"per_frame\"\nblend = 0.2\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.timer.interval_secs, 3.0);
    assert!(!config.timer.auto_cycle);
    assert_eq!(config.cycler.pacing, Pacing::PerFrame { blend: 0.2 });
}

#[test]
#[serial]
fn test_env_override() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), "[timer]\ninterval_secs = 3.0\n").unwrap();

    std::env::set_var("TETRASYM_TIMER__INTERVAL_SECS", "1.25");
    let config = AppConfig::load_from(dir.path());
    std::env::remove_var("TETRASYM_TIMER__INTERVAL_SECS");

    assert_eq!(config.unwrap().timer.interval_secs, 1.25);
}

#[test]
#[serial]
fn test_malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), "[timer]\ninterval_secs = \"soon\"\n").unwrap();

    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, AppError::Load(_)));
}

#[test]
#[serial]
fn test_repository_defaults_are_valid() {
    let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../config");
    let config = AppConfig::load_from(dir).unwrap();
    config.validate().unwrap();
    assert_eq!(config, AppConfig::default());
}
