//! Tests for TOML configuration loading.

use std::io::Write;
use std::path::PathBuf;
use strictly_history::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.log_file(), &PathBuf::from("strictly_history.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(*config.show_headers());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_headers = false").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(!*config.show_headers());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strictly_history.toml");
    std::fs::write(
        &path,
        "log_file = \"/tmp/game.log\"\nlog_filter = \"debug\"\nshow_headers = true\n",
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_parse_error_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_headers = \"sometimes\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
