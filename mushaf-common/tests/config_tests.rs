//! Config file resolution and graceful degradation
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that touch MUSHAF_* variables are marked with #[serial].

use mushaf_common::config::{
    default_config_path, load_or_default, load_toml_config, resolve_config_path, resolve_value,
    TomlConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME,
};
use mushaf_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = load_or_default(Some(&path)).expect("missing file is not fatal");
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_no_path_yields_defaults() {
    let config = load_or_default(None).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_valid_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = 6001").unwrap();
    writeln!(file, "track_error_policy = \"skip\"").unwrap();
    writeln!(file, "[logging]").unwrap();
    writeln!(file, "level = \"mushaf_reader=debug\"").unwrap();

    let config = load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.port, Some(6001));
    assert_eq!(config.track_error_policy.as_deref(), Some("skip"));
    assert_eq!(config.logging.level, "mushaf_reader=debug");
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number").unwrap();

    let err = load_or_default(Some(file.path())).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {:?}", err);
}

#[test]
fn test_load_toml_config_on_missing_file_is_io_error() {
    let err = load_toml_config(&PathBuf::from("/nonexistent/mushaf.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_default_path_ends_with_file_name() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with(PathBuf::from("mushaf").join(CONFIG_FILE_NAME)));
    }
}

#[test]
#[serial]
fn test_env_var_selects_config_path() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/mushaf-env.toml");

    assert_eq!(
        resolve_config_path(None),
        Some(PathBuf::from("/tmp/mushaf-env.toml"))
    );

    // Explicit argument still wins
    let explicit = PathBuf::from("/tmp/explicit.toml");
    assert_eq!(resolve_config_path(Some(&explicit)), Some(explicit));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_blank_env_var_falls_back_to_platform_default() {
    env::set_var(CONFIG_ENV_VAR, "   ");
    assert_eq!(resolve_config_path(None), default_config_path());
    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_value_priority() {
    const VAR: &str = "MUSHAF_TEST_RESOLVE_PORT";
    env::remove_var(VAR);

    // Default only
    assert_eq!(resolve_value::<u16>(None, VAR, None, 5780), 5780);

    // TOML beats default
    assert_eq!(resolve_value(None, VAR, Some(6000u16), 5780), 6000);

    // Environment beats TOML
    env::set_var(VAR, "6100");
    assert_eq!(resolve_value(None, VAR, Some(6000u16), 5780), 6100);

    // CLI beats everything
    assert_eq!(resolve_value(Some(6200u16), VAR, Some(6000), 5780), 6200);

    env::remove_var(VAR);
}

#[test]
#[serial]
fn test_unparseable_env_value_is_ignored() {
    const VAR: &str = "MUSHAF_TEST_RESOLVE_BAD";
    env::set_var(VAR, "eighty");

    assert_eq!(resolve_value(None, VAR, Some(8080u16), 5780), 8080);

    env::remove_var(VAR);
}
