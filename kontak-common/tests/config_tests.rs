//! Unit tests for bootstrap configuration
//!
//! Covers TOML parsing, file loading and the priority order
//! (overrides > TOML > compiled defaults).
//!
//! Note: Uses serial_test for tests that change XDG_CONFIG_HOME.

use kontak_common::config::{
    default_config_path, load_toml_config, parse_toml_config, Overrides, Settings, TomlConfig,
    DEFAULT_PORT,
};
use kontak_common::Error;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_parse_full_toml() {
    let config = parse_toml_config(
        r#"
        database_path = "/var/lib/kontak/kontak.db"
        port = 8081
        bind_address = "0.0.0.0"
        session_ttl_secs = 30
        static_assets = "/srv/kontak/public"

        [logging]
        level = "debug"
        "#,
    )
    .expect("Should parse");

    assert_eq!(config.database_path, Some(PathBuf::from("/var/lib/kontak/kontak.db")));
    assert_eq!(config.port, Some(8081));
    assert_eq!(config.bind_address.as_deref(), Some("0.0.0.0"));
    assert_eq!(config.session_ttl_secs, Some(30));
    assert_eq!(config.static_assets, Some(PathBuf::from("/srv/kontak/public")));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_parse_malformed_toml_is_config_error() {
    let result = parse_toml_config("port = \"not a number\"");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_overrides_beat_toml() {
    let toml = parse_toml_config("port = 8081\nsession_ttl_secs = 30").unwrap();
    let overrides = Overrides {
        port: Some(9000),
        ..Default::default()
    };

    let settings = Settings::resolve(overrides, toml);

    assert_eq!(settings.port, 9000);
    // Not overridden: TOML value survives
    assert_eq!(settings.session_ttl, Duration::from_secs(30));
}

#[test]
fn test_toml_beats_defaults() {
    let toml = parse_toml_config("database_path = \"/tmp/kontak-test.db\"").unwrap();
    let settings = Settings::resolve(Overrides::default(), toml);

    assert_eq!(settings.database_path, PathBuf::from("/tmp/kontak-test.db"));
    assert_eq!(settings.port, DEFAULT_PORT);
}

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 4242").unwrap();

    let config = load_toml_config(Some(file.path())).expect("Should load");
    assert_eq!(config.port, Some(4242));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = load_toml_config(Some(&missing));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
#[serial]
#[cfg(target_os = "linux")]
fn test_missing_default_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    assert_eq!(
        default_config_path(),
        Some(dir.path().join("kontak").join("config.toml"))
    );

    let config = load_toml_config(None).expect("Missing default file is not an error");
    assert!(config.port.is_none());

    std::env::remove_var("XDG_CONFIG_HOME");
}

#[test]
#[serial]
#[cfg(target_os = "linux")]
fn test_default_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("kontak")).unwrap();
    std::fs::write(dir.path().join("kontak").join("config.toml"), "port = 5151\n").unwrap();
    std::env::set_var("XDG_CONFIG_HOME", dir.path());

    let config = load_toml_config(None).expect("Should load default file");
    assert_eq!(config.port, Some(5151));

    std::env::remove_var("XDG_CONFIG_HOME");
}

#[test]
fn test_default_toml_config_is_empty() {
    let config = TomlConfig::default();
    assert!(config.database_path.is_none());
    assert_eq!(config.logging.level, "info");
}
