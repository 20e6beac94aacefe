//! Integration tests for pashu-config

use pashu_config::*;
use pashu_i18n::Language;
use std::fs;

#[test]
fn test_load_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pashu.toml");
    fs::write(
        &path,
        r#"
default_language = "hi"
login_latency_ms = 10
recognition_latency_ms = 20
seed = 99
"#,
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_file(&path, FileFormat::Toml).unwrap();

    let config = AppConfig::from_manager(&manager).unwrap();
    assert_eq!(config.default_language, Language::Hindi);
    assert_eq!(config.login_latency_ms, 10);
    assert_eq!(config.recognition_latency_ms, 20);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pashu.json");
    fs::write(&path, r#"{"locales_dir": "locales", "seed": 1}"#).unwrap();

    let manager = ConfigManager::new();
    manager.load_file(&path, FileFormat::Json).unwrap();

    let config = AppConfig::from_manager(&manager).unwrap();
    assert_eq!(config.locales_dir.as_deref(), Some(std::path::Path::new("locales")));
    assert_eq!(config.login_latency_ms, 1000);
}

#[test]
fn test_json_array_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pashu.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let result = ConfigManager::new().load_file(&path, FileFormat::Json);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_missing_file() {
    let result = ConfigManager::new().load_file("/no/such/pashu.toml", FileFormat::Toml);
    assert!(matches!(result, Err(ConfigError::LoadError(_))));
}

#[test]
fn test_app_config_load_with_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pashu.toml");
    fs::write(&path, "recognition_latency_ms = 5\n").unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert!(config.recognition_latency_ms <= 60_000);
}

#[test]
fn test_bad_language_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pashu.toml");
    fs::write(&path, "default_language = \"ta\"\n").unwrap();

    let manager = ConfigManager::new();
    manager.load_file(&path, FileFormat::Toml).unwrap();
    assert!(matches!(
        AppConfig::from_manager(&manager),
        Err(ConfigError::ValidationError(_))
    ));
}
