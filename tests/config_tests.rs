use gitmoji_selector::config::{Config, PROJECT_CONFIG_FILENAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.pretty_json);
    assert!(config.color);
    assert!(!config.verbose_logging);
    assert!(!config.is_project_config);
}

#[test]
fn test_load_from_fills_missing_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "color = false\n").expect("Failed to write config");

    let config = Config::load_from(&path).expect("Failed to load config");
    assert!(!config.color);
    assert!(config.pretty_json);
    assert!(!config.verbose_logging);
}

#[test]
fn test_load_from_rejects_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "pretty_json = \"yes\"\n").expect("Failed to write config");

    let err = Config::load_from(&path).expect_err("Invalid config should fail");
    assert!(err.to_string().contains("Invalid configuration file format"));
}

#[test]
fn test_load_from_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    assert!(Config::load_from(&temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("nested").join("config.toml");
    let config = Config {
        pretty_json: false,
        verbose_logging: true,
        ..Config::default()
    };

    config.save_to(&path).expect("Failed to save config");
    let loaded = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_project_config_only_overrides_set_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
    fs::write(&path, "pretty_json = false\n").expect("Failed to write project config");

    let mut config = Config {
        color: false,
        verbose_logging: true,
        ..Config::default()
    };
    config
        .merge_project_file(&path)
        .expect("Failed to merge project config");

    assert!(!config.pretty_json);
    assert!(!config.color);
    assert!(config.verbose_logging);
    assert!(config.is_project_config);
}

#[test]
fn test_project_config_syntax_error() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
    fs::write(&path, "color = ").expect("Failed to write project config");

    let mut config = Config::default();
    let err = config
        .merge_project_file(&path)
        .expect_err("Broken project config should fail");
    assert!(err.to_string().contains(PROJECT_CONFIG_FILENAME));
    assert_eq!(config, Config::default());
}
