use todopad::config::{Config, StorageBackend};
use todopad::{Filter, Priority};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert!(config.storage.data_dir.is_none());
    assert_eq!(config.defaults.priority, Priority::Medium);
    assert_eq!(config.defaults.filter, Filter::All);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    config.storage.data_dir = Some(std::path::PathBuf::new());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("backend = \"file\""));
    assert!(toml_str.contains("priority = \"medium\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[storage]
backend = "memory"

[defaults]
filter = "active"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.defaults.filter, Filter::Active);

    // Unspecified values use defaults
    assert_eq!(config.defaults.priority, Priority::Medium);
    assert!(!config.logging.enabled);
}

#[test]
fn test_unknown_backend_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[storage]\nbackend = \"sqlite\"\n");
    assert!(result.is_err());
}

#[test]
fn test_load_and_generate_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Todopad Configuration File"));
    assert!(content.contains("# Storage backend: \"file\" or \"memory\""));
    assert!(content.contains("# Minimum log level"));
    assert!(content.contains("# Priority preselected"));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.storage.backend, StorageBackend::File);
}

#[test]
fn test_load_invalid_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}
