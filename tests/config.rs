//! config.toml 로드/저장 테스트.
use unit_converter::category::Category;
use unit_converter::config::{load_or_builtin, load_or_default, Config, ConfigError};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(load_or_default(&path).unwrap(), cfg);
}

#[test]
fn saved_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        default_category: Category::DataStorage,
        decimal_places: 2,
    };
    cfg.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("default_category = \"data_storage\""), "{text}");
    assert_eq!(load_or_default(&path).unwrap(), cfg);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_category = \"temperature\"\n").unwrap();
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg.default_category, Category::Temperature);
    assert_eq!(cfg.decimal_places, 4);
}

#[test]
fn invalid_files_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimal_places = 40\n").unwrap();
    assert!(matches!(load_or_default(&path), Err(ConfigError::Invalid(_))));

    std::fs::write(&path, "default_category = \"volume\"\n").unwrap();
    assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn builtin_load_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    assert_eq!(load_or_builtin(&path).unwrap(), Config::default());
    assert!(!path.exists());

    std::fs::write(&path, "decimal_places = 2\n").unwrap();
    assert_eq!(load_or_builtin(&path).unwrap().decimal_places, 2);
}
