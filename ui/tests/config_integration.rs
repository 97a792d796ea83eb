use claims::*;
use engine::catalog::{SortKey, ViewMode};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use vitrine::config::{AppConfig, ConfigLoadResult, ConfigValidationError, load_config_without_dotenv};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn load(content: &str) -> AppConfig {
    let file = write_config(content);
    match load_config_without_dotenv(Some(file.path())) {
        ConfigLoadResult::Success(config) => *config,
        ConfigLoadResult::LoadError(e) | ConfigLoadResult::DeserializeError(e) => {
            panic!("config should load: {e}")
        }
    }
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = load("");

    assert_ok!(config.validate());
    assert_none!(config.theme().default_key());
    assert!(config.theme().persist());
    assert_eq!(config.theme().timings().apply_delay, Duration::from_millis(150));
    assert_eq!(config.catalog().default_view(), ViewMode::Grid);
    assert_eq!(config.catalog().default_sort(), SortKey::Name);
    assert_eq!(config.ui().cell_width_px(), 8);
    assert_eq!(config.logging().level(), "info");
}

#[test]
fn test_sections_are_read() {
    let config = load(
        r#"
[theme]
default_key = "theme2"
apply_delay_ms = 0
persist = false

[catalog]
products_path = "fixtures/products.json"
default_view = "list"
default_sort = "price"

[ui]
cell_width_px = 10

[logging]
level = "debug"
"#,
    );

    assert_ok!(config.validate());
    assert_eq!(config.theme().default_key(), Some("theme2"));
    assert_eq!(config.theme().timings().apply_delay, Duration::ZERO);
    assert!(!config.theme().persist());
    assert_eq!(
        config.catalog().products_path(),
        std::path::Path::new("fixtures/products.json")
    );
    assert_eq!(config.catalog().default_view(), ViewMode::List);
    assert_eq!(config.catalog().default_sort(), SortKey::Price);
    assert_eq!(config.ui().cell_width_px(), 10);
    assert_eq!(config.logging().level(), "debug");
}

#[test]
fn test_validation_collects_every_problem() {
    let config = load(
        r#"
[theme]
default_key = "Not A Key"
settle_delay_ms = 60000

[ui]
cell_width_px = 1
poll_timeout_ms = 0

[logging]
level = "loud"
"#,
    );

    let errors = assert_err!(config.validate());
    assert_eq!(errors.len(), 5);
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigValidationError::DefaultThemeKey { .. })));
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigValidationError::TransitionDelay { name: "settle_delay_ms", .. }
    )));
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigValidationError::CellWidth { configured: 1, .. })));
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigValidationError::LogLevel { .. })));
}

#[test]
fn test_user_messages_name_the_setting() {
    let config = load("[ui]\nworker_tasks = 0\n");

    let errors = assert_err!(config.validate());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].user_message().contains("worker_tasks"));
}

#[test]
fn test_runtime_overrides() {
    let mut config = load("[logging]\nlevel = \"warn\"\n");

    config.disable_persistence();
    config.override_log_level("trace".to_string());

    assert!(!config.theme().persist());
    assert_eq!(config.logging().level(), "trace");
}

#[test]
fn test_unknown_enum_value_is_a_deserialize_error() {
    let file = write_config("[catalog]\ndefault_view = \"carousel\"\n");
    assert_matches!(
        load_config_without_dotenv(Some(file.path())),
        ConfigLoadResult::DeserializeError(_)
    );
}

#[test]
fn test_missing_explicit_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    assert_matches!(
        load_config_without_dotenv(Some(&dir.path().join("absent.toml"))),
        ConfigLoadResult::LoadError(_)
    );
}
