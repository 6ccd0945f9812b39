//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so this
//! file holds a single test that initializes it.

use notion_export::config::LoggingConfig;
use notion_export::logging::init_logging;
use notion_export::logging::structured::LOG_FILE_NAME;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_creates_log() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(target: "notion_export", "integration test message");
    drop(guard);

    assert!(log_path.is_dir());
    let names: Vec<String> = std::fs::read_dir(&log_path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(names.iter().any(|name| name.starts_with(LOG_FILE_NAME)));
}

#[test]
fn test_invalid_level_is_rejected_before_install() {
    let config = LoggingConfig::default();
    assert!(init_logging("loud", &config).is_err());
}
