//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use notion_export::config::{load_config, load_config_or_default, ChildPolicy, UnknownBlockPolicy};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "NOTION_EXPORT_APPLICATION_LOG_LEVEL",
        "NOTION_EXPORT_NOTION_API_KEY",
        "NOTION_EXPORT_NOTION_PAGE_SIZE",
        "NOTION_EXPORT_NOTION_PAGE_DELAY_MS",
        "NOTION_EXPORT_EXPORT_CHILD_PAGES",
        "NOTION_EXPORT_EXPORT_INDEX",
        "TEST_NOTION_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[notion]
base_url = "http://localhost:8080"
api_version = "2021-08-16"
api_key = "secret_from_file"
user_agent = "notion-export/0.3"
timeout_seconds = 20
page_size = 50
page_delay_ms = 0

[export]
child_pages = "section"
unknown_blocks = "skip"
index = true

[export.frontmatter]
layout = "post"
draft = false

[logging]
local_enabled = true
local_path = "/tmp/notion-export-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.notion.base_url, "http://localhost:8080");
    assert_eq!(config.notion.api_version, "2021-08-16");
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret().to_string(),
        "secret_from_file"
    );
    assert_eq!(config.notion.user_agent, "notion-export/0.3");
    assert_eq!(config.notion.timeout_seconds, 20);
    assert_eq!(config.notion.page_size, 50);
    assert_eq!(config.notion.page_delay_ms, 0);
    assert_eq!(config.export.child_pages, ChildPolicy::Section);
    assert_eq!(config.export.unknown_blocks, UnknownBlockPolicy::Skip);
    assert!(config.export.index);
    assert_eq!(
        config.export.frontmatter.get("layout"),
        Some(&serde_json::Value::String("post".to_string()))
    );
    assert_eq!(
        config.export.frontmatter.get("draft"),
        Some(&serde_json::Value::Bool(false))
    );
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.notion.base_url, "https://api.notion.com");
    assert_eq!(config.notion.api_version, "2021-05-13");
    assert_eq!(config.notion.user_agent, "curl/7.64.1");
    assert_eq!(config.notion.timeout_seconds, 5);
    assert_eq!(config.notion.page_size, 100);
    assert_eq!(config.notion.page_delay_ms, 300);
    assert!(config.notion.api_key.is_none());
    assert_eq!(config.export.child_pages, ChildPolicy::Inline);
    assert_eq!(config.export.unknown_blocks, UnknownBlockPolicy::Error);
    assert!(!config.export.index);
    assert!(config.export.frontmatter.is_empty());
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_NOTION_TOKEN", "secret_substituted");

    let file = write_config(
        r#"
# api_key = "${NOT_SET_ANYWHERE}"
[notion]
api_key = "${TEST_NOTION_TOKEN}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret().to_string(),
        "secret_substituted"
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[notion]
api_key = "${TEST_NOTION_TOKEN}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_NOTION_TOKEN"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("NOTION_EXPORT_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("NOTION_EXPORT_NOTION_PAGE_SIZE", "25");
    std::env::set_var("NOTION_EXPORT_EXPORT_CHILD_PAGES", "section");
    std::env::set_var("NOTION_EXPORT_EXPORT_INDEX", "true");

    let file = write_config(
        r#"
[application]
log_level = "debug"

[notion]
page_size = 100
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.notion.page_size, 25);
    assert_eq!(config.export.child_pages, ChildPolicy::Section);
    assert!(config.export.index);

    cleanup_env_vars();
}

#[test]
fn test_overrides_apply_without_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("NOTION_EXPORT_NOTION_API_KEY", "secret_env");
    std::env::set_var("NOTION_EXPORT_NOTION_PAGE_DELAY_MS", "0");

    let config = load_config_or_default(None).unwrap();
    assert_eq!(
        config.notion.api_key.as_ref().unwrap().expose_secret().to_string(),
        "secret_env"
    );
    assert_eq!(config.notion.page_delay_ms, 0);

    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[notion]
page_size = 500
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("page_size"));

    let file = write_config(
        r#"
[export]
child_pages = "nested"
"#,
    );
    assert!(load_config(file.path()).is_err());

    let file = write_config(
        r#"
[notion]
base_url = "ftp://example.com"
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/notion-export.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
