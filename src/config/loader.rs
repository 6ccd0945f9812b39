//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use crate::config::secret_string_opt;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "NOTION_EXPORT";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ExporterConfig
/// 4. Applies environment variable overrides (NOTION_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use notion_export::config::loader::load_config;
///
/// let config = load_config("notion-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "Loaded configuration file");

    Ok(config)
}

/// Loads the configuration file if one was given, otherwise starts from
/// defaults. Environment overrides apply in both cases.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ExporterConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = ExporterConfig::default();
            apply_env_overrides(&mut config)?;
            config.validate().map_err(|e| {
                ExportError::Configuration(format!("Configuration validation failed: {}", e))
            })?;
            Ok(config)
        }
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

/// Applies environment variable overrides using the NOTION_EXPORT_* prefix
///
/// Variables follow the pattern NOTION_EXPORT_<SECTION>_<KEY>, for example
/// NOTION_EXPORT_NOTION_PAGE_SIZE or NOTION_EXPORT_EXPORT_CHILD_PAGES.
/// Unparseable numeric and boolean values are ignored; unparseable policies
/// are a configuration error.
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Notion overrides
    if let Some(val) = env_override("NOTION", "BASE_URL") {
        config.notion.base_url = val;
    }
    if let Some(val) = env_override("NOTION", "API_VERSION") {
        config.notion.api_version = val;
    }
    if let Some(val) = env_override("NOTION", "API_KEY") {
        if let Some(key) = secret_string_opt(Some(val)) {
            config.notion.api_key = Some(key);
        }
    }
    if let Some(val) = env_override("NOTION", "USER_AGENT") {
        config.notion.user_agent = val;
    }
    if let Some(val) = env_override("NOTION", "TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.notion.timeout_seconds = secs;
        }
    }
    if let Some(val) = env_override("NOTION", "PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.notion.page_size = size;
        }
    }
    if let Some(val) = env_override("NOTION", "PAGE_DELAY_MS") {
        if let Ok(delay) = val.parse() {
            config.notion.page_delay_ms = delay;
        }
    }

    // Export overrides
    if let Some(val) = env_override("EXPORT", "CHILD_PAGES") {
        config.export.child_pages = val.parse().map_err(ExportError::Configuration)?;
    }
    if let Some(val) = env_override("EXPORT", "UNKNOWN_BLOCKS") {
        config.export.unknown_blocks = val.parse().map_err(ExportError::Configuration)?;
    }
    if let Some(val) = env_override("EXPORT", "INDEX") {
        config.export.index = val.parse().unwrap_or(config.export.index);
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(config.logging.local_enabled);
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("LOADER_TEST_TOKEN", "secret_abc");
        let input = "api_key = \"${LOADER_TEST_TOKEN}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"secret_abc\"\n");
        std::env::remove_var("LOADER_TEST_TOKEN");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("LOADER_TEST_MISSING");
        let input = "api_key = \"${LOADER_TEST_MISSING}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("LOADER_TEST_MISSING"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# api_key = \"${LOADER_TEST_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${LOADER_TEST_IN_COMMENT}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(ExportError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[notion]
base_url = "http://localhost:9999"
api_key = "secret_from_file"
page_size = 50
page_delay_ms = 0

[export]
child_pages = "section"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.notion.base_url, "http://localhost:9999");
        assert_eq!(config.notion.page_size, 50);
        assert_eq!(config.notion.page_delay_ms, 0);
        assert_eq!(
            config.notion.api_key.unwrap().expose_secret(),
            "secret_from_file"
        );
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[notion]\npage_size = 500\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }
}
