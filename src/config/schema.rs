//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the optional
//! TOML file. Every field has a default so an empty file is valid.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How blocks with nested children are folded into the parent page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChildPolicy {
    /// Converted children are appended directly after their parent
    #[default]
    Inline,
    /// Children are rendered to HTML inside a `<section>` element
    Section,
}

impl FromStr for ChildPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inline" => Ok(ChildPolicy::Inline),
            "section" => Ok(ChildPolicy::Section),
            _ => Err(format!(
                "Invalid child page policy '{s}'. Must be one of: inline, section"
            )),
        }
    }
}

impl fmt::Display for ChildPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildPolicy::Inline => write!(f, "inline"),
            ChildPolicy::Section => write!(f, "section"),
        }
    }
}

/// What to do with block types that have no Markdown mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownBlockPolicy {
    /// Abort the export with an unsupported-block error
    #[default]
    Error,
    /// Drop the block and log a warning
    Skip,
}

impl FromStr for UnknownBlockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(UnknownBlockPolicy::Error),
            "skip" => Ok(UnknownBlockPolicy::Skip),
            _ => Err(format!(
                "Invalid unknown block policy '{s}'. Must be one of: error, skip"
            )),
        }
    }
}

impl fmt::Display for UnknownBlockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownBlockPolicy::Error => write!(f, "error"),
            UnknownBlockPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Main exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Notion API connection settings
    #[serde(default)]
    pub notion: NotionConfig,

    /// Export behaviour
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.notion.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Notion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionConfig {
    /// API host, without the `/v1` path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Integration token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// Results requested per page (API maximum is 100)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Pause between paginated requests in milliseconds (0 disables)
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            api_key: None,
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            page_size: default_page_size(),
            page_delay_ms: default_page_delay_ms(),
        }
    }
}

impl NotionConfig {
    fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("notion.base_url '{}' is not a valid URL: {e}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "notion.base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.api_version.trim().is_empty() {
            return Err("notion.api_version cannot be empty".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("notion.user_agent cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("notion.timeout_seconds must be greater than 0".to_string());
        }

        if self.connect_timeout_seconds == 0 {
            return Err("notion.connect_timeout_seconds must be greater than 0".to_string());
        }

        if !(1..=100).contains(&self.page_size) {
            return Err(format!(
                "notion.page_size must be between 1 and 100, got {}",
                self.page_size
            ));
        }

        Ok(())
    }
}

/// Export behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Child block handling
    #[serde(default)]
    pub child_pages: ChildPolicy,

    /// Unknown block handling
    #[serde(default)]
    pub unknown_blocks: UnknownBlockPolicy,

    /// Write every entry to `index.md` instead of a title-derived name
    #[serde(default)]
    pub index: bool,

    /// Extra frontmatter fields appended to every document
    #[serde(default)]
    pub frontmatter: serde_json::Map<String, serde_json::Value>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://api.notion.com".to_string()
}

fn default_api_version() -> String {
    "2021-05-13".to_string()
}

fn default_user_agent() -> String {
    "curl/7.64.1".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

fn default_connect_timeout_seconds() -> u64 {
    5
}

fn default_page_size() -> u32 {
    100
}

fn default_page_delay_ms() -> u64 {
    300
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
