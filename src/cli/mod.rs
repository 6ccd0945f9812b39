//! CLI interface and argument parsing
//!
//! The command line is a single invocation with positional arguments:
//!
//! ```text
//! notion-export DATABASE [OUTPUT_PATH] [USER_AGENT] [HTTP_TIMEOUT] [KEY]
//! ```
//!
//! Command line values override the configuration file and environment.

pub mod export;

use crate::config::{
    load_config_or_default, secret_string, ChildPolicy, ExporterConfig, UnknownBlockPolicy,
};
use crate::domain::{ExportError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Export a Notion database to Markdown files with frontmatter
#[derive(Parser, Debug)]
#[command(name = "notion-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database id (32 hex digits, hyphens allowed)
    #[arg(value_name = "DATABASE")]
    pub database: String,

    /// Directory to write Markdown files into
    #[arg(value_name = "OUTPUT_PATH", default_value = ".", value_parser = parse_output_dir)]
    pub output_path: PathBuf,

    /// User-Agent header sent with every request [default: curl/7.64.1]
    #[arg(value_name = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds [default: 5]
    #[arg(value_name = "HTTP_TIMEOUT")]
    pub http_timeout: Option<u64>,

    /// Notion integration token
    #[arg(value_name = "KEY", env = "NOTION_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Extra frontmatter fields as a JSON object
    #[arg(long, value_name = "JSON")]
    pub frontmatter: Option<String>,

    /// Write every entry to index.md instead of a title-derived file name
    #[arg(long)]
    pub index: bool,

    /// How blocks with children are rendered (inline, section)
    #[arg(long, value_name = "POLICY")]
    pub child_pages: Option<ChildPolicy>,

    /// What to do with unsupported block types (error, skip)
    #[arg(long, value_name = "POLICY")]
    pub unknown_blocks: Option<UnknownBlockPolicy>,

    /// Pause between paginated requests, in milliseconds
    #[arg(long, value_name = "MS")]
    pub page_delay_ms: Option<u64>,

    /// Path to configuration file
    #[arg(short, long, env = "NOTION_EXPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the configuration file (if any), apply environment and command
    /// line overrides, and validate the result
    pub fn resolve_config(&self) -> Result<ExporterConfig> {
        let mut config = load_config_or_default(self.config.as_deref())?;
        self.apply_overrides(&mut config)?;
        config.validate().map_err(|e| {
            ExportError::Configuration(format!("Configuration validation failed: {e}"))
        })?;
        Ok(config)
    }

    /// Apply command line values on top of `config`
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Validation`] when `--frontmatter` is not a JSON
    /// object.
    pub fn apply_overrides(&self, config: &mut ExporterConfig) -> Result<()> {
        if let Some(level) = &self.log_level {
            config.application.log_level = level.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.notion.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.http_timeout {
            config.notion.timeout_seconds = timeout;
        }
        if let Some(key) = self.key.as_ref().filter(|k| !k.is_empty()) {
            config.notion.api_key = Some(secret_string(key.clone()));
        }
        if let Some(delay) = self.page_delay_ms {
            config.notion.page_delay_ms = delay;
        }
        if let Some(policy) = self.child_pages {
            config.export.child_pages = policy;
        }
        if let Some(policy) = self.unknown_blocks {
            config.export.unknown_blocks = policy;
        }
        if self.index {
            config.export.index = true;
        }
        if let Some(raw) = &self.frontmatter {
            let extra = parse_frontmatter(raw)?;
            config.export.frontmatter.extend(extra);
        }
        Ok(())
    }
}

/// Parse the `--frontmatter` value
pub fn parse_frontmatter(raw: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| ExportError::Validation(format!("--frontmatter is not valid JSON: {e}")))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(ExportError::Validation(format!(
            "--frontmatter must be a JSON object, got {other}"
        ))),
    }
}

fn parse_output_dir(raw: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    if !path.exists() {
        return Err(format!("output path '{raw}' does not exist"));
    }
    if !path.is_dir() {
        return Err(format!("output path '{raw}' is not a directory"));
    }
    Ok(path)
}
