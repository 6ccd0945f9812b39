//! Configuration management for the exporter.
//!
//! Most runs need no configuration file at all: the command line supplies the
//! database, output directory and API key. A TOML file can be given with
//! `--config` to change API settings, child page rendering, unknown block
//! handling, extra frontmatter and file logging.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [notion]
//! api_key = "${NOTION_API_KEY}"
//! api_version = "2021-05-13"
//! page_size = 100
//! page_delay_ms = 300
//!
//! [export]
//! child_pages = "section"
//! unknown_blocks = "skip"
//!
//! [export.frontmatter]
//! layout = "post"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted when the file is read, and any
//! setting can be overridden with `NOTION_EXPORT_<SECTION>_<KEY>`:
//!
//! ```bash
//! export NOTION_EXPORT_NOTION_PAGE_DELAY_MS=0
//! export NOTION_EXPORT_EXPORT_CHILD_PAGES=inline
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, ChildPolicy, ExportConfig, ExporterConfig, LoggingConfig, NotionConfig,
    UnknownBlockPolicy,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
