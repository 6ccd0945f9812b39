//! # notion-export
//!
//! Exports every entry of a Notion database to a directory of Markdown files,
//! one file per entry, each starting with a frontmatter block.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pagination, block conversion, child rendering, file output
//! - [`adapters`] - Notion REST API client
//! - [`domain`] - Identifiers, content model, output model, errors
//! - [`config`] - Optional TOML configuration with environment overrides
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notion_export::adapters::notion::NotionClient;
//! use notion_export::config::{secret_string, ExporterConfig};
//! use notion_export::core::export::{ExportCoordinator, ExportSettings};
//! use notion_export::domain::DatabaseId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = ExporterConfig::default();
//!     config.notion.api_key = Some(secret_string(std::env::var("NOTION_API_KEY")?));
//!
//!     let client = NotionClient::new(&config.notion)?;
//!     let coordinator = ExportCoordinator::new(client, ExportSettings::from_config(&config, "./content"));
//!
//!     let db = DatabaseId::new("668d797c76fa49349b05ad288df2d136")?;
//!     let summary = coordinator.execute_export(&db).await?;
//!     println!("Exported {} entries", summary.entries_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! ```text
//! ---
//! title: My Page
//! page_id: 1f2e...
//! last_modified_time: 2021-05-13T09:15:00.000Z
//! ---
//! # Heading
//! Paragraph text with a [link](https://example.com)
//! * list item
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
