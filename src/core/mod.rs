//! Core export pipeline.
//!
//! # Modules
//!
//! - [`paginate`] - Cursor pagination over any page-at-a-time fetch
//! - [`convert`] - Block to Markdown conversion
//! - [`children`] - Folding fetched children into their parent block
//! - [`writer`] - Frontmatter and file output
//! - [`export`] - Orchestration and summary
//!
//! # Example
//!
//! ```rust,no_run
//! use notion_export::adapters::notion::NotionClient;
//! use notion_export::config::ExporterConfig;
//! use notion_export::core::export::{ExportCoordinator, ExportSettings};
//! use notion_export::domain::DatabaseId;
//!
//! # async fn example(config: ExporterConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let client = NotionClient::new(&config.notion)?;
//! let settings = ExportSettings::from_config(&config, "./content");
//! let coordinator = ExportCoordinator::new(client, settings);
//!
//! let db = DatabaseId::new("668d797c76fa49349b05ad288df2d136")?;
//! let summary = coordinator.execute_export(&db).await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod children;
pub mod convert;
pub mod export;
pub mod paginate;
pub mod writer;
