//! External system integrations.
//!
//! - [`notion`] - Notion REST API integration
//!
//! The export pipeline is written against the [`notion::ContentSource`]
//! trait, so tests can substitute an in-memory source for the HTTP client:
//!
//! ```rust,no_run
//! use notion_export::adapters::notion::NotionClient;
//! use notion_export::config::{secret_string, NotionConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NotionConfig {
//!     api_key: Some(secret_string("secret_abc".to_string())),
//!     ..Default::default()
//! };
//! let client = NotionClient::new(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod notion;
