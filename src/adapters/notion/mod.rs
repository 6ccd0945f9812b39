//! Notion adapter implementation
//!
//! This module provides the integration with the Notion REST API: the
//! [`ContentSource`] seam used by the export pipeline, the HTTP client that
//! implements it, and the wire models.

pub mod client;
pub mod models;
pub mod source;

pub use client::NotionClient;
pub use models::{ListResponse, RawBlock, RawPage, RawRichText};
pub use source::ContentSource;
