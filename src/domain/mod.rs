//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DatabaseId`], [`BlockId`])
//! - **Content models** ([`Entry`], [`Block`], [`TextRun`])
//! - **Output model** ([`Document`], [`Frontmatter`])
//! - **Pagination** ([`CursorPage`])
//! - **Error types** ([`ExportError`], [`RequestError`]) and the [`Result`] alias
//!
//! ```rust
//! use notion_export::domain::{DatabaseId, ExportError};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseId::new("668d797c76fa49349b05ad288df2d136")?;
//! # Ok(())
//! # }
//! ```

pub mod block;
pub mod cursor;
pub mod document;
pub mod entry;
pub mod errors;
pub mod ids;
pub mod result;

pub use block::{Annotations, Block, BlockKind, HeadingLevel, TextRun};
pub use cursor::CursorPage;
pub use document::{Document, Frontmatter};
pub use entry::Entry;
pub use errors::{ExportError, RequestError};
pub use ids::{BlockId, DatabaseId};
pub use result::Result;
