//! Content source trait definition
//!
//! The export pipeline depends on this trait rather than on the HTTP client,
//! so the same coordinator runs against the live API or an in-memory source.

use crate::domain::{Block, BlockId, CursorPage, DatabaseId, Entry, Result};
use async_trait::async_trait;

/// A paginated provider of database entries and their content blocks
///
/// Both methods return one page per call. `cursor` is `None` for the first
/// page and the previous page's `next_cursor` afterwards.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one page of entries from a database query
    async fn query_database(
        &self,
        database: &DatabaseId,
        cursor: Option<String>,
    ) -> Result<CursorPage<Entry>>;

    /// Fetch one page of child blocks of a page or block
    async fn list_children(
        &self,
        parent: &BlockId,
        cursor: Option<String>,
    ) -> Result<CursorPage<Block>>;
}
