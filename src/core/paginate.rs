//! Cursor pagination
//!
//! [`paginate`] turns a "fetch one page at this cursor" function into a lazy
//! stream of items. The first request carries no cursor; each later request
//! carries the previous page's `next_cursor`; the stream ends after the first
//! page without one. The first error ends the stream.

use crate::domain::{CursorPage, ExportError, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;
use std::time::Duration;

enum Position {
    Start,
    Next(String),
    Done,
}

/// Lazily fetch every item behind a cursor-paginated endpoint, in order
///
/// When `delay` is set (and non-zero) the stream sleeps before every request
/// except the first.
///
/// # Example
///
/// ```no_run
/// use futures::TryStreamExt;
/// use notion_export::adapters::notion::{ContentSource, NotionClient};
/// use notion_export::core::paginate::paginate;
/// use notion_export::domain::DatabaseId;
///
/// # async fn example(client: NotionClient) -> notion_export::domain::Result<()> {
/// let db = DatabaseId::new("668d797c76fa49349b05ad288df2d136").unwrap();
/// let entries: Vec<_> = paginate(|cursor| client.query_database(&db, cursor), None)
///     .try_collect()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub fn paginate<T, F, Fut>(fetch: F, delay: Option<Duration>) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<CursorPage<T>>>,
{
    let delay = delay.filter(|d| !d.is_zero());

    let pages = stream::try_unfold(
        (Position::Start, fetch),
        move |(position, mut fetch)| async move {
            let cursor = match position {
                Position::Done => return Ok(None),
                Position::Start => None,
                Position::Next(cursor) => {
                    if let Some(delay) = delay {
                        tracing::trace!(delay_ms = delay.as_millis() as u64, "Waiting before next page");
                        tokio::time::sleep(delay).await;
                    }
                    Some(cursor)
                }
            };

            let page = fetch(cursor).await?;
            let next = match page.next_cursor {
                Some(cursor) => Position::Next(cursor),
                None => Position::Done,
            };

            Ok::<_, ExportError>(Some((page.results, (next, fetch))))
        },
    );

    pages
        .map_ok(|results| stream::iter(results.into_iter().map(Ok::<T, ExportError>)))
        .try_flatten()
}

/// Fetch and collect every item, for listings that are needed whole
pub async fn collect_all<T, F, Fut>(fetch: F, delay: Option<Duration>) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<CursorPage<T>>>,
{
    paginate(fetch, delay).try_collect().await
}
