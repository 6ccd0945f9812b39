//! Cursor-paginated result pages

/// One page of a cursor-paginated listing
///
/// `next_cursor` is present when more results follow and absent on the
/// terminal page.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    /// A terminal page
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
        }
    }

    /// A page followed by more results at `cursor`
    pub fn more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            next_cursor: Some(cursor.into()),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}
