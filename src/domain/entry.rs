//! Database entries

use super::ids::BlockId;
use chrono::{DateTime, Utc};

/// One database record, which becomes one output file
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Page id of the record
    pub id: BlockId,

    /// Text of the record's title property
    pub title: String,

    pub last_edited_time: DateTime<Utc>,

    /// All properties as delivered by the API, including the title
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Entry {
    pub fn new(id: BlockId, title: impl Into<String>, last_edited_time: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            last_edited_time,
            properties: serde_json::Map::new(),
        }
    }
}
