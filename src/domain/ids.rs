//! Domain identifier types with validation
//!
//! Notion identifiers are UUIDs, written either as 32 hex digits or in the
//! hyphenated 36 character form. Both forms are accepted by the API, so the
//! identifier is kept exactly as supplied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn is_notion_uuid(id: &str) -> bool {
    let digits: Vec<char> = id.chars().filter(|c| *c != '-').collect();
    digits.len() == 32 && digits.iter().all(|c| c.is_ascii_hexdigit())
}

/// Database identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use notion_export::domain::ids::DatabaseId;
/// use std::str::FromStr;
///
/// let id = DatabaseId::from_str("668d797c-76fa-4934-9b05-ad288df2d136").unwrap();
/// assert_eq!(id.as_str(), "668d797c-76fa-4934-9b05-ad288df2d136");
///
/// assert!(DatabaseId::from_str("not-a-database").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseId(String);

impl DatabaseId {
    /// Creates a new DatabaseId, checking it is a 32 digit hex UUID
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err("Database ID cannot be empty".to_string());
        }
        if !is_notion_uuid(&id) {
            return Err(format!(
                "Invalid database ID '{id}'. Expected 32 hex digits, optionally hyphenated (36 characters)"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the database ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DatabaseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DatabaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Block identifier newtype wrapper
///
/// Pages are blocks in the Notion model, so database entries use this type
/// for their id as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    /// Creates a new BlockId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Block ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the block ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
