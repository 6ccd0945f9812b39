//! Rendered output documents
//!
//! A [`Document`] is the assembled result for one entry: ordered frontmatter
//! fields and a Markdown body built from rendered block fragments.

use chrono::{DateTime, SecondsFormat, Utc};

/// Frontmatter key for the entry title
pub const TITLE_KEY: &str = "title";
/// Frontmatter key for the entry page id
pub const PAGE_ID_KEY: &str = "page_id";
/// Frontmatter key for the latest edit time of the entry or its child pages
pub const LAST_MODIFIED_KEY: &str = "last_modified_time";

/// Format a timestamp the way the Notion API writes it
/// (`2021-05-13T09:15:00.000Z`)
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Ordered `key: value` metadata
///
/// Inserting an existing key replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Merge caller-supplied fields on top of the existing ones.
    ///
    /// JSON strings are written raw; any other value is written as compact JSON.
    pub fn extend_json(&mut self, extra: &serde_json::Map<String, serde_json::Value>) {
        for (key, value) in extra {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            self.insert(key.clone(), rendered);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Accumulated output for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl Document {
    /// Build a document by joining rendered fragments once, in order
    pub fn from_fragments<I, S>(frontmatter: Frontmatter, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = fragments
            .into_iter()
            .fold(String::new(), |mut body, fragment| {
                body.push_str(fragment.as_ref());
                body
            });
        Self { frontmatter, body }
    }

    /// Title field, if present
    pub fn title(&self) -> Option<&str> {
        self.frontmatter.get(TITLE_KEY)
    }
}
