//! Notion API models
//!
//! This module defines the request and response structures of the Notion REST
//! API. These models are separate from domain models: each response type has a
//! `to_domain` conversion that rejects shapes the exporter cannot handle.

use crate::domain::{
    Annotations, Block, BlockId, BlockKind, CursorPage, Entry, ExportError, HeadingLevel, Result,
    TextRun,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Paginated list response (`object: "list"`)
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,

    /// Absent or null on the last page
    #[serde(default)]
    pub next_cursor: Option<String>,

    #[serde(default)]
    pub has_more: bool,
}

impl<T> ListResponse<T> {
    /// Convert every result, keeping API order and the continuation cursor
    pub fn into_cursor_page<U>(self, convert: impl Fn(T) -> Result<U>) -> Result<CursorPage<U>> {
        let results = self
            .results
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<U>>>()?;

        Ok(CursorPage {
            results,
            next_cursor: self.next_cursor,
        })
    }
}

/// Body of `POST /v1/databases/{id}/query`
#[derive(Debug, Clone, Serialize)]
pub struct QueryDatabaseRequest<'a> {
    pub page_size: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<&'a str>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub message: String,
}

/// A page object as returned by a database query
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    pub object: String,
    pub id: String,
    pub last_edited_time: DateTime<Utc>,

    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawTitleProperty {
    #[serde(default)]
    title: Vec<RawRichText>,
}

impl RawPage {
    /// Convert to a domain [`Entry`]
    ///
    /// # Errors
    ///
    /// Returns a malformed-content error if the object is not a page or has
    /// no title property.
    pub fn to_domain(self) -> Result<Entry> {
        if self.object != "page" {
            return Err(ExportError::MalformedContent(format!(
                "Query didn't return a page (got object '{}')",
                self.object
            )));
        }

        let id = BlockId::new(self.id).map_err(ExportError::MalformedContent)?;
        let title = title_from_properties(&self.properties).ok_or_else(|| {
            ExportError::MalformedContent(format!("Page {id} has no title property"))
        })??;

        Ok(Entry {
            id,
            title,
            last_edited_time: self.last_edited_time,
            properties: self.properties,
        })
    }
}

/// Text of the property whose type is `title`, whatever it is named
fn title_from_properties(
    properties: &serde_json::Map<String, serde_json::Value>,
) -> Option<Result<String>> {
    let property = properties
        .values()
        .find(|p| p.get("type").and_then(|t| t.as_str()) == Some("title"))?;

    let parsed = serde_json::from_value::<RawTitleProperty>(property.clone())
        .map(|p| p.title.iter().map(|run| run.plain_text.as_str()).collect())
        .map_err(|e| ExportError::MalformedContent(format!("Invalid title property: {e}")));

    Some(parsed)
}

/// Rich text object
#[derive(Debug, Clone, Deserialize)]
pub struct RawRichText {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub text: Option<RawText>,

    #[serde(default)]
    pub annotations: Annotations,

    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawText {
    pub content: String,

    #[serde(default)]
    pub link: Option<RawLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLink {
    pub url: String,
}

impl RawRichText {
    /// Convert to a domain [`TextRun`]. Only `text` runs are supported.
    pub fn to_domain(self) -> Result<TextRun> {
        if self.kind != "text" {
            return Err(ExportError::MalformedContent(format!(
                "Unhandled rich text type '{}'",
                self.kind
            )));
        }

        let text = self.text.ok_or_else(|| {
            ExportError::MalformedContent("Rich text of type 'text' has no text body".to_string())
        })?;

        Ok(TextRun {
            content: text.content,
            link: text.link.map(|l| l.url),
            annotations: self.annotations,
        })
    }
}

/// Block object
///
/// The block's data lives under a key named after its type, e.g.
/// `{"type": "paragraph", "paragraph": {"text": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub has_children: bool,

    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

/// Text-bearing block body. API version 2021-05-13 calls the field `text`,
/// later versions `rich_text`.
#[derive(Debug, Clone, Deserialize)]
struct RawTextBody {
    #[serde(default, alias = "rich_text")]
    text: Vec<RawRichText>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawChildPage {
    #[serde(default)]
    title: String,
}

impl RawBlock {
    /// Convert to a domain [`Block`]
    ///
    /// Unknown type tags become [`BlockKind::Unsupported`]; what happens to
    /// them is decided by the converter.
    pub fn to_domain(self) -> Result<Block> {
        let kind = match self.kind.as_str() {
            "heading_1" => BlockKind::Heading {
                level: HeadingLevel::H1,
                runs: self.runs()?,
            },
            "heading_2" => BlockKind::Heading {
                level: HeadingLevel::H2,
                runs: self.runs()?,
            },
            "heading_3" => BlockKind::Heading {
                level: HeadingLevel::H3,
                runs: self.runs()?,
            },
            "paragraph" => BlockKind::Paragraph { runs: self.runs()? },
            "bulleted_list_item" => BlockKind::BulletedListItem { runs: self.runs()? },
            "child_page" => BlockKind::ChildPage {
                title: self.body::<RawChildPage>()?.title,
            },
            other => BlockKind::Unsupported {
                kind: other.to_string(),
            },
        };

        let id = BlockId::new(self.id).map_err(ExportError::MalformedContent)?;

        Ok(Block {
            id,
            has_children: self.has_children,
            last_edited_time: self.last_edited_time,
            kind,
        })
    }

    fn body<T: DeserializeOwned>(&self) -> Result<T> {
        let body = self.payload.get(&self.kind).ok_or_else(|| {
            ExportError::MalformedContent(format!(
                "Block {} of type '{}' has no '{}' body",
                self.id, self.kind, self.kind
            ))
        })?;

        serde_json::from_value(body.clone()).map_err(|e| {
            ExportError::MalformedContent(format!(
                "Block {} has an invalid '{}' body: {e}",
                self.id, self.kind
            ))
        })
    }

    fn runs(&self) -> Result<Vec<TextRun>> {
        self.body::<RawTextBody>()?
            .text
            .into_iter()
            .map(RawRichText::to_domain)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text_run(content: &str, link: Option<&str>) -> serde_json::Value {
        json!({
            "type": "text",
            "text": {
                "content": content,
                "link": link.map(|url| json!({"url": url}))
            },
            "annotations": {
                "bold": false, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": content,
            "href": link
        })
    }

    fn raw_block(value: serde_json::Value) -> RawBlock {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_page_to_entry() {
        let page: RawPage = serde_json::from_value(json!({
            "object": "page",
            "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
            "last_edited_time": "2021-05-13T09:15:00.000Z",
            "properties": {
                "Tags": {"id": "a", "type": "multi_select", "multi_select": []},
                "Name": {"id": "title", "type": "title", "title": [
                    {"type": "text", "text": {"content": "My ", "link": null}, "plain_text": "My "},
                    {"type": "text", "text": {"content": "Page", "link": null}, "plain_text": "Page"}
                ]}
            }
        }))
        .unwrap();

        let entry = page.to_domain().unwrap();
        assert_eq!(entry.title, "My Page");
        assert_eq!(entry.id.as_str(), "59833787-2cf9-4fdf-8782-e53db20768a5");
        assert_eq!(entry.properties.len(), 2);
    }

    #[test]
    fn test_title_property_found_by_type() {
        let page: RawPage = serde_json::from_value(json!({
            "object": "page",
            "id": "p1",
            "last_edited_time": "2021-05-13T09:15:00.000Z",
            "properties": {
                "Post": {"type": "title", "title": [{"type": "text", "plain_text": "Hello"}]}
            }
        }))
        .unwrap();

        assert_eq!(page.to_domain().unwrap().title, "Hello");
    }

    #[test]
    fn test_non_page_object_rejected() {
        let page: RawPage = serde_json::from_value(json!({
            "object": "database",
            "id": "d1",
            "last_edited_time": "2021-05-13T09:15:00.000Z"
        }))
        .unwrap();

        let err = page.to_domain().unwrap_err();
        assert!(matches!(err, ExportError::MalformedContent(_)));
    }

    #[test]
    fn test_page_without_title_rejected() {
        let page: RawPage = serde_json::from_value(json!({
            "object": "page",
            "id": "p1",
            "last_edited_time": "2021-05-13T09:15:00.000Z",
            "properties": {}
        }))
        .unwrap();

        assert!(page.to_domain().is_err());
    }

    #[test]
    fn test_heading_block() {
        let block = raw_block(json!({
            "object": "block",
            "id": "b1",
            "type": "heading_3",
            "has_children": false,
            "heading_3": {"text": [text_run("Title", None)]}
        }))
        .to_domain()
        .unwrap();

        assert_eq!(
            block.kind,
            BlockKind::Heading {
                level: HeadingLevel::H3,
                runs: vec![TextRun::plain("Title")]
            }
        );
    }

    #[test]
    fn test_rich_text_field_name_accepted() {
        let block = raw_block(json!({
            "id": "b1",
            "type": "paragraph",
            "paragraph": {"rich_text": [text_run("Docs", Some("https://example.com"))], "color": "default"}
        }))
        .to_domain()
        .unwrap();

        assert_eq!(
            block.kind.runs(),
            &[TextRun::linked("Docs", "https://example.com")]
        );
    }

    #[test]
    fn test_child_page_block() {
        let block = raw_block(json!({
            "id": "c1",
            "type": "child_page",
            "has_children": true,
            "last_edited_time": "2021-06-01T00:00:00.000Z",
            "child_page": {"title": "Appendix"}
        }))
        .to_domain()
        .unwrap();

        assert!(block.has_children);
        assert!(block.last_edited_time.is_some());
        assert_eq!(
            block.kind,
            BlockKind::ChildPage {
                title: "Appendix".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_block_type_kept_as_unsupported() {
        let block = raw_block(json!({
            "id": "i1",
            "type": "image",
            "image": {"type": "external", "external": {"url": "https://example.com/a.png"}}
        }))
        .to_domain()
        .unwrap();

        assert_eq!(
            block.kind,
            BlockKind::Unsupported {
                kind: "image".to_string()
            }
        );
    }

    #[test]
    fn test_missing_body_is_malformed() {
        let err = raw_block(json!({"id": "b1", "type": "paragraph"}))
            .to_domain()
            .unwrap_err();
        assert!(err.to_string().contains("has no 'paragraph' body"));
    }

    #[test]
    fn test_mention_run_is_malformed() {
        let err = raw_block(json!({
            "id": "b1",
            "type": "paragraph",
            "paragraph": {"text": [{"type": "mention", "mention": {}, "plain_text": "@Ada"}]}
        }))
        .to_domain()
        .unwrap_err();

        assert!(err.to_string().contains("Unhandled rich text type 'mention'"));
    }

    #[test]
    fn test_styled_run_keeps_annotations() {
        let run: RawRichText = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "bold", "link": null},
            "annotations": {"bold": true, "italic": false, "strikethrough": false,
                            "underline": false, "code": false, "color": "default"},
            "plain_text": "bold"
        }))
        .unwrap();

        let run = run.to_domain().unwrap();
        assert!(run.annotations.is_styled());
        assert_eq!(run.content, "bold");
    }

    #[test]
    fn test_list_response_into_cursor_page() {
        let response: ListResponse<RawBlock> = serde_json::from_value(json!({
            "object": "list",
            "results": [
                {"id": "b1", "type": "paragraph", "paragraph": {"text": [text_run("one", None)]}},
                {"id": "b2", "type": "paragraph", "paragraph": {"text": [text_run("two", None)]}}
            ],
            "next_cursor": null,
            "has_more": false
        }))
        .unwrap();

        let page = response.into_cursor_page(RawBlock::to_domain).unwrap();
        assert!(page.is_last());
        let ids: Vec<_> = page.results.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    #[test]
    fn test_query_request_omits_missing_cursor() {
        let first = QueryDatabaseRequest {
            page_size: 100,
            start_cursor: None,
        };
        assert_eq!(serde_json::to_value(&first).unwrap(), json!({"page_size": 100}));

        let next = QueryDatabaseRequest {
            page_size: 100,
            start_cursor: Some("abc"),
        };
        assert_eq!(
            serde_json::to_value(&next).unwrap(),
            json!({"page_size": 100, "start_cursor": "abc"})
        );
    }
}
