//! Content blocks and inline text runs

use super::ids::BlockId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Heading depth supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Markdown prefix for this level (`#`, `##`, `###`)
    pub fn marker(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "#",
            HeadingLevel::H2 => "##",
            HeadingLevel::H3 => "###",
        }
    }
}

/// Styling flags attached to a text run
///
/// These are decoded so that styled content can be reported, but they are
/// not rendered in the Markdown output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "default".to_string()
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: default_color(),
        }
    }
}

impl Annotations {
    /// True when any style differs from plain default text
    pub fn is_styled(&self) -> bool {
        self.bold
            || self.italic
            || self.strikethrough
            || self.underline
            || self.code
            || self.color != "default"
    }
}

/// One inline run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    /// Text content
    pub content: String,

    /// Hyperlink target, if the run is a link
    pub link: Option<String>,

    /// Styling annotations (dropped in output)
    pub annotations: Annotations,
}

impl TextRun {
    /// Plain unstyled run
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
            annotations: Annotations::default(),
        }
    }

    /// Unstyled run linking to `url`
    pub fn linked(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: Some(url.into()),
            annotations: Annotations::default(),
        }
    }
}

/// Kind of a block, with the data each kind carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading {
        level: HeadingLevel,
        runs: Vec<TextRun>,
    },
    Paragraph {
        runs: Vec<TextRun>,
    },
    BulletedListItem {
        runs: Vec<TextRun>,
    },
    ChildPage {
        title: String,
    },
    /// Any block type without a Markdown mapping. The raw type tag is kept
    /// so the converter can report it.
    Unsupported {
        kind: String,
    },
}

impl BlockKind {
    /// The API type tag this kind was decoded from
    pub fn type_name(&self) -> &str {
        match self {
            BlockKind::Heading { level, .. } => match level {
                HeadingLevel::H1 => "heading_1",
                HeadingLevel::H2 => "heading_2",
                HeadingLevel::H3 => "heading_3",
            },
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::BulletedListItem { .. } => "bulleted_list_item",
            BlockKind::ChildPage { .. } => "child_page",
            BlockKind::Unsupported { kind } => kind,
        }
    }

    /// Inline runs carried by this kind, empty for kinds without text
    pub fn runs(&self) -> &[TextRun] {
        match self {
            BlockKind::Heading { runs, .. }
            | BlockKind::Paragraph { runs }
            | BlockKind::BulletedListItem { runs } => runs,
            BlockKind::ChildPage { .. } | BlockKind::Unsupported { .. } => &[],
        }
    }
}

/// A typed unit of page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,

    /// Whether the block has nested children to fetch
    pub has_children: bool,

    pub last_edited_time: Option<DateTime<Utc>>,

    pub kind: BlockKind,
}

impl Block {
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            has_children: false,
            last_edited_time: None,
            kind,
        }
    }

    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    pub fn with_last_edited_time(mut self, time: DateTime<Utc>) -> Self {
        self.last_edited_time = Some(time);
        self
    }
}
