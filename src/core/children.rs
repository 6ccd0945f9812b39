//! Rendering of blocks that carry children
//!
//! A block with children is rendered as its own fragment followed by its
//! converted children. How the children are placed depends on the
//! [`ChildPolicy`]: appended inline as Markdown, or wrapped in an HTML
//! `<section>`, titled with an `<h2>` for child pages.
//!
//! Only one level is expanded. Children that have children of their own are
//! rendered without them.

use super::convert::BlockConverter;
use crate::config::ChildPolicy;
use crate::domain::{Block, BlockKind, Result};
use pulldown_cmark::{html, Options, Parser};

/// Render `parent` together with its already-fetched `children`
pub fn render_with_children(
    converter: &BlockConverter,
    policy: ChildPolicy,
    parent: &Block,
    children: &[Block],
) -> Result<String> {
    let mut out = converter.convert(parent)?;

    let fragments = children
        .iter()
        .map(|child| {
            if child.has_children {
                tracing::debug!(
                    parent_id = %parent.id,
                    block_id = %child.id,
                    "Not descending into nested children"
                );
            }
            converter.convert(child)
        })
        .collect::<Result<Vec<_>>>()?;

    match policy {
        ChildPolicy::Inline => {
            for fragment in &fragments {
                out.push_str(fragment);
            }
        }
        ChildPolicy::Section => {
            out.push_str("\n<section>");
            if let BlockKind::ChildPage { title } = &parent.kind {
                out.push_str(&format!("\n<h2>{}</h2>", escape_html(title)));
            }
            out.push('\n');
            out.push_str(&markdown_to_html(&fragments.join("\n")));
            out.push_str("\n</section>");
        }
    }

    Ok(out)
}

/// Render Markdown to HTML, without the trailing newline
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered.truncate(rendered.trim_end().len());
    rendered
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
