//! Block to Markdown conversion
//!
//! Dispatch is an exhaustive match on [`BlockKind`]:
//!
//! | kind                 | output                        |
//! |----------------------|-------------------------------|
//! | heading 1-3          | `# text\n` .. `### text\n`    |
//! | paragraph            | all runs concatenated + `\n`  |
//! | bulleted list item   | `* text\n`                    |
//! | child page           | empty (see [`super::children`]) |
//! | anything else        | error, or empty when skipping |
//!
//! Headings and list items must hold exactly one text run. Styling
//! annotations are ignored.

use crate::config::UnknownBlockPolicy;
use crate::domain::{Block, BlockKind, ExportError, HeadingLevel, Result, TextRun};

/// Converts blocks to Markdown fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockConverter {
    unknown_blocks: UnknownBlockPolicy,
}

impl BlockConverter {
    pub fn new(unknown_blocks: UnknownBlockPolicy) -> Self {
        Self { unknown_blocks }
    }

    /// Convert one block to its Markdown fragment
    ///
    /// # Errors
    ///
    /// - [`ExportError::MalformedContent`] for a heading or list item that
    ///   does not hold exactly one run
    /// - [`ExportError::UnsupportedBlock`] for an unknown kind when the policy
    ///   is [`UnknownBlockPolicy::Error`]
    pub fn convert(&self, block: &Block) -> Result<String> {
        if block.kind.runs().iter().any(|run| run.annotations.is_styled()) {
            tracing::debug!(
                block_id = %block.id,
                kind = block.kind.type_name(),
                "Dropping text styling"
            );
        }

        match &block.kind {
            BlockKind::Heading { level, runs } => render_heading(*level, runs),
            BlockKind::Paragraph { runs } => Ok(render_paragraph(runs)),
            BlockKind::BulletedListItem { runs } => render_bulleted_list_item(runs),
            BlockKind::ChildPage { .. } => Ok(String::new()),
            BlockKind::Unsupported { kind } => match self.unknown_blocks {
                UnknownBlockPolicy::Error => Err(ExportError::UnsupportedBlock {
                    kind: kind.clone(),
                    block_id: block.id.to_string(),
                }),
                UnknownBlockPolicy::Skip => {
                    tracing::warn!(
                        block_id = %block.id,
                        kind = %kind,
                        "Skipping unsupported block"
                    );
                    Ok(String::new())
                }
            },
        }
    }
}

/// Render a single run: `[content](url)` when linked, plain content otherwise
pub fn render_run(run: &TextRun) -> String {
    match &run.link {
        Some(url) => format!("[{}]({})", run.content, url),
        None => run.content.clone(),
    }
}

fn single_run<'a>(runs: &'a [TextRun], what: &str) -> Result<&'a TextRun> {
    match runs {
        [run] => Ok(run),
        _ => Err(ExportError::MalformedContent(format!(
            "{what} error. Expected 1 text run, got {}",
            runs.len()
        ))),
    }
}

pub fn render_heading(level: HeadingLevel, runs: &[TextRun]) -> Result<String> {
    let run = single_run(runs, "Heading")?;
    Ok(format!("{} {}\n", level.marker(), render_run(run)))
}

pub fn render_bulleted_list_item(runs: &[TextRun]) -> Result<String> {
    let run = single_run(runs, "List item")?;
    Ok(format!("* {}\n", render_run(run)))
}

pub fn render_paragraph(runs: &[TextRun]) -> String {
    let mut paragraph: String = runs.iter().map(render_run).collect();
    paragraph.push('\n');
    paragraph
}
