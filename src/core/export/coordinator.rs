//! Export coordinator - main orchestrator for the export process
//!
//! For each database entry, in query order:
//! 1. fetch all top-level blocks of the entry page
//! 2. convert each block, fetching and folding in children where present
//! 3. assemble frontmatter and body into a [`Document`]
//! 4. write the document to the output directory
//!
//! The first error aborts the run. Files written before it stay on disk.

use super::summary::ExportSummary;
use crate::adapters::notion::ContentSource;
use crate::config::{ChildPolicy, ExporterConfig, UnknownBlockPolicy};
use crate::core::children::render_with_children;
use crate::core::convert::BlockConverter;
use crate::core::paginate::{collect_all, paginate};
use crate::core::writer::PageWriter;
use crate::domain::document::{format_timestamp, LAST_MODIFIED_KEY, PAGE_ID_KEY, TITLE_KEY};
use crate::domain::{Block, BlockKind, DatabaseId, Document, Entry, Frontmatter, Result};
use chrono::{DateTime, Utc};
use futures::{pin_mut, TryStreamExt};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Settings for one export run
#[derive(Debug, Clone, Default)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub child_pages: ChildPolicy,
    pub unknown_blocks: UnknownBlockPolicy,
    pub index: bool,
    /// Extra frontmatter merged into every document
    pub frontmatter: serde_json::Map<String, serde_json::Value>,
    /// Pause between page requests of one listing
    pub page_delay: Option<Duration>,
}

impl ExportSettings {
    pub fn from_config(config: &ExporterConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            child_pages: config.export.child_pages,
            unknown_blocks: config.export.unknown_blocks,
            index: config.export.index,
            frontmatter: config.export.frontmatter.clone(),
            page_delay: Some(Duration::from_millis(config.notion.page_delay_ms)),
        }
    }
}

/// Export coordinator
pub struct ExportCoordinator<S> {
    source: S,
    settings: ExportSettings,
    converter: BlockConverter,
}

impl<S: ContentSource> ExportCoordinator<S> {
    pub fn new(source: S, settings: ExportSettings) -> Self {
        let converter = BlockConverter::new(settings.unknown_blocks);
        Self {
            source,
            settings,
            converter,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Export every entry of `database_id`
    ///
    /// # Errors
    ///
    /// Returns the first request, conversion or write error.
    pub async fn execute_export(&self, database_id: &DatabaseId) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        let mut writer = PageWriter::new(&self.settings.output_dir, self.settings.index);

        crate::log_export_start!(database_id, self.settings.output_dir);

        let source = &self.source;
        let entries = paginate(
            move |cursor| source.query_database(database_id, cursor),
            self.settings.page_delay,
        );
        pin_mut!(entries);

        while let Some(entry) = entries.try_next().await? {
            let (document, block_count) = self.build_document(&entry, &mut summary).await?;
            let path = writer.write(&document, entry.id.as_ref()).await?;

            crate::log_entry_written!(entry.id, path, block_count);
            summary.record_file(path);
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    async fn build_document(
        &self,
        entry: &Entry,
        summary: &mut ExportSummary,
    ) -> Result<(Document, usize)> {
        tracing::debug!(entry_id = %entry.id, title = %entry.title, "Exporting entry");

        let source = &self.source;
        let blocks = collect_all(
            move |cursor| source.list_children(&entry.id, cursor),
            self.settings.page_delay,
        )
        .await?;

        let mut last_modified = entry.last_edited_time;
        let mut fragments = Vec::with_capacity(blocks.len());

        for block in &blocks {
            if self.is_skipped(block) {
                // Logs the skip; children of a skipped block are not fetched.
                self.converter.convert(block)?;
                summary.blocks_skipped += 1;
                continue;
            }
            if let BlockKind::ChildPage { .. } = block.kind {
                last_modified = later(last_modified, block.last_edited_time);
            }

            fragments.push(self.render_block(block, summary).await?);
            summary.blocks_converted += 1;
        }

        let mut frontmatter = Frontmatter::new();
        frontmatter.insert(TITLE_KEY, entry.title.as_str());
        frontmatter.insert(PAGE_ID_KEY, entry.id.to_string());
        frontmatter.insert(LAST_MODIFIED_KEY, format_timestamp(&last_modified));
        frontmatter.extend_json(&self.settings.frontmatter);

        Ok((Document::from_fragments(frontmatter, fragments), blocks.len()))
    }

    async fn render_block(&self, block: &Block, summary: &mut ExportSummary) -> Result<String> {
        if !block.has_children {
            return self.converter.convert(block);
        }

        let source = &self.source;
        let children = collect_all(
            move |cursor| source.list_children(&block.id, cursor),
            self.settings.page_delay,
        )
        .await?;

        tracing::debug!(
            block_id = %block.id,
            kind = block.kind.type_name(),
            children = children.len(),
            "Rendering children"
        );
        let rendered = render_with_children(
            &self.converter,
            self.settings.child_pages,
            block,
            &children,
        )?;

        let skipped = children.iter().filter(|child| self.is_skipped(child)).count();
        summary.blocks_skipped += skipped;
        summary.child_blocks += children.len() - skipped;

        Ok(rendered)
    }

    fn is_skipped(&self, block: &Block) -> bool {
        matches!(block.kind, BlockKind::Unsupported { .. })
            && self.settings.unknown_blocks == UnknownBlockPolicy::Skip
    }
}

fn later(current: DateTime<Utc>, candidate: Option<DateTime<Utc>>) -> DateTime<Utc> {
    match candidate {
        Some(time) if time > current => time,
        _ => current,
    }
}
