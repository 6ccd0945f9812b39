//! Page writer
//!
//! Serializes a [`Document`] as a frontmatter block followed by the Markdown
//! body, and derives the output file name from the entry title.

use crate::domain::{Document, ExportError, Result};
use std::path::{Path, PathBuf};

/// File name used for every entry when writing in index mode
pub const INDEX_FILE_NAME: &str = "index.md";

/// Derive the output file name for an entry
///
/// The title is lowercased, runs of whitespace become a single `-`, and path
/// separators are replaced with `-`. An empty result falls back to
/// `fallback_id`.
pub fn output_file_name(title: &str, fallback_id: &str, index: bool) -> String {
    if index {
        return INDEX_FILE_NAME.to_string();
    }

    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace(['/', '\\'], "-");

    if slug.is_empty() {
        format!("{fallback_id}.md")
    } else {
        format!("{slug}.md")
    }
}

/// Render the full file content for a document
pub fn render_document(document: &Document) -> String {
    let mut out = String::from("---");
    for (key, value) in document.frontmatter.iter() {
        out.push_str(&format!("\n{key}: {value}"));
    }
    out.push_str("\n---\n");
    out.push_str(&document.body);
    out
}

/// Writes rendered documents into one output directory
#[derive(Debug)]
pub struct PageWriter {
    output_dir: PathBuf,
    index: bool,
    written: usize,
}

impl PageWriter {
    pub fn new(output_dir: impl Into<PathBuf>, index: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            index,
            written: 0,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `document`, returning the path of the file written
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] when the file cannot be created or written.
    pub async fn write(&mut self, document: &Document, fallback_id: &str) -> Result<PathBuf> {
        let name = output_file_name(document.title().unwrap_or_default(), fallback_id, self.index);
        let path = self.output_dir.join(&name);

        if self.index && self.written > 0 {
            tracing::warn!(
                path = %path.display(),
                "Index mode overwrites the previous entry's file"
            );
        }

        tokio::fs::write(&path, render_document(document))
            .await
            .map_err(|e| ExportError::Io(format!("Failed to write {}: {e}", path.display())))?;

        self.written += 1;
        tracing::debug!(path = %path.display(), "Wrote document");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{LAST_MODIFIED_KEY, PAGE_ID_KEY, TITLE_KEY};
    use crate::domain::Frontmatter;
    use tempfile::TempDir;
    use test_case::test_case;

    fn document(title: &str, body: &str) -> Document {
        let mut fm = Frontmatter::new();
        fm.insert(TITLE_KEY, title);
        fm.insert(PAGE_ID_KEY, "abc");
        fm.insert(LAST_MODIFIED_KEY, "2021-05-13T09:15:00.000Z");
        Document::from_fragments(fm, [body])
    }

    #[test_case("My Page", "my-page.md" ; "spaces")]
    #[test_case("  Release   Notes  ", "release-notes.md" ; "whitespace runs")]
    #[test_case("a/b\\c", "a-b-c.md" ; "path separators")]
    #[test_case("", "abc.md" ; "empty title")]
    #[test_case("   ", "abc.md" ; "blank title")]
    fn test_output_file_name(title: &str, expected: &str) {
        assert_eq!(output_file_name(title, "abc", false), expected);
    }

    #[test]
    fn test_output_file_name_index() {
        assert_eq!(output_file_name("My Page", "abc", true), "index.md");
    }

    #[test]
    fn test_render_document() {
        let doc = document("My Page", "# Hi\n");
        assert_eq!(
            render_document(&doc),
            "---\ntitle: My Page\npage_id: abc\nlast_modified_time: 2021-05-13T09:15:00.000Z\n---\n# Hi\n"
        );
    }

    #[test]
    fn test_render_document_empty_body() {
        let doc = document("Empty", "");
        let rendered = render_document(&doc);
        assert!(rendered.starts_with("---\ntitle: Empty"));
        assert!(rendered.ends_with("\n---\n"));
    }

    #[tokio::test]
    async fn test_write_named_file() {
        let dir = TempDir::new().unwrap();
        let mut writer = PageWriter::new(dir.path(), false);

        let path = writer.write(&document("My Page", "body\n"), "abc").await.unwrap();

        assert_eq!(path, dir.path().join("my-page.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\ntitle: My Page\n"));
        assert!(content.ends_with("---\nbody\n"));
    }

    #[tokio::test]
    async fn test_index_mode_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut writer = PageWriter::new(dir.path(), true);

        writer.write(&document("First", "one\n"), "a").await.unwrap();
        let path = writer.write(&document("Second", "two\n"), "b").await.unwrap();

        assert_eq!(path, dir.path().join("index.md"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("title: Second"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut writer = PageWriter::new(dir.path().join("missing"), false);

        let err = writer.write(&document("X", ""), "x").await.unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
