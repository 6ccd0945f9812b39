//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Number of entries written to disk
    pub entries_written: usize,

    /// Number of top-level blocks rendered
    pub blocks_converted: usize,

    /// Unsupported blocks skipped under the skip policy, at any level
    pub blocks_skipped: usize,

    /// Number of child blocks rendered
    pub child_blocks: usize,

    /// Files written, in order. Repeats in index mode.
    pub files: Vec<PathBuf>,

    pub duration: Duration,
}

impl ExportSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a written entry
    pub fn record_file(&mut self, path: PathBuf) {
        self.entries_written += 1;
        self.files.push(path);
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_export_complete!(self.entries_written, self.duration);
        tracing::debug!(
            blocks_converted = self.blocks_converted,
            blocks_skipped = self.blocks_skipped,
            child_blocks = self.child_blocks,
            "Block totals"
        );
    }
}

impl std::fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Exported {} entr{} ({} blocks, {} child blocks, {} skipped) in {:.2}s",
            self.entries_written,
            if self.entries_written == 1 { "y" } else { "ies" },
            self.blocks_converted,
            self.child_blocks,
            self.blocks_skipped,
            self.duration.as_secs_f64()
        )
    }
}
