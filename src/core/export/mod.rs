//! Export orchestration
//!
//! - [`coordinator`] drives the per-entry pipeline against a content source
//! - [`summary`] collects totals for reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::{ExportCoordinator, ExportSettings};
pub use summary::ExportSummary;
