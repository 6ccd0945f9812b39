//! Logging and observability
//!
//! Structured logging through `tracing`, with:
//! - Human-readable console output on stderr
//! - Configurable log levels (`RUST_LOG` wins when set)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use notion_export::logging::init_logging;
//! use notion_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export
///
/// # Example
///
/// ```no_run
/// use notion_export::log_export_start;
/// use notion_export::domain::DatabaseId;
/// use std::path::Path;
///
/// let db = DatabaseId::new("668d797c76fa49349b05ad288df2d136").unwrap();
/// log_export_start!(&db, Path::new("./out"));
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($database_id:expr, $output_dir:expr) => {
        tracing::info!(
            database_id = %$database_id,
            output_dir = %$output_dir.display(),
            "Starting export"
        );
    };
}

/// Log one written entry
#[macro_export]
macro_rules! log_entry_written {
    ($entry_id:expr, $path:expr, $blocks:expr) => {
        tracing::info!(
            entry_id = %$entry_id,
            path = %$path.display(),
            blocks = $blocks,
            "Wrote entry"
        );
    };
}

/// Log the completion of an export
///
/// # Example
///
/// ```no_run
/// use notion_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_secs(10));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use notion_export::log_error_with_context;
/// use notion_export::domain::ExportError;
///
/// let error = ExportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
