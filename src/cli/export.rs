//! Export command implementation
//!
//! Validates the database id, builds the Notion client and runs the export
//! coordinator, reporting progress on stdout and failures on stderr.

use super::Cli;
use crate::adapters::notion::NotionClient;
use crate::config::ExporterConfig;
use crate::core::export::{ExportCoordinator, ExportSettings};
use crate::domain::DatabaseId;
use anyhow::Context;

/// Execute the export described by `cli` and `config`
///
/// Returns the process exit code: 0 on success, 1 on any export failure.
pub async fn execute(cli: &Cli, config: ExporterConfig) -> anyhow::Result<i32> {
    let database_id = match DatabaseId::new(&cli.database) {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Invalid database id");
            eprintln!("{e}");
            return Ok(1);
        }
    };

    let output_dir = tokio::fs::canonicalize(&cli.output_path)
        .await
        .with_context(|| format!("Failed to resolve output path {}", cli.output_path.display()))?;

    let client = match NotionClient::new(&config.notion) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Notion client");
            eprintln!("{e}");
            return Ok(1);
        }
    };

    println!("Downloading from database {database_id}");
    println!("Writing output to {}", output_dir.display());

    let settings = ExportSettings::from_config(&config, output_dir);
    let coordinator = ExportCoordinator::new(client, settings);

    match coordinator.execute_export(&database_id).await {
        Ok(summary) => {
            println!("{summary}");
            Ok(0)
        }
        Err(e) => {
            crate::log_error_with_context!(&e, "Export failed");
            eprintln!("{e}");
            Ok(1)
        }
    }
}
