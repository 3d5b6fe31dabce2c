//! Export command handler

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::database::{ArchiveConfig, DuckDBBackend};
use crate::export::{
    CurrentDirPolicy, DestinationPolicy, ExportOutcome, HomeFallbackPolicy, LogFailure,
    LogProgress, XmlExporter,
};

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Destination file name; `.xml` is appended when missing
    pub destination: String,
    /// Database file override (defaults to the configured path)
    pub database: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export(args: &ExportArgs) -> Result<(), CliError> {
    let current_dir = std::env::current_dir()?;
    let config = ArchiveConfig::load(&current_dir)?;
    let database_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.database_path(&current_dir));

    let mut source = DuckDBBackend::new(&database_path)?;
    let mut progress = LogProgress;
    let mut failures = LogFailure;

    let home_policy = HomeFallbackPolicy::new();
    let current_policy = CurrentDirPolicy;
    let policy: &dyn DestinationPolicy = if config.home_fallback() {
        &home_policy
    } else {
        &current_policy
    };

    let mut exporter = XmlExporter::new(&mut source, &mut progress, &mut failures)
        .with_destination_policy(policy);

    match exporter.export(&args.destination) {
        ExportOutcome::Completed(summary) => {
            println!(
                "Exported {} records to {}",
                summary.total_records(),
                summary.destination.display()
            );
            for count in &summary.counts {
                if count.rows > 0 {
                    println!("  {}: {}", count.kind, count.rows);
                }
            }
            Ok(())
        }
        ExportOutcome::Failed(_) => Err(CliError::ExportFailed),
    }
}
