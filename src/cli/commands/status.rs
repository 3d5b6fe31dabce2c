//! Status command handler

use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::error::CliError;
use crate::database::{ArchiveConfig, DatabaseBackend, DuckDBBackend};
use crate::export::KindCount;
use crate::schema::{CATALOG, FieldValue};

/// Output format for the status command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Supported formats: table, json",
                s
            )),
        }
    }
}

/// Arguments for the status command
#[derive(Debug, Clone)]
pub struct StatusArgs {
    /// Database file override (defaults to the configured path)
    pub database: Option<PathBuf>,
    /// Output format name, parsed into [`OutputFormat`]
    pub format: String,
}

/// Handle the status command
pub fn handle_status(args: &StatusArgs) -> Result<(), CliError> {
    let format = args
        .format
        .parse::<OutputFormat>()
        .map_err(CliError::InvalidArgument)?;

    let current_dir = std::env::current_dir()?;
    let config = ArchiveConfig::load(&current_dir)?;
    let database_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.database_path(&current_dir));

    let mut backend = DuckDBBackend::new(&database_path)?;
    let counts = record_counts(&mut backend)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&counts)
                .map_err(|e| CliError::SerializationError(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", database_path.display());
            println!("{:<12} {:>8}", "Kind", "Rows");
            for count in &counts {
                println!("{:<12} {:>8}", count.kind.to_string(), count.rows);
            }
            let total: usize = counts.iter().map(|c| c.rows).sum();
            println!("{:<12} {:>8}", "Total", total);
        }
    }

    Ok(())
}

/// Count the rows behind each exportable record kind.
fn record_counts(backend: &mut dyn DatabaseBackend) -> Result<Vec<KindCount>, CliError> {
    let mut counts = Vec::with_capacity(CATALOG.len());
    for spec in CATALOG {
        let rows = backend.fetch_all(&format!("SELECT COUNT(*) FROM {}", spec.table))?;
        let row_count = match rows.first().and_then(|row| row.first()) {
            Some(FieldValue::Integer(n)) => usize::try_from(*n).unwrap_or(0),
            _ => 0,
        };
        counts.push(KindCount {
            kind: spec.kind,
            rows: row_count,
        });
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod output_format_tests {
        use super::*;

        #[test]
        fn test_parse_output_format() {
            assert_eq!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table));
            assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
            assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        }

        #[test]
        fn test_parse_unknown_format_fails() {
            let result = "yaml".parse::<OutputFormat>();
            assert!(result.is_err());
            let message = result.unwrap_err();
            assert!(message.contains("yaml"));
        }
    }
}
