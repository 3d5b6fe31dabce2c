//! Init command handler

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::database::config::CONFIG_FILENAME;
use crate::database::{ArchiveConfig, DatabaseBackend, DuckDBBackend};

/// Arguments for the init command
#[derive(Debug, Clone)]
pub struct InitArgs {
    /// Database file override (defaults to the configured path)
    pub database: Option<PathBuf>,
}

/// Handle the init command
///
/// Writes a configuration file when none exists, then creates the database
/// and the nine interchange tables. Safe to run against an existing
/// database; tables are created with IF NOT EXISTS.
pub fn handle_init(args: &InitArgs) -> Result<(), CliError> {
    let current_dir = std::env::current_dir()?;

    if !ArchiveConfig::exists(&current_dir) {
        let mut config = ArchiveConfig::new();
        if let Some(database) = &args.database {
            config.database.path = database.to_string_lossy().into_owned();
        }
        config.save(&current_dir)?;
        println!("Created {}", current_dir.join(CONFIG_FILENAME).display());
    }

    let config = ArchiveConfig::load(&current_dir)?;
    let database_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.database_path(&current_dir));

    let mut backend = DuckDBBackend::new(&database_path)?;
    backend.initialize()?;

    println!("Initialized archive database at {}", database_path.display());
    Ok(())
}
