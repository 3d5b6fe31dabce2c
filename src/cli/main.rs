//! CLI binary entry point for transana-archive-cli

#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
use clap::{Parser, Subcommand};
#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
use std::path::PathBuf;
#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
use transana_archive::cli::commands::export::{ExportArgs, handle_export};
#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
use transana_archive::cli::commands::init::{InitArgs, handle_init};
#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
use transana_archive::cli::commands::status::{StatusArgs, handle_status};

#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
#[derive(Parser)]
#[command(name = "transana-archive-cli")]
#[command(about = "Archive Transana analysis databases as XML interchange files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
#[derive(Subcommand)]
enum Commands {
    /// Create the archive database and its interchange tables
    Init {
        /// Database file (defaults to the configured path)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Show row counts for each exportable record kind
    Status {
        /// Database file (defaults to the configured path)
        #[arg(short, long)]
        database: Option<PathBuf>,
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
    /// Export the whole database as one XML interchange document
    Export {
        /// Destination file; `.xml` is appended when missing
        destination: String,
        /// Database file (defaults to the configured path)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("transana_archive=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { database } => {
            let args = InitArgs { database };
            handle_init(&args)
        }
        Commands::Status { database, format } => {
            let args = StatusArgs { database, format };
            handle_status(&args)
        }
        Commands::Export {
            destination,
            database,
        } => {
            let args = ExportArgs {
                destination,
                database,
            };
            handle_export(&args)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(all(feature = "cli", feature = "duckdb-backend")))]
fn main() {
    eprintln!("CLI support is not enabled. Build with --features cli-full");
    std::process::exit(1);
}
