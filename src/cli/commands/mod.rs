//! CLI command implementations

#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
pub mod export;
#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
pub mod init;
#[cfg(all(feature = "cli", feature = "duckdb-backend"))]
pub mod status;
