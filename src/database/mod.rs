//! Database access layer for the archive source.
//!
//! The export engine reads through the [`DatabaseBackend`] trait so it can
//! run against any relational source that can serve the nine interchange
//! tables. The layer is strictly synchronous: one connection, blocking
//! queries, each result set materialized before the engine writes it out.

#[cfg(feature = "duckdb-backend")]
pub mod duckdb;

pub mod config;
pub mod schema;

#[cfg(feature = "duckdb-backend")]
pub use self::duckdb::DuckDBBackend;

pub use config::ArchiveConfig;
pub use schema::ArchiveSchema;

use crate::schema::Row;

/// Error type for database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction failed
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Table creation failed
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),
}

/// Result type for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// A synchronous relational source holding the nine interchange tables.
///
/// The engine brackets every export in `begin`/`commit` (or `rollback` on
/// failure) so the document reflects a single consistent snapshot.
pub trait DatabaseBackend {
    /// Open a transaction on the source.
    fn begin(&mut self) -> DatabaseResult<()>;

    /// Commit the open transaction.
    fn commit(&mut self) -> DatabaseResult<()>;

    /// Roll back the open transaction.
    fn rollback(&mut self) -> DatabaseResult<()>;

    /// Run `sql` and materialize every row, in backend order.
    fn fetch_all(&mut self, sql: &str) -> DatabaseResult<Vec<Row>>;

    /// Run one or more statements that return no rows (DDL, seeding).
    fn execute_batch(&mut self, sql: &str) -> DatabaseResult<()>;

    /// Create the nine interchange tables (idempotent).
    fn initialize(&mut self) -> DatabaseResult<()> {
        self.execute_batch(ArchiveSchema::create_tables_sql())
            .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))
    }
}
