//! Transana Archive - export engine for Transana research databases
//!
//! Serializes a Transana qualitative-research database into the Transana
//! XML interchange format: nine record kinds read in a fixed order inside
//! one transaction, written as one nested document. Provides:
//! - The record catalog (tables, elements, presence and render rules)
//! - A synchronous database access trait with an embedded DuckDB backend
//! - The export engine with progress, failure, and destination seams
//! - A CLI binary (`transana-archive-cli`) for init/status/export

pub mod cli;
pub mod database;
pub mod export;
pub mod schema;

// Re-export commonly used types
#[cfg(feature = "duckdb-backend")]
pub use database::DuckDBBackend;
pub use database::{ArchiveConfig, ArchiveSchema, DatabaseBackend, DatabaseError, DatabaseResult};

pub use export::{
    ExportError, ExportOutcome, ExportSummary, KindCount, XmlExporter, ensure_xml_extension,
};
pub use export::{
    CurrentDirPolicy, DestinationPolicy, FailureSink, HomeFallbackPolicy, LogFailure, LogProgress,
    NullProgress, ProgressSink,
};

// Re-export the catalog and value model
pub use schema::{CATALOG, FieldValue, RecordKind, Row};
