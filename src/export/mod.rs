//! Export functionality
//!
//! The XML export engine and its collaborator seams: destination policies,
//! progress reporting, and failure presentation. One export call reads the
//! nine record kinds inside a single transaction and writes one interchange
//! document.

pub mod destination;
pub mod progress;
pub mod xml;

use std::path::PathBuf;

use crate::database::DatabaseError;
use crate::schema::RecordKind;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

/// Row count for one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct KindCount {
    pub kind: RecordKind,
    pub rows: usize,
}

/// What a completed export produced.
#[derive(Debug, Clone, serde::Serialize)]
#[must_use = "the summary names the file the export wrote"]
pub struct ExportSummary {
    /// Resolved path of the written document
    pub destination: PathBuf,
    /// Rows written per record kind, in document order
    pub counts: Vec<KindCount>,
}

impl ExportSummary {
    /// Total records across all nine kinds.
    pub fn total_records(&self) -> usize {
        self.counts.iter().map(|count| count.rows).sum()
    }
}

/// Outcome of one export call.
///
/// A failed export has already been reported through the failure sink and
/// rolled back by the time this value is returned; nothing is re-raised.
#[derive(Debug)]
#[must_use = "a failed export is reported, not raised"]
pub enum ExportOutcome {
    Completed(ExportSummary),
    Failed(ExportError),
}

impl ExportOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ExportOutcome::Completed(_))
    }
}

// Re-export for convenience
pub use destination::{
    CurrentDirPolicy, DestinationPolicy, HomeFallbackPolicy, ensure_xml_extension,
};
pub use progress::{FailureSink, LogFailure, LogProgress, NullProgress, ProgressSink};
pub use xml::XmlExporter;
