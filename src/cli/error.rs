//! CLI-specific error types

use crate::database::DatabaseError;
use crate::export::ExportError;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database export did not complete")]
    ExportFailed,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}
