//! Progress and failure reporting seams.
//!
//! The engine pushes ten named milestones (plus the completion indicator)
//! through [`ProgressSink`] and presents each failed export exactly once
//! through [`FailureSink`]. The provided implementations log via `tracing`;
//! callers embedding the engine supply their own.

use super::ExportError;

/// Receives the export milestones, 0 through 100 percent.
pub trait ProgressSink {
    fn update(&mut self, percent: u8, message: &str);
}

/// Receives each failed export's error, exactly once.
pub trait FailureSink {
    fn report(&mut self, error: &ExportError);
}

/// Logs milestones at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn update(&mut self, percent: u8, message: &str) {
        tracing::info!("[{:>3}%] {}", percent, message);
    }
}

/// Discards milestones.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _percent: u8, _message: &str) {}
}

/// Logs the failure at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailure;

impl FailureSink for LogFailure {
    fn report(&mut self, error: &ExportError) {
        tracing::error!("An error occurred during database export: {}", error);
    }
}
