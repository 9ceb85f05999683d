//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while writing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{format} output is not supported for this report, use --format json instead")]
    UnsupportedFormat { format: String },

    #[error("invalid argument for {option}: failed to open output file {}: {source}", path.display())]
    OpenOutput {
        option: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

impl ReportError {
    /// True for errors caused by how the tool was invoked
    pub fn is_usage_error(&self) -> bool {
        matches!(self, ReportError::UnsupportedFormat { .. })
    }
}
