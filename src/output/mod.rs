//! Report rendering and destinations.
//!
//! This module handles writing reports in various formats:
//! - Plain-text byte-operation reports
//! - Structured (JSON) byte-operation reports
//! - The numbered program listing

pub mod json;
pub mod plain;
pub mod printer;
pub mod program;
pub mod sink;

// Re-export main functions
pub use json::{render_json, report_to_value, stats_document};
pub use plain::render_plain;
pub use printer::{ExprPrinter, InfixPrinter};
pub use program::render_program;
pub use sink::{OutputSink, ReportSink};

use clap::ValueEnum;
use std::fmt;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    /// Legacy format, rejected by byte-operation reports
    Xml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "JSON",
            OutputFormat::Xml => "XML",
        };
        f.write_str(name)
    }
}
