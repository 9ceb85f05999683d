//! Aggregation of trace steps into byte-operation reports.
//!
//! This module turns a loaded trace into:
//! - Step classification (which steps count, which expression they show)
//! - Per-expression byte extract / update counts
//! - Ordered reports with a running total

pub mod byte_ops;
pub mod classify;
pub mod report;

// Re-export main types and functions
pub use byte_ops::{count_byte_ops, OperationKind};
pub use classify::{annotation, display_expression, is_relevant};
pub use report::{build_report, Report, ReportRecord};
