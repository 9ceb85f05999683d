//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod program;
pub mod report;

// Re-export main command functions
pub use models::{ProgramArgs, ReportArgs};
pub use program::execute_program;
pub use report::{check_format, execute_report, write_byte_ops};
