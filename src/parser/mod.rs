//! Trace loading and schema definitions.
//!
//! This module handles:
//! - Defining the SSA step and expression tree types
//! - Loading a trace from the verifier's JSON output

pub mod schema;
pub mod trace;

// Re-export main types
pub use schema::{Expr, SourceLocation, SourceRef, Step, StepKind, Trace};
pub use trace::{load_trace, parse_trace, parse_trace_str};
