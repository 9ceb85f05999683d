//! Symex Report
//!
//! Diagnostic reports over the SSA trace of a symbolic-execution run:
//! a numbered program listing, and byte extract / byte update accounting
//! that shows how a verifier front-end encodes byte-level reinterpretation
//! of memory.
//!
//! This crate provides the core implementation for the
//! `symex-report` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! symex-report byte-ops --trace trace.json --format json
//! symex-report program --trace trace.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
