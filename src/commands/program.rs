//! Program listing command.

use super::models::ProgramArgs;
use crate::output::{render_program, InfixPrinter, ReportSink};
use crate::parser::load_trace;
use anyhow::{Context, Result};
use log::info;

/// Print the numbered SSA program of a trace
///
/// **Public** - main entry point called from main.rs
pub fn execute_program(args: &ProgramArgs) -> Result<()> {
    let trace = load_trace(&args.trace_path)
        .with_context(|| format!("Failed to load trace {}", args.trace_path.display()))?;

    let mut sink = ReportSink::open(args.outfile.as_deref())?;
    let file = sink.file().map(|path| path.to_path_buf());

    render_program(&trace, &InfixPrinter, &mut sink).context("Failed to write program listing")?;
    sink.finish()?;

    if let Some(path) = file {
        info!("✓ Program listing written to: {}", path.display());
    }

    Ok(())
}
