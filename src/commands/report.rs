//! Byte-operation report command.
//!
//! The report command:
//! 1. Rejects output formats the report cannot produce
//! 2. Loads the trace
//! 3. Opens the output destination
//! 4. Builds one report per operation kind and renders them

use super::models::ReportArgs;
use crate::aggregator::{build_report, OperationKind, Report};
use crate::output::{
    render_json, render_plain, ExprPrinter, InfixPrinter, OutputFormat, OutputSink, ReportSink,
};
use crate::parser::{load_trace, Trace};
use crate::utils::error::ReportError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute a byte-operation report
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * `ReportError::UnsupportedFormat` - XML requested, nothing is read or written
/// * Trace loading failures
/// * `ReportError::OpenOutput` - the report file cannot be created
pub fn execute_report(args: &ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    check_format(args.format)?;

    info!("Step 1/3: Loading trace...");
    let trace = load_trace(&args.trace_path)
        .with_context(|| format!("Failed to load trace {}", args.trace_path.display()))?;

    info!("Step 2/3: Opening output...");
    let mut sink = ReportSink::open(args.outfile.as_deref())?;
    let file = sink.file().map(|path| path.to_path_buf());

    info!("Step 3/3: Writing {} report...", args.format);
    write_byte_ops(&trace, &args.kinds, args.format, &InfixPrinter, &mut sink)?;
    sink.finish()?;

    if let Some(path) = file {
        info!("✓ Report written to: {}", path.display());
    }

    debug!("Report completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Fail fast on formats this report cannot produce
///
/// **Public** - can be called before any output is opened
pub fn check_format(format: OutputFormat) -> Result<(), ReportError> {
    match format {
        OutputFormat::Plain | OutputFormat::Json => Ok(()),
        OutputFormat::Xml => Err(ReportError::UnsupportedFormat {
            format: format.to_string(),
        }),
    }
}

/// Build and render the reports for `kinds` into `sink`
///
/// **Public** - library entry point, independent of the CLI
pub fn write_byte_ops<W, P>(
    trace: &Trace,
    kinds: &[OperationKind],
    format: OutputFormat,
    printer: &P,
    sink: &mut OutputSink<W>,
) -> Result<(), ReportError>
where
    W: Write,
    P: ExprPrinter + ?Sized,
{
    match format {
        OutputFormat::Json => {
            let reports: Vec<Report<'_>> = kinds
                .iter()
                .map(|&kind| build_report(trace, kind, printer))
                .collect();
            render_json(&reports, sink)?;
        }
        OutputFormat::Plain => {
            for &kind in kinds {
                let report = build_report(trace, kind, printer);

                if let Some(path) = sink.file().map(|path| path.display().to_string()) {
                    info!("Byte {} written to file {}", kind.noun(), path);
                } else {
                    writeln!(sink)?;
                    writeln!(sink, "{}:", kind.heading())?;
                }

                render_plain(&report, sink)?;
            }
        }
        OutputFormat::Xml => {
            return Err(ReportError::UnsupportedFormat {
                format: format.to_string(),
            })
        }
    }

    Ok(())
}
