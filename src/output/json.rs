//! Structured (JSON) byte-operation reports.
//!
//! The document nests each report under its kind's stats key; with more
//! than one kind the stats share a `byteOpsStats` parent. Entries carry the
//! source location, the rendered expression and the expression tree.

use super::sink::OutputSink;
use crate::aggregator::Report;
use crate::parser::{Expr, SourceLocation};
use crate::utils::config::BYTE_OPS_STATS_KEY;
use crate::utils::error::ReportError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

/// One list entry of the structured report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordEntry<'a> {
    source_location: &'a SourceLocation,
    ssa_expr_string: &'a str,
    ssa_expr: &'a Expr,
}

/// `{"<kind>List": [...], "numOf<Kind>s": N}` for one report
pub fn report_to_value(report: &Report<'_>) -> Result<Value, serde_json::Error> {
    let entries = report
        .records
        .iter()
        .map(|record| {
            serde_json::to_value(RecordEntry {
                source_location: &record.source.source_location,
                ssa_expr_string: &record.expr_string,
                ssa_expr: record.expr,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut stats = Map::new();
    stats.insert(report.kind.list_key().to_string(), Value::Array(entries));
    stats.insert(report.kind.count_key().to_string(), Value::from(report.total));
    Ok(Value::Object(stats))
}

/// Full document for the given reports
pub fn stats_document(reports: &[Report<'_>]) -> Result<Value, serde_json::Error> {
    let mut by_kind = Map::new();
    for report in reports {
        by_kind.insert(report.kind.stats_key().to_string(), report_to_value(report)?);
    }

    if reports.len() > 1 {
        let mut document = Map::new();
        document.insert(BYTE_OPS_STATS_KEY.to_string(), Value::Object(by_kind));
        Ok(Value::Object(document))
    } else {
        Ok(Value::Object(by_kind))
    }
}

/// Append the document to a stream of JSON messages.
///
/// The stream already holds earlier messages, so the document is
/// introduced with `",\n"`.
pub fn render_json<W: Write>(
    reports: &[Report<'_>],
    sink: &mut OutputSink<W>,
) -> Result<(), ReportError> {
    let document = stats_document(reports)?;

    sink.write_all(b",\n")?;
    serde_json::to_writer_pretty(&mut *sink, &document)?;
    writeln!(sink)?;

    Ok(())
}
