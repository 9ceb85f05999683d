//! Plain-text byte-operation reports.

use super::sink::OutputSink;
use crate::aggregator::Report;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Write one report as text.
///
/// Each record is a faint `// <location number> <source location>` line
/// followed by the rendered expression; a blank line and the total close
/// the report.
pub fn render_plain<W: Write>(report: &Report<'_>, sink: &mut OutputSink<W>) -> io::Result<()> {
    for record in &report.records {
        sink.faint(|text| {
            writeln!(
                text,
                "// {} {}",
                record.source.location_number, record.source.source_location
            )
        })?;
        writeln!(sink, "{}", record.expr_string)?;
    }

    writeln!(sink)?;
    writeln!(sink, "Number of byte {}: {}", report.kind.noun(), report.total)?;

    Ok(())
}
