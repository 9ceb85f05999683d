//! Build byte-operation reports from a trace.
//!
//! A report lists every relevant step whose display expression contains at
//! least one operator of the requested kind, in trace order, together with
//! the running total. Both renderers consume the same [`Report`].

use super::byte_ops::{count_byte_ops, OperationKind};
use super::classify::{display_expression, is_relevant};
use crate::output::printer::ExprPrinter;
use crate::parser::{Expr, SourceRef, Trace};
use log::debug;

/// A step that contains at least one matching operator
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord<'a> {
    pub source: &'a SourceRef,

    /// Display expression rendered by the expression printer
    pub expr_string: String,

    /// Display expression as stored in the trace
    pub expr: &'a Expr,

    /// Matching operators inside `expr`
    pub count: usize,
}

/// All qualifying steps of one trace for one operation kind
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub kind: OperationKind,
    pub records: Vec<ReportRecord<'a>>,
    pub total: usize,
}

impl<'a> Report<'a> {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: ReportRecord<'a>) {
        self.total += record.count;
        self.records.push(record);
    }
}

/// Build the report for `kind`
///
/// **Public** - main entry point for byte-operation accounting
///
/// Each call is an independent pass over the trace; extract and update
/// reports never share an accumulator.
pub fn build_report<'a, P>(trace: &'a Trace, kind: OperationKind, printer: &P) -> Report<'a>
where
    P: ExprPrinter + ?Sized,
{
    let mut report = Report::new(kind);

    for step in trace.steps.iter().filter(|step| is_relevant(step)) {
        let expr = display_expression(step);
        let count = count_byte_ops(expr, kind);
        if count == 0 {
            continue;
        }

        debug!(
            "Step at location {} holds {} byte {}",
            step.source.location_number,
            count,
            kind.noun()
        );

        report.push(ReportRecord {
            source: &step.source,
            expr_string: printer.print(&step.source.function_id, expr),
            expr,
            count,
        });
    }

    debug!(
        "Byte {} report: {} records, {} total",
        kind.noun(),
        report.records.len(),
        report.total
    );

    report
}
