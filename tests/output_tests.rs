mod common;

use common::{mixed_trace, shared_write_trace};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use symex_report::aggregator::{build_report, OperationKind, Report};
use symex_report::commands::write_byte_ops;
use symex_report::output::{
    render_json, render_plain, render_program, stats_document, InfixPrinter, OutputFormat,
    OutputSink,
};
use symex_report::parser::Trace;

fn plain(report: &Report<'_>) -> String {
    let mut sink = OutputSink::new(Vec::new(), false);
    render_plain(report, &mut sink).unwrap();
    String::from_utf8(sink.into_inner().unwrap()).unwrap()
}

fn printed_total(text: &str) -> usize {
    text.lines()
        .last()
        .and_then(|line| line.rsplit(": ").next())
        .and_then(|n| n.parse().ok())
        .unwrap()
}

#[test]
fn test_plain_and_structured_totals_agree() {
    let trace = mixed_trace();

    for kind in OperationKind::ALL {
        let report = build_report(&trace, kind, &InfixPrinter);
        let document = stats_document(std::slice::from_ref(&report)).unwrap();
        let stats = &document[kind.stats_key()];

        assert_eq!(stats[kind.count_key()], json!(report.total));
        assert_eq!(printed_total(&plain(&report)), report.total);
        assert_eq!(
            stats[kind.list_key()].as_array().unwrap().len(),
            report.records.len()
        );
    }
}

#[test]
fn test_structured_entries_follow_record_order() {
    let trace = mixed_trace();
    let report = build_report(&trace, OperationKind::Extract, &InfixPrinter);
    let document = stats_document(std::slice::from_ref(&report)).unwrap();

    let strings: Vec<&str> = document["byteExtractStats"]["byteExtractList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["ssaExprString"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = report.records.iter().map(|r| r.expr_string.as_str()).collect();
    assert_eq!(strings, expected);
}

#[test]
fn test_structured_output_to_default_stream() {
    let trace = shared_write_trace();
    let reports = vec![
        build_report(&trace, OperationKind::Extract, &InfixPrinter),
        build_report(&trace, OperationKind::Update, &InfixPrinter),
    ];

    let mut sink = OutputSink::new(Vec::new(), true);
    render_json(&reports, &mut sink).unwrap();
    let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();

    assert!(out.starts_with(",\n{"));
    let document: Value = serde_json::from_str(&out[2..]).unwrap();
    let stats = &document["byteOpsStats"];
    assert_eq!(stats["byteExtractStats"]["numOfExtracts"], json!(0));
    assert_eq!(stats["byteUpdateStats"]["numOfUpdates"], json!(2));
    assert_eq!(
        stats["byteUpdateStats"]["byteUpdateList"][0]["sourceLocation"],
        json!({"file": "pun.c", "line": 7, "function": "main"})
    );
}

#[test]
fn test_empty_trace_in_both_formats() {
    let trace = Trace::default();

    let mut sink = OutputSink::new(Vec::new(), false);
    write_byte_ops(
        &trace,
        &OperationKind::ALL,
        OutputFormat::Json,
        &InfixPrinter,
        &mut sink,
    )
    .unwrap();
    let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    let document: Value = serde_json::from_str(&out[2..]).unwrap();
    assert_eq!(
        document,
        json!({"byteOpsStats": {
            "byteExtractStats": {"byteExtractList": [], "numOfExtracts": 0},
            "byteUpdateStats": {"byteUpdateList": [], "numOfUpdates": 0}
        }})
    );

    let mut sink = OutputSink::new(Vec::new(), false);
    write_byte_ops(
        &trace,
        &OperationKind::ALL,
        OutputFormat::Plain,
        &InfixPrinter,
        &mut sink,
    )
    .unwrap();
    let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
    assert!(out.contains("Number of byte extracts: 0\n"));
    assert!(out.contains("Number of byte updates: 0\n"));
    assert!(!out.contains("//"));
}

#[test]
fn test_program_listing_of_mixed_trace() {
    let trace = mixed_trace();

    let mut sink = OutputSink::new(Vec::new(), false);
    render_program(&trace, &InfixPrinter, &mut sink).unwrap();
    let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();

    let numbered: Vec<&str> = out.lines().filter(|line| line.starts_with('(')).collect();
    assert_eq!(
        numbered,
        vec![
            "(1) ASSERT(byte_extract_little_endian(a, 0) == byte_extract_little_endian(b, 4))",
            "(2) ASSUME(flag)",
            "(3) SHARED_READ(byte_extract_little_endian(s, 1))",
            "(4) CONSTRAINT(byte_update_big_endian(m, 0, v))",
        ]
    );
    assert_eq!(out.lines().filter(|line| line.starts_with("// ")).count(), 5);
}
