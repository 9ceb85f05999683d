#![allow(dead_code)]

use symex_report::parser::{Expr, SourceLocation, SourceRef, Step, StepKind, Trace};
use symex_report::utils::config::{
    ID_BYTE_EXTRACT_LITTLE_ENDIAN, ID_BYTE_UPDATE_BIG_ENDIAN,
};

pub fn source(location_number: u32, line: u32) -> SourceRef {
    SourceRef {
        location_number,
        source_location: SourceLocation {
            file: Some("pun.c".to_string()),
            line: Some(line),
            column: None,
            function: Some("main".to_string()),
        },
        function_id: "main".to_string(),
    }
}

/// `BYTE_EXTRACT_LE(a, offset)`
pub fn extract_le(operand: &str, offset: &str) -> Expr {
    Expr::new(
        ID_BYTE_EXTRACT_LITTLE_ENDIAN,
        vec![Expr::symbol(operand), Expr::constant(offset)],
    )
}

/// `BYTE_UPDATE_BE(base, offset, value)`
pub fn update_be(base: Expr, offset: &str, value: &str) -> Expr {
    Expr::new(
        ID_BYTE_UPDATE_BIG_ENDIAN,
        vec![base, Expr::constant(offset), Expr::symbol(value)],
    )
}

/// One assignment `x == BYTE_EXTRACT_LE(a, 0)`
pub fn assignment_trace() -> Trace {
    let cond = Expr::new("=", vec![Expr::symbol("main::x"), extract_le("main::a", "0")]);
    Trace::new(vec![Step::new(StepKind::Assignment, source(1, 3), cond)])
}

/// One shared write whose full lhs is `BYTE_UPDATE_BE(BYTE_UPDATE_BE(a,0,b),1,c)`
pub fn shared_write_trace() -> Trace {
    let full_lhs = update_be(update_be(Expr::symbol("a"), "0", "b"), "1", "c");
    Trace::new(vec![Step::new(
        StepKind::SharedWrite {
            lhs: Expr::symbol("a"),
            full_lhs,
        },
        source(2, 7),
        Expr::default(),
    )])
}

/// A trace mixing relevant, non-relevant and non-matching steps
pub fn mixed_trace() -> Trace {
    Trace::new(vec![
        Step::new(StepKind::Location, source(1, 1), extract_le("ignored", "0")),
        Step::new(
            StepKind::Assert,
            source(2, 2),
            Expr::new("=", vec![extract_le("a", "0"), extract_le("b", "4")]),
        ),
        Step::new(StepKind::Assume, source(3, 3), Expr::symbol("flag")),
        Step::new(
            StepKind::SharedRead {
                lhs: Expr::symbol("s"),
                full_lhs: extract_le("s", "1"),
            },
            source(4, 4),
            Expr::default(),
        ),
        Step::new(
            StepKind::Constraint,
            source(5, 5),
            update_be(Expr::symbol("m"), "0", "v"),
        ),
    ])
}

/// Serialize a trace the way the verifier writes it
pub fn write_trace(dir: &std::path::Path, trace: &Trace) -> std::path::PathBuf {
    let path = dir.join("trace.json");
    std::fs::write(&path, serde_json::to_string_pretty(trace).unwrap()).unwrap();
    path
}
