//! Numbered listing of the SSA program.
//!
//! Every step gets a `// <location number> <source location>` comment.
//! Steps that carry an expression are numbered from 1, annotated with
//! their kind and followed by their guard when it is not trivially true.

use super::printer::ExprPrinter;
use super::sink::OutputSink;
use crate::aggregator::{annotation, display_expression};
use crate::parser::{StepKind, Trace};
use std::io::{self, Write};

/// Write the program listing of `trace`
///
/// # Panics
/// If a constraint step has a non-trivial guard; the trace producer
/// guarantees constraints are unconditional.
pub fn render_program<W, P>(trace: &Trace, printer: &P, sink: &mut OutputSink<W>) -> io::Result<()>
where
    W: Write,
    P: ExprPrinter + ?Sized,
{
    let mut count: usize = 1;

    writeln!(sink)?;
    writeln!(sink, "Program constraints:")?;

    for step in &trace.steps {
        writeln!(
            sink,
            "// {} {}",
            step.source.location_number, step.source.source_location
        )?;

        let Some(label) = annotation(&step.kind) else {
            continue;
        };

        if matches!(step.kind, StepKind::Constraint) {
            assert!(
                step.guard.is_true(),
                "constraint step at location {} has a non-trivial guard",
                step.source.location_number
            );
        }

        let function_id = step.source.function_id.as_str();
        let value = printer.print(function_id, display_expression(step));

        if label.is_empty() {
            writeln!(sink, "({}) {}", count, value)?;
        } else {
            writeln!(sink, "({}) {}({})", count, label, value)?;
        }

        if !step.guard.is_true() {
            let indent = count.to_string().len() + 3;
            writeln!(
                sink,
                "{}guard: {}",
                " ".repeat(indent),
                printer.print(function_id, &step.guard)
            )?;
        }

        count += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::printer::InfixPrinter;
    use crate::parser::{Expr, SourceRef, Step};
    use pretty_assertions::assert_eq;

    fn source(n: u32) -> SourceRef {
        SourceRef {
            location_number: n,
            ..Default::default()
        }
    }

    fn render(trace: &Trace) -> String {
        let mut sink = OutputSink::new(Vec::new(), false);
        render_program(trace, &InfixPrinter, &mut sink).unwrap();
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_listing_numbers_relevant_steps() {
        let trace = Trace::new(vec![
            Step::new(
                StepKind::Assignment,
                source(1),
                Expr::new("=", vec![Expr::symbol("x"), Expr::constant("1")]),
            ),
            Step::new(StepKind::Location, source(2), Expr::default()),
            Step::new(
                StepKind::Assert,
                source(3),
                Expr::new(">", vec![Expr::symbol("x"), Expr::constant("0")]),
            )
            .with_guard(Expr::symbol("g")),
            Step::new(
                StepKind::SharedRead {
                    lhs: Expr::symbol("s"),
                    full_lhs: Expr::symbol("s_full"),
                },
                source(4),
                Expr::default(),
            ),
        ]);

        assert_eq!(
            render(&trace),
            "\nProgram constraints:\n\
             // 1 \n\
             (1) x == 1\n\
             // 2 \n\
             // 3 \n\
             (2) ASSERT(x > 0)\n\
             \x20   guard: g\n\
             // 4 \n\
             (3) SHARED_READ(s_full)\n"
        );
    }

    #[test]
    fn test_guard_indent_follows_counter_width() {
        let mut steps: Vec<Step> = (0..9)
            .map(|n| Step::new(StepKind::Assume, source(n), Expr::symbol("c")))
            .collect();
        steps.push(
            Step::new(StepKind::Assume, source(9), Expr::symbol("c")).with_guard(Expr::symbol("g")),
        );

        let out = render(&Trace::new(steps));
        assert!(out.contains("(10) ASSUME(c)\n     guard: g\n"));
    }

    #[test]
    fn test_empty_trace_prints_header_only() {
        assert_eq!(render(&Trace::default()), "\nProgram constraints:\n");
    }

    #[test]
    #[should_panic(expected = "non-trivial guard")]
    fn test_guarded_constraint_is_fatal() {
        let trace = Trace::new(vec![Step::new(
            StepKind::Constraint,
            source(1),
            Expr::symbol("c"),
        )
        .with_guard(Expr::symbol("g"))]);

        render(&trace);
    }
}
