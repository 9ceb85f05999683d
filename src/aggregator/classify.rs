//! Step classification.
//!
//! Decides which SSA steps take part in reports and which of their
//! expressions is shown.

use crate::parser::{Expr, Step, StepKind};

/// True for the step kinds that carry a reportable expression
pub fn is_relevant(step: &Step) -> bool {
    match step.kind {
        StepKind::Assignment
        | StepKind::Assert
        | StepKind::Assume
        | StepKind::Constraint
        | StepKind::SharedRead { .. }
        | StepKind::SharedWrite { .. } => true,
        StepKind::Location
        | StepKind::Decl
        | StepKind::Goto
        | StepKind::FunctionCall
        | StepKind::FunctionReturn
        | StepKind::Output
        | StepKind::Input
        | StepKind::AtomicBegin
        | StepKind::AtomicEnd
        | StepKind::Spawn
        | StepKind::MemoryBarrier => false,
    }
}

/// Expression shown and analysed for a step.
///
/// Shared accesses show their full left-hand side, everything else its
/// condition. Only meaningful for steps where [`is_relevant`] holds.
pub fn display_expression(step: &Step) -> &Expr {
    match &step.kind {
        StepKind::SharedRead { full_lhs, .. } | StepKind::SharedWrite { full_lhs, .. } => full_lhs,
        _ => &step.cond_expr,
    }
}

/// Listing annotation for a relevant step kind; empty for plain assignments
pub fn annotation(kind: &StepKind) -> Option<&'static str> {
    match kind {
        StepKind::Assignment => Some(""),
        StepKind::Assert => Some("ASSERT"),
        StepKind::Assume => Some("ASSUME"),
        StepKind::Constraint => Some("CONSTRAINT"),
        StepKind::SharedRead { .. } => Some("SHARED_READ"),
        StepKind::SharedWrite { .. } => Some("SHARED_WRITE"),
        StepKind::Location
        | StepKind::Decl
        | StepKind::Goto
        | StepKind::FunctionCall
        | StepKind::FunctionReturn
        | StepKind::Output
        | StepKind::Input
        | StepKind::AtomicBegin
        | StepKind::AtomicEnd
        | StepKind::Spawn
        | StepKind::MemoryBarrier => None,
    }
}
