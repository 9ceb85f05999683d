//! Trace schema definitions.
//!
//! These types mirror the JSON the upstream verifier writes for an SSA
//! trace. They are read-only once loaded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tag of the empty expression
pub const ID_NIL: &str = "nil";

/// An expression tree node: a tag, ordered operands and named attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expr {
    /// Operator or type identifier
    pub id: String,

    /// Ordered operands
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub: Vec<Expr>,

    /// Attributes such as `identifier`, `value` or `type`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named_sub: BTreeMap<String, Expr>,
}

impl Default for Expr {
    fn default() -> Self {
        Self::leaf(ID_NIL)
    }
}

impl Expr {
    /// Node with operands and no attributes
    pub fn new(id: impl Into<String>, sub: Vec<Expr>) -> Self {
        Self {
            id: id.into(),
            sub,
            named_sub: BTreeMap::new(),
        }
    }

    /// Node without operands
    pub fn leaf(id: impl Into<String>) -> Self {
        Self::new(id, Vec::new())
    }

    /// Variable reference
    pub fn symbol(identifier: impl Into<String>) -> Self {
        Self::leaf("symbol").with_named("identifier", Self::leaf(identifier))
    }

    /// Literal
    pub fn constant(value: impl Into<String>) -> Self {
        Self::leaf("constant").with_named("value", Self::leaf(value))
    }

    /// The trivially true boolean constant
    pub fn true_expr() -> Self {
        Self::constant("true").with_named("type", Self::leaf("bool"))
    }

    pub fn with_named(mut self, name: impl Into<String>, value: Expr) -> Self {
        self.named_sub.insert(name.into(), value);
        self
    }

    /// Tag of a named attribute, if present
    pub fn named_id(&self, name: &str) -> Option<&str> {
        self.named_sub.get(name).map(|e| e.id.as_str())
    }

    pub fn is_nil(&self) -> bool {
        self.id == ID_NIL
    }

    /// True for the boolean constant `true`, in either encoding
    pub fn is_true(&self) -> bool {
        match self.id.as_str() {
            "true" => true,
            "constant" => self.named_id("value") == Some("true"),
            _ => false,
        }
    }
}

/// Position in the analysed program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(file) = &self.file {
            parts.push(format!("file {}", file));
        }
        if let Some(line) = self.line {
            parts.push(format!("line {}", line));
        }
        if let Some(column) = self.column {
            parts.push(format!("column {}", column));
        }
        if let Some(function) = &self.function {
            parts.push(format!("function {}", function));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Where a step came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRef {
    /// Sequential instruction number in the goto program
    pub location_number: u32,

    #[serde(default)]
    pub source_location: SourceLocation,

    /// Identifier of the enclosing function, used to shorten local names
    #[serde(default)]
    pub function_id: String,
}

/// The kind of an SSA step, with the data only some kinds carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", try_from = "RawStepKind")]
pub enum StepKind {
    Assignment,
    Assert,
    Assume,
    Constraint,
    SharedRead {
        lhs: Expr,
        #[serde(rename = "fullLhs")]
        full_lhs: Expr,
    },
    SharedWrite {
        lhs: Expr,
        #[serde(rename = "fullLhs")]
        full_lhs: Expr,
    },
    Location,
    Decl,
    Goto,
    FunctionCall,
    FunctionReturn,
    Output,
    Input,
    AtomicBegin,
    AtomicEnd,
    Spawn,
    MemoryBarrier,
}

/// Tag of a step kind as written in the trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StepTag {
    Assignment,
    Assert,
    Assume,
    Constraint,
    SharedRead,
    SharedWrite,
    Location,
    Decl,
    Goto,
    FunctionCall,
    FunctionReturn,
    Output,
    Input,
    AtomicBegin,
    AtomicEnd,
    Spawn,
    MemoryBarrier,
}

/// Step kind as read from JSON.
///
/// A flat struct streams its fields straight from the deserializer; an
/// internally tagged enum would buffer the left-hand sides first, outside
/// the loader's depth handling.
#[derive(Debug, Deserialize)]
struct RawStepKind {
    #[serde(rename = "type")]
    tag: StepTag,

    #[serde(default)]
    lhs: Option<Expr>,

    #[serde(default, rename = "fullLhs")]
    full_lhs: Option<Expr>,
}

impl TryFrom<RawStepKind> for StepKind {
    type Error = String;

    fn try_from(raw: RawStepKind) -> Result<Self, Self::Error> {
        let shared = |raw: RawStepKind, name: &str| match (raw.lhs, raw.full_lhs) {
            (Some(lhs), Some(full_lhs)) => Ok((lhs, full_lhs)),
            _ => Err(format!("{} step needs `lhs` and `fullLhs`", name)),
        };

        let kind = match raw.tag {
            StepTag::Assignment => StepKind::Assignment,
            StepTag::Assert => StepKind::Assert,
            StepTag::Assume => StepKind::Assume,
            StepTag::Constraint => StepKind::Constraint,
            StepTag::SharedRead => {
                let (lhs, full_lhs) = shared(raw, "shared_read")?;
                StepKind::SharedRead { lhs, full_lhs }
            }
            StepTag::SharedWrite => {
                let (lhs, full_lhs) = shared(raw, "shared_write")?;
                StepKind::SharedWrite { lhs, full_lhs }
            }
            StepTag::Location => StepKind::Location,
            StepTag::Decl => StepKind::Decl,
            StepTag::Goto => StepKind::Goto,
            StepTag::FunctionCall => StepKind::FunctionCall,
            StepTag::FunctionReturn => StepKind::FunctionReturn,
            StepTag::Output => StepKind::Output,
            StepTag::Input => StepKind::Input,
            StepTag::AtomicBegin => StepKind::AtomicBegin,
            StepTag::AtomicEnd => StepKind::AtomicEnd,
            StepTag::Spawn => StepKind::Spawn,
            StepTag::MemoryBarrier => StepKind::MemoryBarrier,
        };

        Ok(kind)
    }
}

/// One recorded event of a symbolic-execution run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub kind: StepKind,

    #[serde(default)]
    pub source: SourceRef,

    /// Condition under which the step is active
    #[serde(default = "Expr::true_expr")]
    pub guard: Expr,

    #[serde(default)]
    pub cond_expr: Expr,
}

impl Step {
    /// Step with a trivially true guard
    pub fn new(kind: StepKind, source: SourceRef, cond_expr: Expr) -> Self {
        Self {
            kind,
            source,
            guard: Expr::true_expr(),
            cond_expr,
        }
    }

    pub fn with_guard(mut self, guard: Expr) -> Self {
        self.guard = guard;
        self
    }
}

/// Ordered SSA steps of one symbolic-execution run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub steps: Vec<Step>,
}

impl Trace {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
