//! Byte-level operator accounting.
//!
//! Counts how often a verifier front-end reinterprets (extract) or
//! overwrites (update) bytes of a value inside an expression tree.

use crate::parser::Expr;
use crate::utils::config::{
    ID_BYTE_EXTRACT_BIG_ENDIAN, ID_BYTE_EXTRACT_LITTLE_ENDIAN, ID_BYTE_UPDATE_BIG_ENDIAN,
    ID_BYTE_UPDATE_LITTLE_ENDIAN,
};

/// Family of byte operators, each covering both byte orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Extract,
    Update,
}

impl OperationKind {
    pub const ALL: [OperationKind; 2] = [OperationKind::Extract, OperationKind::Update];

    /// Expression tags belonging to this family
    pub fn aliases(self) -> [&'static str; 2] {
        match self {
            OperationKind::Extract => [ID_BYTE_EXTRACT_LITTLE_ENDIAN, ID_BYTE_EXTRACT_BIG_ENDIAN],
            OperationKind::Update => [ID_BYTE_UPDATE_LITTLE_ENDIAN, ID_BYTE_UPDATE_BIG_ENDIAN],
        }
    }

    pub fn matches(self, id: &str) -> bool {
        self.aliases().contains(&id)
    }

    /// Plural noun used in the plain total line
    pub fn noun(self) -> &'static str {
        match self {
            OperationKind::Extract => "extracts",
            OperationKind::Update => "updates",
        }
    }

    /// Heading printed before a plain report on stdout
    pub fn heading(self) -> &'static str {
        match self {
            OperationKind::Extract => "Byte Extracts",
            OperationKind::Update => "Byte Updates",
        }
    }

    pub fn stats_key(self) -> &'static str {
        match self {
            OperationKind::Extract => "byteExtractStats",
            OperationKind::Update => "byteUpdateStats",
        }
    }

    pub fn list_key(self) -> &'static str {
        match self {
            OperationKind::Extract => "byteExtractList",
            OperationKind::Update => "byteUpdateList",
        }
    }

    pub fn count_key(self) -> &'static str {
        match self {
            OperationKind::Extract => "numOfExtracts",
            OperationKind::Update => "numOfUpdates",
        }
    }
}

/// Number of nodes in `expr` (root included) tagged with one of `kind`'s aliases.
///
/// Only ordered operands are walked; named attributes hold types and
/// identifiers, never operations.
pub fn count_byte_ops(expr: &Expr, kind: OperationKind) -> usize {
    let own = usize::from(kind.matches(&expr.id));
    own + expr
        .sub
        .iter()
        .map(|operand| count_byte_ops(operand, kind))
        .sum::<usize>()
}
