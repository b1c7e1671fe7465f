//! Expression operator vocabulary.
//!
//! This module defines the operators accepted at the head of a `?( op args... )` constant
//! expression, along with their arity and the kind of operand each one consumes.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`ORD` is not an operator).
//! - Every operator is prefix and produces an integer. There is no precedence: expressions do not nest.
//!
//! ## Examples
//! ```rust
//! use conftoml_core::lang::operators::{self, OperandKind, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Add));
//! assert_eq!(operators::info_for(OperatorId::Add).arity, 2);
//! assert_eq!(operators::info_for(OperatorId::Ord).operand, OperandKind::Text);
//! ```

/// Stable identifier for every expression operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    /// `+ A B`
    Add,
    /// `- A B`
    Sub,
    /// `ord S`: code point of the first character of `S`
    Ord,
    /// `abs N`
    Abs,
}

/// The kind of value an operator expects for each of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Integer,
    Text,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    /// Exact number of operands after the operator token.
    pub arity: usize,
    pub operand: OperandKind,
    pub summary: &'static str,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Add, "+", 2, OperandKind::Integer, "sum of two integers"),
    op(OperatorId::Sub, "-", 2, OperandKind::Integer, "difference of two integers"),
    op(OperatorId::Ord, "ord", 1, OperandKind::Text, "code point of the first character"),
    op(OperatorId::Abs, "abs", 1, OperandKind::Integer, "absolute value"),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    canonical: &'static str,
    arity: usize,
    operand: OperandKind,
    summary: &'static str,
) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        arity,
        operand,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_arithmetic_takes_two_integers() {
        for id in [OperatorId::Add, OperatorId::Sub] {
            let info = info_for(id);
            assert_eq!(info.arity, 2);
            assert_eq!(info.operand, OperandKind::Integer);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("abs"), Some(OperatorId::Abs));
        assert_eq!(from_str("ABS"), None);
        assert_eq!(from_str("*"), None);
    }
}
