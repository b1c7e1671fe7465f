//! Const-evaluation of `?( op args... )` expressions.
//!
//! Expressions are prefix, flat (an operand is never another expression) and always produce an
//! integer. Operands are resolved against the symbol table as it stands when the declaration is
//! reached, so only constants declared on earlier lines are visible.
//!
//! Operand resolution:
//! - integer context: a bound constant must hold an integer; otherwise the token must be a numeral.
//! - text context: a bound constant must hold text; otherwise a `@"..."` literal or the raw token.
//!
//! In both contexts a constant-shaped token (`^[A-Z_]+$`) that is not bound is an error rather than
//! text.

use conftoml_core::lang::names;
use conftoml_core::lang::operators::{self, OperandKind, OperatorId};

use crate::frontend::ast::{Atom, Expression};
use crate::frontend::diagnostics::{ConvertError, ConvertResult};
use crate::frontend::symbols::{SymbolTable, Value, ValueKind};

/// Evaluates expressions against a read-only view of the symbol table.
pub struct ConstEvaluator<'a> {
    symbols: &'a SymbolTable,
}

impl<'a> ConstEvaluator<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self { symbols }
    }

    /// Evaluate an expression to an integer.
    pub fn eval(&self, expr: &Expression) -> ConvertResult<i64> {
        let Some(op) = &expr.op else {
            return Err(ConvertError::invalid_expression(&expr.source, "empty expression"));
        };
        if expr.operands.is_empty() {
            return Err(ConvertError::invalid_expression(&expr.source, "missing operands"));
        }

        let id = operators::from_str(&op.node).ok_or_else(|| ConvertError::UnknownOperation {
            op: op.node.clone(),
        })?;
        let info = operators::info_for(id);
        if expr.operands.len() != info.arity {
            return Err(ConvertError::invalid_expression(
                &expr.source,
                format!(
                    "'{}' ({}) takes {} operand(s), found {}",
                    info.canonical,
                    info.summary,
                    info.arity,
                    expr.operands.len()
                ),
            ));
        }

        match info.operand {
            OperandKind::Integer => {
                let args = expr
                    .operands
                    .iter()
                    .map(|operand| self.integer_operand(&operand.node))
                    .collect::<ConvertResult<Vec<i64>>>()?;
                integer_op(id, &args)
                    .ok_or_else(|| ConvertError::invalid_expression(&expr.source, "integer overflow"))
            }
            OperandKind::Text => ord(&self.text_operand(&expr.operands[0].node)?),
        }
    }

    /// Resolve an operand in integer context.
    pub fn integer_operand(&self, atom: &Atom) -> ConvertResult<i64> {
        match atom {
            Atom::Int { value, .. } => Ok(*value),
            Atom::Name(name) => match self.symbols.lookup(name) {
                Some(Value::Integer(n)) => Ok(*n),
                Some(other) => Err(mismatch(name, ValueKind::Integer, other.kind())),
                None => Err(unbound(name, ValueKind::Integer)),
            },
            Atom::Str(_) | Atom::Raw(_) => Err(mismatch(atom.text(), ValueKind::Integer, ValueKind::Text)),
        }
    }

    /// Resolve an operand in text context.
    pub fn text_operand(&self, atom: &Atom) -> ConvertResult<String> {
        match atom {
            Atom::Name(name) => match self.symbols.lookup(name) {
                Some(Value::Text(s)) => Ok(s.clone()),
                Some(other) => Err(mismatch(name, ValueKind::Text, other.kind())),
                None if names::is_constant_name(name) => Err(unbound(name, ValueKind::Text)),
                None => Ok(name.clone()),
            },
            Atom::Int { raw, .. } => Ok(raw.clone()),
            Atom::Str(s) | Atom::Raw(s) => Ok(s.clone()),
        }
    }
}

/// Apply an integer operator to arguments already checked against its arity. `None` on overflow.
fn integer_op(id: OperatorId, args: &[i64]) -> Option<i64> {
    match (id, args) {
        (OperatorId::Add, [a, b]) => a.checked_add(*b),
        (OperatorId::Sub, [a, b]) => a.checked_sub(*b),
        (OperatorId::Abs, [n]) => n.checked_abs(),
        _ => None,
    }
}

/// Code point of the first character. One pair of plain double quotes around the text is ignored,
/// so `?(ord "Z")` is 90.
fn ord(text: &str) -> ConvertResult<i64> {
    if text.is_empty() {
        return Err(ConvertError::EmptyString);
    }
    let mut inner = text;
    if inner.starts_with('"') && inner.ends_with('"') {
        inner = inner.strip_prefix('"').unwrap_or(inner);
        inner = inner.strip_suffix('"').unwrap_or(inner);
    }
    inner
        .chars()
        .next()
        .map(|c| i64::from(u32::from(c)))
        .ok_or(ConvertError::EmptyString)
}

fn mismatch(token: &str, expected: ValueKind, found: ValueKind) -> ConvertError {
    ConvertError::TypeMismatch {
        token: token.to_string(),
        expected: expected.as_str(),
        found: found.as_str(),
    }
}

/// An identifier with no binding: undefined if it could have been a constant, otherwise plain text
/// where a number was needed.
fn unbound(name: &str, expected: ValueKind) -> ConvertError {
    if names::is_constant_name(name) {
        ConvertError::UndefinedVariable { name: name.to_string() }
    } else {
        mismatch(name, expected, ValueKind::Text)
    }
}
