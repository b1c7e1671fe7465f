//! Value and constant resolution.
//!
//! - [`resolve_atom`] turns a value token into a [`Value`]: a bound constant, a numeral, a quoted
//!   literal, or the raw text. It never evaluates expressions and never fails, which is what
//!   key-value right-hand sides and array elements need.
//! - [`ConstResolver`] binds a declaration into the symbol table.
//!
//! Aliasing is one level deep: `B := A;` copies A's value as it is at that moment. Later changes to
//! A do not affect B.

use conftoml_core::lang::names;

use crate::frontend::ast::{Atom, ConstDecl, ConstValue, Spanned};
use crate::frontend::const_eval::ConstEvaluator;
use crate::frontend::diagnostics::{ConvertError, ConvertResult};
use crate::frontend::symbols::{SymbolTable, Value};

/// Resolve a value token (key-value right-hand side or array element).
pub fn resolve_atom(symbols: &SymbolTable, atom: &Atom) -> Value {
    match atom {
        Atom::Name(name) => symbols
            .lookup(name)
            .cloned()
            .unwrap_or_else(|| Value::Text(name.clone())),
        Atom::Int { value, .. } => Value::Integer(*value),
        Atom::Str(s) | Atom::Raw(s) => Value::Text(s.clone()),
    }
}

/// Resolve array elements to their stringified form.
pub fn resolve_elements(symbols: &SymbolTable, items: &[Spanned<Atom>]) -> Vec<String> {
    items
        .iter()
        .map(|item| resolve_atom(symbols, &item.node).to_string())
        .collect()
}

/// Binds constant declarations into a symbol table.
pub struct ConstResolver<'a> {
    symbols: &'a mut SymbolTable,
}

impl<'a> ConstResolver<'a> {
    pub fn new(symbols: &'a mut SymbolTable) -> Self {
        Self { symbols }
    }

    /// Validate the name, resolve the value and bind it.
    pub fn declare(&mut self, decl: &ConstDecl) -> ConvertResult<()> {
        let name = decl.name.node.as_str();
        if !names::is_constant_name(name) {
            return Err(ConvertError::InvalidName { name: name.to_string() });
        }

        let value = self.resolve(&decl.value.node)?;
        tracing::debug!(constant = name, kind = %value.kind(), "constant bound");
        self.symbols.define(name, value);
        Ok(())
    }

    fn resolve(&self, value: &ConstValue) -> ConvertResult<Value> {
        match value {
            ConstValue::Expr(expr) => ConstEvaluator::new(&*self.symbols).eval(expr).map(Value::Integer),
            ConstValue::Array(items) => Ok(Value::Array(resolve_elements(&*self.symbols, items))),
            ConstValue::Atom(atom) => Ok(resolve_atom(&*self.symbols, atom)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};
    use crate::frontend::ast::Line;

    fn declare_all(source: &str) -> ConvertResult<SymbolTable> {
        let tokens = lexer::lex(source);
        let lines = parser::parse(source, &tokens).map_err(|e| e.node)?;
        let mut symbols = SymbolTable::new();
        for line in lines {
            if let Line::Constant(decl) = line.node {
                ConstResolver::new(&mut symbols).declare(&decl)?;
            }
        }
        Ok(symbols)
    }

    #[test]
    fn binds_every_value_form() {
        let symbols = declare_all(
            "PORT := 8080;\nHOST := @\"localhost\";\nOCTAL := 0o755;\nSUM := ?(+ PORT 1);\n\
             PORTS := [80, PORT, @\"x\"];\nWORD := plain text;\n",
        )
        .unwrap();
        assert_eq!(symbols.lookup("PORT"), Some(&Value::Integer(8080)));
        assert_eq!(symbols.lookup("HOST"), Some(&Value::Text("localhost".into())));
        assert_eq!(symbols.lookup("OCTAL"), Some(&Value::Integer(493)));
        assert_eq!(symbols.lookup("SUM"), Some(&Value::Integer(8081)));
        assert_eq!(
            symbols.lookup("PORTS"),
            Some(&Value::Array(vec!["80".into(), "8080".into(), "x".into()]))
        );
        assert_eq!(symbols.lookup("WORD"), Some(&Value::Text("plain text".into())));
    }

    #[test]
    fn alias_copies_value_once() {
        let symbols = declare_all("A := 1;\nB := A;\nA := 2;\n").unwrap();
        assert_eq!(symbols.lookup("A"), Some(&Value::Integer(2)));
        assert_eq!(symbols.lookup("B"), Some(&Value::Integer(1)));
    }

    #[test]
    fn unbound_name_becomes_text() {
        let symbols = declare_all("B := MISSING;\n").unwrap();
        assert_eq!(symbols.lookup("B"), Some(&Value::Text("MISSING".into())));
    }

    #[test]
    fn rejects_invalid_names() {
        for source in ["invalid_name := 42;", "Port := 1;", " := 1;", "A1 := 1;"] {
            let err = declare_all(source).unwrap_err();
            assert!(matches!(err, ConvertError::InvalidName { .. }), "{source}: {err}");
        }
    }

    #[test]
    fn resolve_atom_prefers_bound_constants() {
        let mut symbols = SymbolTable::new();
        symbols.define("X", Value::Text("bound".into()));
        assert_eq!(resolve_atom(&symbols, &Atom::Name("X".into())), Value::Text("bound".into()));
        assert_eq!(resolve_atom(&symbols, &Atom::Name("Y".into())), Value::Text("Y".into()));
        assert_eq!(
            resolve_atom(&symbols, &Atom::Int { value: 8, raw: "0o10".into() }),
            Value::Integer(8)
        );
    }

    #[test]
    fn nested_array_reference_is_flattened() {
        let symbols = declare_all("INNER := [1, 2];\nOUTER := [INNER, 3];\n").unwrap();
        assert_eq!(
            symbols.lookup("OUTER"),
            Some(&Value::Array(vec!["[1 2]".into(), "3".into()]))
        );
    }
}
