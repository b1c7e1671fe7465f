//! Symbol table for constants.
//!
//! Maps constant names to resolved [`Value`]s. Keys are unique and the last declaration wins; there
//! is no redeclaration error. Anonymous arrays are kept in a separate slot list under synthesized
//! names (`_array_<n>`) and can never be looked up by name.

use std::collections::HashMap;
use std::fmt;

use conftoml_core::lang::names;

/// A resolved constant value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    /// Elements are already stringified for emission.
    Array(Vec<String>),
}

/// The kind of a [`Value`], used in type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Text,
    Array,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Text => "text",
            ValueKind::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Text(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::Array,
        }
    }
}

/// The stringified form used when a value becomes an array element.
///
/// Arrays flatten to their space-separated elements in brackets (`[a b]`); nested arrays are not
/// modeled.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Array(items) => write!(f, "[{}]", items.join(" ")),
        }
    }
}

/// Symbol table managing all constants of one conversion.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    constants: HashMap<String, Value>,
    anonymous: Vec<(String, Value)>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding. Returns the previous value.
    ///
    /// The caller is responsible for validating `name`.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.constants.insert(name.into(), value)
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Store an anonymous array and return its synthesized name.
    ///
    /// The slot number counts every symbol stored so far, named or anonymous.
    pub fn push_anonymous(&mut self, items: Vec<String>) -> String {
        let name = names::anonymous_array_name(self.len());
        self.anonymous.push((name.clone(), Value::Array(items)));
        name
    }

    /// Anonymous arrays in declaration order, with their synthesized names.
    pub fn anonymous(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.anonymous.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Total number of stored symbols (named and anonymous).
    pub fn len(&self) -> usize {
        self.constants.len() + self.anonymous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.constants.clear();
        self.anonymous.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut table = SymbolTable::new();
        assert_eq!(table.define("PORT", Value::Integer(80)), None);
        assert_eq!(table.define("PORT", Value::Integer(8080)), Some(Value::Integer(80)));
        assert_eq!(table.lookup("PORT"), Some(&Value::Integer(8080)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn anonymous_arrays_are_not_reachable_by_name() {
        let mut table = SymbolTable::new();
        table.define("A", Value::Integer(1));
        let name = table.push_anonymous(vec!["1".into(), "2".into()]);
        assert_eq!(name, "_array_1");
        assert!(table.lookup(&name).is_none());
        assert_eq!(table.anonymous().count(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn display_is_the_element_form() {
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Text("host".into()).to_string(), "host");
        assert_eq!(Value::Array(vec!["a".into(), "b".into()]).to_string(), "[a b]");
    }
}
