//! Syntax tree for one classified source line.
//!
//! The language is line-oriented, so the "program" is just the ordered list of classified lines.
//! Values keep enough of their spelling (`raw`) that opaque text can be reproduced exactly.

use std::fmt;

/// Byte range into the (comment-stripped) source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A classified, non-blank source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `NAME := value;`
    Constant(ConstDecl),
    /// `[name]`, emitted verbatim as a TOML table header.
    Section(String),
    /// `[a, b, c]` without a binding name. Resolved, stored under a synthesized name, never emitted.
    AnonymousArray(Vec<Spanned<Atom>>),
    /// `key = value`
    KeyValue(KeyValue),
    /// A line that matches no rule. What happens to it is a conversion policy decision.
    Unrecognized(String),
}

/// A constant declaration. The name is kept as written; validation happens at bind time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub name: Spanned<String>,
    pub value: Spanned<ConstValue>,
}

/// Right-hand side of a constant declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    /// `?( op args... )`
    Expr(Expression),
    /// `[ v1, v2, ... ]`
    Array(Vec<Spanned<Atom>>),
    /// Anything else: a single value.
    Atom(Atom),
}

/// A prefix expression. The operator is kept as spelled; the evaluator resolves it.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Full text between `?(` and `)`, for diagnostics.
    pub source: String,
    /// Operator token, `None` for an empty body.
    pub op: Option<Spanned<String>>,
    pub operands: Vec<Spanned<Atom>>,
}

/// `key = value` destined for the TOML output.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: Spanned<String>,
    pub value: Spanned<Atom>,
}

/// A single value token (or a run of tokens kept as opaque text).
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// Decimal or octal numeral. `raw` keeps the spelling (`0o755`).
    Int { value: i64, raw: String },
    /// `@"..."` literal, delimiters stripped, no escape processing.
    Str(String),
    /// Identifier-shaped token; may refer to a constant.
    Name(String),
    /// Anything else, verbatim.
    Raw(String),
}

impl Atom {
    /// The text this atom stands for when it is used as opaque text.
    pub fn text(&self) -> &str {
        match self {
            Atom::Int { raw, .. } => raw,
            Atom::Str(s) | Atom::Name(s) | Atom::Raw(s) => s,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Str(s) => write!(f, "@\"{s}\""),
            other => f.write_str(other.text()),
        }
    }
}
