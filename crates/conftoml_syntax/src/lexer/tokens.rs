//! Token types for the conftoml lexer.
//!
//! Punctuation tokens carry registry-backed IDs from `conftoml_core::lang::punctuation`, so the
//! parser never compares spellings. Value-bearing tokens keep their decoded payload.

use std::fmt;

use crate::ast::Span;
use conftoml_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Ident(String),
    /// Decimal or octal numeral, decoded.
    Int(i64),
    /// `@"..."` literal, delimiters stripped.
    Str(String),
    /// Any other run of non-blank characters (URLs, floats, plain-quoted text, operator symbols).
    Word(String),

    // ========== Layout ==========
    Newline,
    Eof,
}

impl TokenKind {
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(s) => write!(f, "identifier {s}"),
            TokenKind::Int(n) => write!(f, "integer {n}"),
            TokenKind::Str(s) => write!(f, "string \"{s}\""),
            TokenKind::Word(s) => write!(f, "text {s}"),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
