//! Errors raised while converting a configuration file.
//!
//! Every failure aborts the conversion: there is no recovery and no partial output. Line-level
//! failures are wrapped in [`ConvertError::AtLine`] so the caller learns where it happened; use
//! [`ConvertError::root`] to match on the underlying kind.
//!
//! The type derives [`miette::Diagnostic`], so a front end can attach the input text
//! (`miette::Report::with_source_code`) and get the failing line rendered with a label.

use std::io;
use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result alias used throughout the converter.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("syntax error: {message}")]
    #[diagnostic(code(conftoml::syntax))]
    Syntax { message: String },

    #[error("invalid constant name '{name}': only uppercase letters and underscores are allowed")]
    #[diagnostic(
        code(conftoml::invalid_name),
        help("constant names must match ^[A-Z_]+$, e.g. `MAX_CONNECTIONS := 10;`")
    )]
    InvalidName { name: String },

    #[error("invalid expression '{expr}': {reason}")]
    #[diagnostic(
        code(conftoml::invalid_expression),
        help("expressions look like `?(+ A B)`, `?(- A B)`, `?(ord S)` or `?(abs N)`")
    )]
    InvalidExpression { expr: String, reason: String },

    #[error("unknown operation '{op}'")]
    #[diagnostic(code(conftoml::unknown_operation), help("supported operations are +, -, ord and abs"))]
    UnknownOperation { op: String },

    #[error("type mismatch for '{token}': expected {expected}, found {found}")]
    #[diagnostic(code(conftoml::type_mismatch))]
    TypeMismatch {
        token: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("undefined constant '{name}'")]
    #[diagnostic(code(conftoml::undefined), help("declare the constant on an earlier line"))]
    UndefinedVariable { name: String },

    #[error("ord: string must not be empty")]
    #[diagnostic(code(conftoml::empty_string))]
    EmptyString,

    #[error("unrecognized line '{text}'")]
    #[diagnostic(
        code(conftoml::unrecognized_line),
        help("expected `NAME := value;`, `[section]`, `[a, b]` or `key = value`")
    )]
    UnrecognizedLine { text: String },

    #[error("I/O error on '{}'", .path.display())]
    #[diagnostic(code(conftoml::io))]
    Io { path: PathBuf, source: io::Error },

    #[error("line {line}: {error}")]
    #[diagnostic(code(conftoml::line))]
    AtLine {
        line: usize,
        #[label("while converting this line")]
        span: SourceSpan,
        error: Box<ConvertError>,
    },
}

impl ConvertError {
    pub fn syntax(message: impl Into<String>) -> Self {
        ConvertError::Syntax {
            message: message.into(),
        }
    }

    pub fn invalid_expression(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the 1-based line number and the byte span (into the original input) of the line
    /// being converted. Already-located errors are returned unchanged.
    pub fn at_line(self, line: usize, span: impl Into<SourceSpan>) -> Self {
        match self {
            located @ ConvertError::AtLine { .. } => located,
            error => ConvertError::AtLine {
                line,
                span: span.into(),
                error: Box::new(error),
            },
        }
    }

    /// The underlying error with any location wrapper removed.
    pub fn root(&self) -> &ConvertError {
        match self {
            ConvertError::AtLine { error, .. } => error.root(),
            other => other,
        }
    }

    /// The 1-based line number, if the error is located.
    pub fn line(&self) -> Option<usize> {
        match self {
            ConvertError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_line_wraps_once() {
        let err = ConvertError::EmptyString.at_line(3, (10usize, 4usize)).at_line(9, (0usize, 1usize));
        assert_eq!(err.line(), Some(3));
        assert!(matches!(err.root(), ConvertError::EmptyString));
    }

    #[test]
    fn located_message_names_the_line() {
        let err = ConvertError::UnknownOperation { op: "*".to_string() }.at_line(2, (0usize, 5usize));
        assert_eq!(err.to_string(), "line 2: unknown operation '*'");
    }

    #[test]
    fn io_message_names_the_path() {
        let err = ConvertError::io("missing.conf", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "I/O error on 'missing.conf'");
        assert!(std::error::Error::source(&err).is_some());
    }
}
