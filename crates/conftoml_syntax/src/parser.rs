//! Parser for the conftoml language
//!
//! Classifies each non-blank line of the token stream and builds its [`Line`] node. The grammar is
//! line-oriented, so this is a small recursive-descent parser over one line of tokens at a time.
//!
//! ## Examples
//!
//! ```rust
//! use conftoml_syntax::ast::Line;
//! use conftoml_syntax::{lexer, parser};
//!
//! let source = "[server]\nport = 8080\n";
//! let tokens = lexer::lex(source);
//! let lines = parser::parse(source, &tokens).unwrap();
//! assert!(matches!(lines[0].node, Line::Section(ref name) if name == "server"));
//! ```

use crate::ast::*;
use crate::diagnostics::{ConvertError, ConvertResult};
use crate::lexer::{Token, TokenKind};
use conftoml_core::lang::punctuation::{self, PunctuationId};
use conftoml_core::numeric;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module while avoiding a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/line.rs");
include!("parser/values.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
