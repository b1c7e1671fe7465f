//! Syntax frontend for the conftoml language: block-comment stripping, lexer, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is "syntax-only": it classifies lines and builds values, but it does not look up
//!   constants or evaluate expressions. That happens in the `conftoml` crate.
//! - Vocabulary identity (operators/punctuation) comes from `conftoml_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use conftoml_syntax::{comments, lexer, parser};
//!
//! let stripped = comments::strip_block_comments("{- note -}\nPORT := 8080;\n");
//! let tokens = lexer::lex(stripped.text());
//! let lines = parser::parse(stripped.text(), &tokens).unwrap();
//! assert_eq!(lines.len(), 1);
//! ```

pub mod ast;
pub mod comments;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
