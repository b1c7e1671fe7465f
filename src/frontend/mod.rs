//! Conversion frontend
//!
//! This module contains everything that runs before TOML emission:
//! - `comments`: block-comment stripping with an offset map back to the input
//! - `lexer`: tokenization of the stripped text
//! - `parser`: classifying lines into AST nodes
//! - `ast`: line and value definitions
//! - `diagnostics`: the error type shared by every stage
//! - `symbols`: the constant table
//! - `resolver`: binding declarations and resolving value tokens
//! - `const_eval`: evaluation of `?( ... )` expressions

// Syntax components are provided by the shared conftoml_syntax crate.
pub use conftoml_syntax::{ast, comments, diagnostics, lexer, parser};

// Evaluation needs the symbol table, so it stays local.
pub mod const_eval;
pub mod resolver;
pub mod symbols;
