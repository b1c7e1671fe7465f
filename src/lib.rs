#![forbid(unsafe_code)]
//! conftoml: a converter from a small constant-configuration language to TOML.
//!
//! The input language has typed constants (`PORT := 8080;`), prefix expressions over them
//! (`?(+ PORT 1)`), section headers and `key = value` lines. Constants are resolved and expressions
//! evaluated at conversion time; the output is plain TOML with only sections and key-value pairs.
//!
//! This crate provides the pipeline (frontend: comment stripping, lexer, parser, constant
//! resolution and evaluation; backend: TOML emission) and the `conftoml` command-line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a converter bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.

pub mod backend;
pub mod cli;
pub mod config;
pub mod convert;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;

pub use backend::TomlEmitter;
pub use config::{AnonymousArrayPolicy, ConvertConfig, UnrecognizedLinePolicy};
pub use convert::{Converter, convert_str, parse};
pub use diagnostics::{ConvertError, ConvertResult};
