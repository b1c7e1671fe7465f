//! Provide shared, pure vocabulary and literal helpers for the conftoml converter.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces that both the syntax
//! frontend and the evaluator must agree on:
//! - the expression operator and punctuation registries (`lang`),
//! - the constant naming rule (`lang::names`),
//! - numeral recognition and decoding (`numeric`).
//!
//! ## Notes
//!
//! - No IO, no global state, no AST types.

pub mod lang;
pub mod numeric;
