//! Conversion backend
//!
//! This module serializes resolved values into TOML text.
//!
//! ## Module Organization
//!
//! - `toml.rs` - TOML output buffer and value formatting

#![deny(clippy::unwrap_used)]

pub mod toml;

pub use toml::{TomlEmitter, format_value};
