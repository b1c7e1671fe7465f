//! Language vocabulary registries.
//!
//! Callers work with **stable IDs** (`OperatorId`, `PunctuationId`) and look up spellings and
//! metadata via registry tables instead of comparing strings at every call site.
//!
//! ## Examples
//! ```rust
//! use conftoml_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("ord"), Some(OperatorId::Ord));
//! assert_eq!(operators::as_str(OperatorId::Abs), "abs");
//! ```

pub mod names;
pub mod operators;
pub mod punctuation;
