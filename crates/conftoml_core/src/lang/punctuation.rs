//! Punctuation vocabulary.
//!
//! This module defines the canonical set of punctuation tokens used by the lexer/parser
//! (delimiters, separators, assignment markers) plus the markers that never reach the token stream
//! because they are consumed earlier (comment delimiters) or are part of a literal (`@"`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only. It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use conftoml_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(":="), Some(PunctuationId::Assign));
//! assert_eq!(punctuation::as_str(PunctuationId::ExprOpen), "?(");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and the expression delimiters.
    Delimiter,
    /// `,` and `;`.
    Separator,
    /// `:=` and `=`.
    Assignment,
    /// Comment and string markers (never emitted as tokens).
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Assignment
    Assign,
    Eq,

    // Separators
    Comma,
    Semicolon,

    // Delimiters
    LBracket,
    RBracket,
    ExprOpen,
    RParen,

    // Markers
    StringOpen,
    LineComment,
    BlockCommentOpen,
    BlockCommentClose,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Assign, ":=", PunctuationCategory::Assignment),
    info(PunctuationId::Eq, "=", PunctuationCategory::Assignment),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::ExprOpen, "?(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::StringOpen, "@\"", PunctuationCategory::Marker),
    info(PunctuationId::LineComment, "//", PunctuationCategory::Marker),
    info(PunctuationId::BlockCommentOpen, "{-", PunctuationCategory::Marker),
    info(PunctuationId::BlockCommentClose, "-}", PunctuationCategory::Marker),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
