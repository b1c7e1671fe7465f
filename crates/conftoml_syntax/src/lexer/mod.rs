//! Lexer for the conftoml language
//!
//! Turns comment-stripped text into a flat token stream:
//! - punctuation (`:=`, `=`, `;`, `,`, `[`, `]`, `?(`, `)`) as registry IDs,
//! - numerals (decimal and octal), identifiers, `@"..."` strings,
//! - any other run of non-blank characters as an opaque `Word`,
//! - `Newline` between non-blank lines and a final `Eof`.
//!
//! Line comments (`//` as the first non-blank text of a line) are dropped here. A `//` anywhere else
//! is ordinary text, so `url = http://host` survives intact.
//!
//! Lexing never fails: malformed input (for example an unterminated `@"`) degrades to `Word` tokens
//! and is judged later by the parser or evaluator.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use conftoml_core::lang::punctuation::{self, PunctuationId};
use conftoml_core::numeric;

/// Lexer for conftoml source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    at_line_start: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            at_line_start: true,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn rest(&self) -> &'a str {
        &self.source[self.current_pos..]
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn punct(&mut self, id: PunctuationId, start: usize) {
        // Multi-character spellings (`:=`, `?(`) have already had their first char consumed.
        for _ in 1..punctuation::as_str(id).len() {
            self.advance();
        }
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        if self.at_line_start && self.rest().starts_with(punctuation::as_str(PunctuationId::LineComment)) {
            self.skip_line_comment();
            return;
        }

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '\n' => {
                // Blank and comment-only lines do not produce a Newline of their own.
                if !self.at_line_start {
                    self.add_token(TokenKind::Newline, start);
                }
                self.at_line_start = true;
            }

            // `\r` and other blanks separate tokens but never end a line.
            c if c.is_whitespace() => {}

            _ => {
                self.at_line_start = false;
                match c {
                    ':' if self.peek() == Some('=') => self.punct(PunctuationId::Assign, start),
                    '?' if self.peek() == Some('(') => self.punct(PunctuationId::ExprOpen, start),
                    '=' => self.punct(PunctuationId::Eq, start),
                    ';' => self.punct(PunctuationId::Semicolon, start),
                    ',' => self.punct(PunctuationId::Comma, start),
                    '[' => self.punct(PunctuationId::LBracket, start),
                    ']' => self.punct(PunctuationId::RBracket, start),
                    ')' => self.punct(PunctuationId::RParen, start),
                    '@' if self.peek() == Some('"') => self.scan_string(start),
                    _ => self.scan_run(start),
                }
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Scan `@"..."`. The closing quote must be on the same line; otherwise the text is an opaque run.
    fn scan_string(&mut self, start: usize) {
        let body_start = start + punctuation::as_str(PunctuationId::StringOpen).len();
        let line = &self.source[body_start..];
        let line = &line[..line.find('\n').unwrap_or(line.len())];

        match line.find('"') {
            Some(close) => {
                let end = body_start + close + 1;
                while self.current_pos < end {
                    self.advance();
                }
                let value = self.source[body_start..body_start + close].to_string();
                self.add_token(TokenKind::Str(value), start);
            }
            None => self.scan_run(start),
        }
    }

    /// Scan a run of non-blank, non-delimiter characters and classify it.
    fn scan_run(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if ends_run(c) || self.rest().starts_with(punctuation::as_str(PunctuationId::Assign)) {
                break;
            }
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        let kind = if let Some(value) = numeric::parse_numeral(spelling) {
            TokenKind::Int(value)
        } else if is_identifier(spelling) {
            TokenKind::Ident(spelling.to_string())
        } else {
            TokenKind::Word(spelling.to_string())
        };
        self.add_token(kind, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn ends_run(c: char) -> bool {
    c.is_whitespace() || matches!(c, '=' | ';' | ',' | '[' | ']' | ')')
}

/// Check if a spelling is an identifier (ASCII-only).
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
