/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and the line-at-a-time driver.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.
/// - Lines are produced lazily: a caller that stops at the first error never parses the rest.

/// Outcome of parsing one line: the classified line, or the error together with the line's span.
pub type LineResult = Result<Spanned<Line>, Spanned<ConvertError>>;

/// Parser state.
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `source`: the text the tokens were lexed from (opaque values are sliced from it).
    /// - `tokens`: token stream produced by `conftoml_syntax::lexer`, ending in `Eof`.
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self { source, tokens, pos: 0 }
    }

    /// Parse every line, stopping at the first error.
    pub fn parse(self) -> Result<Vec<Spanned<Line>>, Spanned<ConvertError>> {
        self.collect()
    }

    /// Classify the next non-blank line, or return `None` at end of input.
    pub fn next_line(&mut self) -> Option<LineResult> {
        self.skip_newlines();
        let start = self.pos;
        while !self.at_line_end() {
            self.pos += 1;
        }
        let tokens = self.tokens;
        let line = &tokens[start..self.pos];
        // Step over the Newline (Eof is never consumed).
        if self.pos < self.tokens.len() && matches!(self.tokens[self.pos].kind, TokenKind::Newline) {
            self.pos += 1;
        }

        let (first, last) = (line.first()?, line.last()?);
        let span = first.span.merge(last.span);
        Some(
            self.classify(line)
                .map(|node| Spanned::new(node, span))
                .map_err(|err| Spanned::new(err, span)),
        )
    }
}

impl Iterator for Parser<'_> {
    type Item = LineResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
