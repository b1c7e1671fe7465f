/// Token-slice helpers.
///
/// All classification works on the tokens of a single line, so these helpers take slices rather
/// than peeking at parser state.
impl<'a> Parser<'a> {
    /// Return `true` at a line boundary (`Newline` or `Eof`) or past the end of the stream.
    fn at_line_end(&self) -> bool {
        self.tokens.get(self.pos).is_none_or(|t| t.kind.is_layout())
    }

    fn skip_newlines(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|t| matches!(t.kind, TokenKind::Newline))
        {
            self.pos += 1;
        }
    }

    /// The source text covered by `tokens`, from the first token's start to the last token's end.
    fn raw(&self, tokens: &[Token]) -> &'a str {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &self.source[first.span.start..last.span.end],
            _ => "",
        }
    }
}

/// Span covering `tokens`, or an empty span at `fallback` when there are none.
fn span_of(tokens: &[Token], fallback: usize) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span::new(fallback, fallback),
    }
}

fn is_punct(token: Option<&Token>, id: PunctuationId) -> bool {
    token.is_some_and(|t| t.kind.is_punctuation(id))
}

fn contains_punct(tokens: &[Token], id: PunctuationId) -> bool {
    tokens.iter().any(|t| t.kind.is_punctuation(id))
}

fn count_punct(tokens: &[Token], id: PunctuationId) -> usize {
    tokens.iter().filter(|t| t.kind.is_punctuation(id)).count()
}

fn find_punct(tokens: &[Token], id: PunctuationId) -> Option<usize> {
    tokens.iter().position(|t| t.kind.is_punctuation(id))
}

/// Strip a matching `open ... close` pair, returning the interior.
fn delimited(tokens: &[Token], open: PunctuationId, close: PunctuationId) -> Option<&[Token]> {
    if tokens.len() >= 2 && is_punct(tokens.first(), open) && is_punct(tokens.last(), close) {
        Some(&tokens[1..tokens.len() - 1])
    } else {
        None
    }
}
