/// Line classification.
///
/// Rules are tried in order and the first match wins:
/// 1. `NAME := value;` (a `:=` somewhere and a trailing `;`) is a constant declaration.
/// 2. `[ ... ]` is an anonymous array when the interior has a `,` and no `=`/`:=`, otherwise a
///    section header whose name is the interior text.
/// 3. A line with `=` and no `:=` is a key-value pair.
/// 4. Anything else is unrecognized.
///
/// Comment lines never get here: the lexer drops them.
impl<'a> Parser<'a> {
    fn classify(&self, line: &'a [Token]) -> ConvertResult<Line> {
        let assigns = count_punct(line, PunctuationId::Assign);

        if assigns > 0 && is_punct(line.last(), PunctuationId::Semicolon) {
            return self.constant(line, assigns).map(Line::Constant);
        }

        if let Some(inner) = delimited(line, PunctuationId::LBracket, PunctuationId::RBracket) {
            return Ok(self.bracketed(inner));
        }

        if assigns == 0 && contains_punct(line, PunctuationId::Eq) {
            return self.key_value(line).map(Line::KeyValue);
        }

        Ok(Line::Unrecognized(self.raw(line).to_string()))
    }

    fn constant(&self, line: &'a [Token], assigns: usize) -> ConvertResult<ConstDecl> {
        if assigns > 1 {
            return Err(ConvertError::syntax(
                "a constant declaration takes exactly one ':='",
            ));
        }
        let Some(at) = find_punct(line, PunctuationId::Assign) else {
            return Err(ConvertError::syntax("expected ':='"));
        };
        let name_tokens = &line[..at];
        let value_tokens = &line[at + 1..line.len() - 1];

        let name = Spanned::new(
            self.raw(name_tokens).to_string(),
            span_of(name_tokens, line[at].span.start),
        );
        let value = Spanned::new(
            self.const_value(value_tokens),
            span_of(value_tokens, line[at].span.end),
        );
        Ok(ConstDecl { name, value })
    }

    fn bracketed(&self, inner: &'a [Token]) -> Line {
        let is_array = contains_punct(inner, PunctuationId::Comma)
            && !contains_punct(inner, PunctuationId::Eq)
            && !contains_punct(inner, PunctuationId::Assign);

        if is_array {
            Line::AnonymousArray(self.elements(inner))
        } else {
            Line::Section(self.raw(inner).to_string())
        }
    }

    fn key_value(&self, line: &'a [Token]) -> ConvertResult<KeyValue> {
        let Some(at) = find_punct(line, PunctuationId::Eq) else {
            return Err(ConvertError::syntax("expected '='"));
        };
        let key_tokens = &line[..at];
        if key_tokens.is_empty() {
            return Err(ConvertError::syntax("missing key before '='"));
        }
        let value_tokens = &line[at + 1..];

        Ok(KeyValue {
            key: Spanned::new(self.raw(key_tokens).to_string(), span_of(key_tokens, 0)),
            value: Spanned::new(
                self.atom(value_tokens),
                span_of(value_tokens, line[at].span.end),
            ),
        })
    }
}
