/// Value parsing: constant right-hand sides, expressions, array elements and atoms.
impl<'a> Parser<'a> {
    /// Parse the value of `NAME := value;` (tokens between `:=` and `;`).
    fn const_value(&self, tokens: &'a [Token]) -> ConstValue {
        if let Some(body) = delimited(tokens, PunctuationId::ExprOpen, PunctuationId::RParen) {
            return ConstValue::Expr(self.expression(body));
        }
        if let Some(inner) = delimited(tokens, PunctuationId::LBracket, PunctuationId::RBracket) {
            return ConstValue::Array(self.elements(inner));
        }
        ConstValue::Atom(self.atom(tokens))
    }

    /// Parse the body of `?( ... )`: an operator followed by one atom per whitespace-separated field.
    ///
    /// Fields come from the body text, not the tokens, so `@"a b"` is two operands. Arity and
    /// operator validity are the evaluator's business; the parser only splits.
    fn expression(&self, body: &'a [Token]) -> Expression {
        let base = body.first().map_or(0, |t| t.span.start);
        let source = self.raw(body);
        let mut fields = whitespace_fields(source)
            .into_iter()
            .map(|(offset, text)| (text, Span::new(base + offset, base + offset + text.len())));

        let op = fields.next().map(|(text, span)| Spanned::new(text.to_string(), span));
        let operands = fields.map(|(text, span)| Spanned::new(word_atom(text), span)).collect();

        Expression {
            source: source.to_string(),
            op,
            operands,
        }
    }

    /// Split array contents on `,`, skipping empty elements.
    fn elements(&self, inner: &'a [Token]) -> Vec<Spanned<Atom>> {
        inner
            .split(|t| t.kind.is_punctuation(PunctuationId::Comma))
            .filter(|element| !element.is_empty())
            .map(|element| Spanned::new(self.atom(element), span_of(element, 0)))
            .collect()
    }

    /// Build an atom. A single token keeps its type. Anything else is opaque text, unless the whole
    /// run is wrapped in `@"` and `"`, in which case the interior is a string.
    fn atom(&self, tokens: &'a [Token]) -> Atom {
        match tokens {
            [token] => match &token.kind {
                TokenKind::Int(value) => Atom::Int {
                    value: *value,
                    raw: self.raw(tokens).to_string(),
                },
                TokenKind::Str(s) => Atom::Str(s.clone()),
                TokenKind::Ident(name) => Atom::Name(name.clone()),
                _ => opaque(self.raw(tokens)),
            },
            _ => opaque(self.raw(tokens)),
        }
    }
}

/// The interior of `@"..."`, or `None` if `text` is not wrapped in the string markers.
fn quoted_literal(text: &str) -> Option<&str> {
    text.strip_prefix(punctuation::as_str(PunctuationId::StringOpen))?
        .strip_suffix('"')
}

fn opaque(text: &str) -> Atom {
    match quoted_literal(text) {
        Some(inner) => Atom::Str(inner.to_string()),
        None => Atom::Raw(text.to_string()),
    }
}

/// Classify one whitespace-separated expression field.
fn word_atom(text: &str) -> Atom {
    if let Some(value) = numeric::parse_numeral(text) {
        Atom::Int {
            value,
            raw: text.to_string(),
        }
    } else if crate::lexer::is_identifier(text) {
        Atom::Name(text.to_string())
    } else {
        opaque(text)
    }
}

/// Split `text` on whitespace, keeping each field's byte offset.
fn whitespace_fields(text: &str) -> Vec<(usize, &str)> {
    let mut fields = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                fields.push((s, &text[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        fields.push((s, &text[s..]));
    }
    fields
}
