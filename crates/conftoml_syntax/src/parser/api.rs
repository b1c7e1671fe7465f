/// Parse a token stream into classified lines.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: the text the tokens were lexed from.
/// - `tokens`: token stream produced by `conftoml_syntax::lexer`.
///
/// ## Errors
/// Returns the first failing line's error, spanned over that line.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(source: &str, tokens: &[Token]) -> Result<Vec<Spanned<Line>>, Spanned<ConvertError>> {
    Parser::new(source, tokens).parse()
}
