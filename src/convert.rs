//! The conversion pipeline.
//!
//! ```text
//! source ─► strip block comments ─► lex ─► parse line ─► resolve / evaluate ─► emit TOML
//! ```
//!
//! Lines are processed strictly in order, one at a time, and the first failure aborts the whole
//! conversion. Nothing is written to the output file unless the conversion succeeded.
//!
//! ## Examples
//! ```rust
//! let toml = conftoml::convert_str("PORT := 8080;\n[server]\nport = PORT\n").unwrap();
//! assert_eq!(toml, "[server]\nport = 8080\n");
//! ```

use std::fs;
use std::path::Path;

use miette::SourceSpan;

use crate::backend::TomlEmitter;
use crate::config::{AnonymousArrayPolicy, ConvertConfig, UnrecognizedLinePolicy};
use crate::frontend::ast::{Line, Span};
use crate::frontend::comments::{self, StrippedSource};
use crate::frontend::diagnostics::{ConvertError, ConvertResult};
use crate::frontend::lexer;
use crate::frontend::parser::Parser;
use crate::frontend::resolver::{ConstResolver, resolve_atom, resolve_elements};
use crate::frontend::symbols::SymbolTable;

/// Converts configuration text to TOML.
///
/// The symbol table is reset at the start of every conversion, so one converter can be reused for
/// several inputs. After a conversion it still holds that run's constants, which is useful for
/// inspection and tests.
#[derive(Debug, Default)]
pub struct Converter {
    config: ConvertConfig,
    symbols: SymbolTable,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConvertConfig) -> Self {
        Self {
            config,
            symbols: SymbolTable::new(),
        }
    }

    /// Constants bound by the most recent conversion.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Convert `source` and return the TOML text.
    ///
    /// ## Errors
    /// The first failing line, wrapped in [`ConvertError::AtLine`] with its line number and span in
    /// `source`.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn convert_str(&mut self, source: &str) -> ConvertResult<String> {
        self.symbols.clear();

        let stripped = comments::strip_block_comments(source);
        let tokens = lexer::lex(stripped.text());

        let mut emitter = TomlEmitter::new();
        for line in Parser::new(stripped.text(), &tokens) {
            match line {
                Ok(line) => self
                    .convert_line(&line.node, &mut emitter)
                    .map_err(|err| locate(source, &stripped, err, line.span))?,
                Err(err) => return Err(locate(source, &stripped, err.node, err.span)),
            }
        }

        tracing::debug!(
            lines = emitter.line_count(),
            constants = self.symbols.len(),
            "conversion finished"
        );
        Ok(emitter.finish())
    }

    /// Read `input`, convert it and write the TOML to `output`.
    ///
    /// `output` is created or truncated only after the conversion succeeded.
    #[tracing::instrument(skip_all, fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
    pub fn parse(&mut self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> ConvertResult<()> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let source = fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;
        let toml = self.convert_str(&source)?;
        fs::write(output, toml).map_err(|e| ConvertError::io(output, e))
    }

    fn convert_line(&mut self, line: &Line, emitter: &mut TomlEmitter) -> ConvertResult<()> {
        match line {
            Line::Constant(decl) => ConstResolver::new(&mut self.symbols).declare(decl)?,
            Line::Section(name) => emitter.section(name),
            Line::KeyValue(kv) => {
                let value = resolve_atom(&self.symbols, &kv.value.node);
                emitter.key_value(&kv.key.node, &value);
            }
            Line::AnonymousArray(items) => {
                let items = resolve_elements(&self.symbols, items);
                match self.config.anonymous_arrays {
                    AnonymousArrayPolicy::Record => {
                        let len = items.len();
                        let name = self.symbols.push_anonymous(items);
                        tracing::debug!(array = %name, len, "anonymous array stored");
                    }
                    AnonymousArrayPolicy::Discard => {
                        tracing::debug!(len = items.len(), "anonymous array discarded");
                    }
                }
            }
            Line::Unrecognized(text) => match self.config.unrecognized_lines {
                UnrecognizedLinePolicy::Reject => {
                    return Err(ConvertError::UnrecognizedLine { text: text.clone() });
                }
                UnrecognizedLinePolicy::Skip => tracing::warn!(line = %text, "skipping unrecognized line"),
            },
        }
        Ok(())
    }
}

/// Wrap `err` with the line number and span of `span` (stripped-text offsets) in the
/// unstripped `source`.
pub(crate) fn locate(source: &str, stripped: &StrippedSource, err: ConvertError, span: Span) -> ConvertError {
    let start = stripped.original_offset(span.start);
    // Map the last byte rather than the end so a comment right after the line is not included.
    let end = if span.is_empty() {
        start
    } else {
        stripped.original_offset(span.end - 1) + 1
    };
    let line = source.as_bytes()[..start.min(source.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1;
    err.at_line(line, SourceSpan::new(start.into(), end.saturating_sub(start)))
}

/// Convert configuration text with the default configuration.
pub fn convert_str(source: &str) -> ConvertResult<String> {
    Converter::new().convert_str(source)
}

/// Convert the file at `input` and write TOML to `output` with the default configuration.
pub fn parse(input: impl AsRef<Path>, output: impl AsRef<Path>) -> ConvertResult<()> {
    Converter::new().parse(input, output)
}
