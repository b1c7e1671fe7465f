//! TOML emitter - builds the output document line by line
//!
//! Only two kinds of lines are ever written: section headers and `key = value` pairs. Lines are
//! emitted in input order and each ends with `\n`.
//!
//! Value formatting:
//! - Integer: decimal digits, unquoted.
//! - Text `true`/`false`: unquoted, so TOML reads a boolean.
//! - Other Text: double-quoted verbatim. Embedded quotes and backslashes are not escaped.
//! - Array: `[e1, e2, ...]` where each element is unquoted if it is a decimal integer or
//!   `true`/`false`, and quoted otherwise.

use crate::frontend::symbols::Value;
use conftoml_core::numeric;

/// A buffer for building the TOML document.
#[derive(Debug, Default)]
pub struct TomlEmitter {
    buffer: String,
    lines: usize,
}

impl TomlEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a section header. The name is written verbatim.
    pub fn section(&mut self, name: &str) {
        tracing::debug!(section = name, "emit section");
        self.line(&format!("[{name}]"));
    }

    /// Emit `key = <formatted value>`.
    pub fn key_value(&mut self, key: &str, value: &Value) {
        tracing::debug!(key, kind = %value.kind(), "emit key");
        self.line(&format!("{key} = {}", format_value(value)));
    }

    /// Number of lines written so far.
    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    fn line(&mut self, s: &str) {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self.lines += 1;
    }
}

/// Format a value as the right-hand side of a TOML key-value pair.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Text(s) if is_bool(s) => s.clone(),
        Value::Text(s) => quote(s),
        Value::Array(items) => {
            let elements: Vec<String> = items.iter().map(|item| format_element(item)).collect();
            format!("[{}]", elements.join(", "))
        }
    }
}

fn format_element(item: &str) -> String {
    if numeric::parse_decimal(item).is_some() || is_bool(item) {
        item.to_string()
    } else {
        quote(item)
    }
}

fn is_bool(s: &str) -> bool {
    matches!(s, "true" | "false")
}

fn quote(s: &str) -> String {
    format!("\"{s}\"")
}
