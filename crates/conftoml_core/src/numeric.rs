//! Numeral recognition and decoding.
//!
//! Two spellings are integers:
//! - decimal: an optional `+`/`-` sign followed by ASCII digits (`42`, `-15`, `007`),
//! - octal: `0o` or `0O` followed by octal digits (`0o755`).
//!
//! Everything else (floats, hex, signed octal, out-of-range values) is not a numeral and callers treat
//! it as opaque text.
//!
//! ## Examples
//! ```rust
//! use conftoml_core::numeric::parse_numeral;
//!
//! assert_eq!(parse_numeral("0o755"), Some(493));
//! assert_eq!(parse_numeral("-15"), Some(-15));
//! assert_eq!(parse_numeral("1.5"), None);
//! ```

/// Decode a decimal or octal numeral, or return `None` if `s` is not one.
pub fn parse_numeral(s: &str) -> Option<i64> {
    if let Some(digits) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        return parse_octal(digits);
    }
    parse_decimal(s)
}

/// Decode a signed decimal integer (the only spelling accepted as a bare TOML integer on output).
pub fn parse_decimal(s: &str) -> Option<i64> {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_octal(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        return None;
    }
    i64::from_str_radix(digits, 8).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_decimal() {
        assert_eq!(parse_numeral("8080"), Some(8080));
        assert_eq!(parse_numeral("+5"), Some(5));
        assert_eq!(parse_numeral("-15"), Some(-15));
        assert_eq!(parse_numeral("007"), Some(7));
    }

    #[test]
    fn decodes_octal_with_either_prefix_case() {
        assert_eq!(parse_numeral("0o755"), Some(493));
        assert_eq!(parse_numeral("0O17"), Some(15));
        assert_eq!(parse_numeral("0o0"), Some(0));
    }

    #[test]
    fn rejects_non_numerals() {
        for s in ["", "+", "-", "1.5", "0x1F", "0o", "0o8", "0o-7", "-0o7", "12abc", " 1", "PORT"] {
            assert_eq!(parse_numeral(s), None, "{s:?} should not be a numeral");
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_numeral("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_numeral("9223372036854775808"), None);
        assert_eq!(parse_numeral("0o1777777777777777777777"), None);
    }

    #[test]
    fn octal_is_not_a_decimal_spelling() {
        assert_eq!(parse_numeral("0o7"), Some(7));
        assert_eq!(parse_decimal("0o7"), None);
    }
}
