//! Naming rules for constants.
//!
//! A constant name is non-empty and made of ASCII uppercase letters and underscores only
//! (`^[A-Z_]+$`). Digits are not allowed, not even after the first character.

/// Return `true` if `name` is a legal constant name.
pub fn is_constant_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

/// Prefix of the synthesized names given to anonymous arrays (`_array_0`, `_array_1`, ...).
pub const ANONYMOUS_ARRAY_PREFIX: &str = "_array_";

/// Build the synthesized name for the anonymous array stored in slot `index`.
pub fn anonymous_array_name(index: usize) -> String {
    format!("{ANONYMOUS_ARRAY_PREFIX}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uppercase_and_underscores() {
        for name in ["PORT", "MY_VAR", "_RESULT", "_", "A"] {
            assert!(is_constant_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for name in ["", "invalid_name", "Port", "PORT1", "MY-VAR", "ÄPFEL", "A B"] {
            assert!(!is_constant_name(name), "{name:?} should be invalid");
        }
    }

    #[test]
    fn anonymous_names_are_not_constant_names() {
        assert_eq!(anonymous_array_name(3), "_array_3");
        assert!(!is_constant_name(&anonymous_array_name(0)));
    }
}
