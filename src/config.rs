//! Conversion configuration
//!
//! The defaults are strict: a line that matches no rule is an error. `Skip` restores the
//! silent-drop behavior for inputs written against older converters.

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertConfig {
    /// What to do with a line that is not a declaration, section, array or key-value pair
    pub unrecognized_lines: UnrecognizedLinePolicy,
    /// What to do with a bracketed array line that has no name
    pub anonymous_arrays: AnonymousArrayPolicy,
}

/// Handling of lines that match no rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnrecognizedLinePolicy {
    /// Fail with `ConvertError::UnrecognizedLine`
    #[default]
    Reject,
    /// Drop the line and log a warning
    Skip,
}

/// Handling of anonymous array lines (`[a, b]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnonymousArrayPolicy {
    /// Store the array under a synthesized `_array_<n>` name
    #[default]
    Record,
    /// Resolve the elements but keep nothing
    Discard,
}

impl ConvertConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unrecognized-line policy
    pub fn with_unrecognized_lines(mut self, policy: UnrecognizedLinePolicy) -> Self {
        self.unrecognized_lines = policy;
        self
    }

    /// Set the anonymous-array policy
    pub fn with_anonymous_arrays(mut self, policy: AnonymousArrayPolicy) -> Self {
        self.anonymous_arrays = policy;
        self
    }

    /// Shorthand for `with_unrecognized_lines(UnrecognizedLinePolicy::Skip)`.
    pub fn skipping_unrecognized(self) -> Self {
        self.with_unrecognized_lines(UnrecognizedLinePolicy::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_strict() {
        let config = ConvertConfig::default();
        assert_eq!(config.unrecognized_lines, UnrecognizedLinePolicy::Reject);
        assert_eq!(config.anonymous_arrays, AnonymousArrayPolicy::Record);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ConvertConfig::new(), ConvertConfig::default());
    }

    #[test]
    fn test_builder_sets_one_field() {
        let config = ConvertConfig::new().with_anonymous_arrays(AnonymousArrayPolicy::Discard);
        assert_eq!(config.anonymous_arrays, AnonymousArrayPolicy::Discard);
        // Other fields unchanged
        assert_eq!(config.unrecognized_lines, UnrecognizedLinePolicy::Reject);
    }

    #[test]
    fn test_skipping_unrecognized() {
        let config = ConvertConfig::new().skipping_unrecognized();
        assert_eq!(config.unrecognized_lines, UnrecognizedLinePolicy::Skip);
    }

    #[test]
    fn test_builder_override() {
        let config = ConvertConfig::new()
            .with_unrecognized_lines(UnrecognizedLinePolicy::Skip)
            .with_unrecognized_lines(UnrecognizedLinePolicy::Reject);
        assert_eq!(config.unrecognized_lines, UnrecognizedLinePolicy::Reject); // Last value wins
    }
}
