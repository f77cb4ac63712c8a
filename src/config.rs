//! Configuration for the extractor.

use crate::uri_grammar::SchemePolicy;

/// Configuration for an [`Extractor`](crate::Extractor).
///
/// Controls which schemes are accepted and whether enclosing brackets are
/// peeled before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractorConfig {
    /// Which schemes a URI may start with.
    ///
    /// Default: [`SchemePolicy::Registered`]
    pub scheme_policy: SchemePolicy,

    /// Whether to peel symmetric bracket pairs off the token first.
    ///
    /// Default: true
    pub trim_brackets: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            scheme_policy: SchemePolicy::Registered,
            trim_brackets: true,
        }
    }
}

impl ExtractorConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scheme policy.
    #[must_use]
    pub const fn with_scheme_policy(mut self, policy: SchemePolicy) -> Self {
        self.scheme_policy = policy;
        self
    }

    /// Enables or disables bracket trimming.
    #[must_use]
    pub const fn with_trim_brackets(mut self, trim: bool) -> Self {
        self.trim_brackets = trim;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.scheme_policy, SchemePolicy::Registered);
        assert!(config.trim_brackets);
    }

    #[test]
    fn builder_pattern() {
        let config = ExtractorConfig::new()
            .with_scheme_policy(SchemePolicy::Any)
            .with_trim_brackets(false);

        assert_eq!(config.scheme_policy, SchemePolicy::Any);
        assert!(!config.trim_brackets);
    }
}
