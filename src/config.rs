//! Analyzer configuration.

use serde::{Deserialize, Serialize};

/// How the role validator treats tokens tagged `unrecognized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnrecognizedPolicy {
    /// Skip them without stepping the automaton
    #[default]
    Skip,
    /// Treat them as a failed step, rejecting the sentence
    Reject,
}

/// Settings shared by the analyzers.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use clausula::{AnalyzerConfig, UnrecognizedPolicy};
///
/// let config = AnalyzerConfig::from_json(r#"{ "unrecognized": "reject" }"#).unwrap();
/// assert_eq!(config.unrecognized, UnrecognizedPolicy::Reject);
/// assert_eq!(config.infinitive_suffix, "r");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Ending that marks a verb as infinitive, any case (default: "r").
    /// Empty disables infinitive tagging.
    pub infinitive_suffix: String,
    /// Treatment of unrecognized roles during validation (default: skip)
    pub unrecognized: UnrecognizedPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            infinitive_suffix: "r".to_string(),
            unrecognized: UnrecognizedPolicy::Skip,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the treatment of unrecognized roles.
    pub fn with_unrecognized(mut self, policy: UnrecognizedPolicy) -> Self {
        self.unrecognized = policy;
        self
    }

    /// Set the infinitive suffix.
    pub fn with_infinitive_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.infinitive_suffix = suffix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_permissive() {
        let config = AnalyzerConfig::default();

        assert_eq!(config.infinitive_suffix, "r");
        assert_eq!(config.unrecognized, UnrecognizedPolicy::Skip);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = AnalyzerConfig::from_json("{}").unwrap();

        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config =
            AnalyzerConfig::from_json(r#"{ "infinitive_suffix": "ar", "unrecognized": "reject" }"#)
                .unwrap();

        assert_eq!(config.infinitive_suffix, "ar");
        assert_eq!(config.unrecognized, UnrecognizedPolicy::Reject);
    }

    #[test]
    fn invalid_policy_is_an_error() {
        assert!(AnalyzerConfig::from_json(r#"{ "unrecognized": "maybe" }"#).is_err());
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = AnalyzerConfig::default()
            .with_unrecognized(UnrecognizedPolicy::Reject)
            .with_infinitive_suffix("er");

        assert_eq!(config.unrecognized, UnrecognizedPolicy::Reject);
        assert_eq!(config.infinitive_suffix, "er");
    }
}
