//! Configuration for the Classifier

use crate::error::ClassifierError;
use serde::{Deserialize, Serialize};

/// One named pattern of the classification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDef {
    /// Category name reported for matching tokens
    pub name: String,

    /// Regular expression, unanchored
    pub regex: String,
}

impl PatternDef {
    /// Create a pattern definition
    pub fn new(name: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regex: regex.into(),
        }
    }
}

/// Built-in pattern table, in priority order.
///
/// Several patterns overlap, so order matters: the first pattern that matches a
/// whole token classifies it, and the generic long-alphanumeric pattern must stay last.
pub fn builtin_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef::new("numeric_id", r"\b\d{10}\b"),
        PatternDef::new("tenant_id", r"\b100000\d{4}\b"),
        PatternDef::new("timestamp", r"\b1[0-9]{9}\b"),
        PatternDef::new(
            "stream_token",
            r"[a-f0-9]{40}\.[a-z]+\.\d{10}-[A-Za-z0-9+/=]+",
        ),
        PatternDef::new(
            "device_id",
            r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
        ),
        PatternDef::new("client_id", r"[A-Za-z0-9]{32}"),
        PatternDef::new("cdn_distribution_id", r"[a-f0-9]{16}-[A-Z]{3}"),
        PatternDef::new("long_alphanumeric", r"[A-Za-z0-9]{20,}"),
    ]
}

/// Configuration for the Classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum Shannon entropy (bits/char) for a token to be interesting; strict `>`
    #[serde(default = "default_entropy_threshold")]
    pub entropy_threshold: f64,

    /// Minimum length of a URL path segment considered as a token
    #[serde(default = "default_path_token_min_len")]
    pub path_token_min_len: usize,

    /// Ordered pattern table
    #[serde(default = "builtin_patterns")]
    pub patterns: Vec<PatternDef>,
}

fn default_entropy_threshold() -> f64 {
    3.0
}

fn default_path_token_min_len() -> usize {
    10
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            entropy_threshold: default_entropy_threshold(),
            path_token_min_len: default_path_token_min_len(),
            patterns: builtin_patterns(),
        }
    }
}

impl ClassifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if !self.entropy_threshold.is_finite() || self.entropy_threshold < 0.0 {
            return Err(ClassifierError::Config(format!(
                "entropy_threshold must be a non-negative number, got {}",
                self.entropy_threshold
            )));
        }
        if self.path_token_min_len == 0 {
            return Err(ClassifierError::Config(
                "path_token_min_len must be greater than 0".to_string(),
            ));
        }
        if let Some(def) = self.patterns.iter().find(|p| p.name.trim().is_empty()) {
            return Err(ClassifierError::Config(format!(
                "pattern '{}' has an empty name",
                def.regex
            )));
        }
        Ok(())
    }

    /// Replace the entropy threshold
    pub fn with_entropy_threshold(mut self, threshold: f64) -> Self {
        self.entropy_threshold = threshold;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifierError> {
        toml::from_str(toml_str)
            .map_err(|e| ClassifierError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifierError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifierError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_generic_pattern_is_last() {
        let patterns = builtin_patterns();
        assert_eq!(patterns.last().unwrap().name, "long_alphanumeric");
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let config = ClassifierConfig::default().with_entropy_threshold(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = ClassifierConfig::default().with_entropy_threshold(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ClassifierConfig::from_toml("entropy_threshold = 3.5").unwrap();
        assert_eq!(config.entropy_threshold, 3.5);
        assert_eq!(config.path_token_min_len, 10);
        assert_eq!(config.patterns, builtin_patterns());
    }

    #[test]
    fn test_custom_pattern_table_from_toml() {
        let config = ClassifierConfig::from_toml(
            r#"
            [[patterns]]
            name = "order_id"
            regex = "ORD-[0-9]{6}"
            "#,
        )
        .unwrap();
        assert_eq!(config.patterns.len(), 1);
        assert_eq!(config.patterns[0].name, "order_id");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClassifierConfig::default();
        let parsed = ClassifierConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.patterns, config.patterns);
        assert_eq!(parsed.entropy_threshold, config.entropy_threshold);
    }
}
