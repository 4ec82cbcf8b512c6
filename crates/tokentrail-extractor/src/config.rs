//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// What to return when a JSON value containing the target is a nested structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedMatchPolicy {
    /// Return the compact JSON of the whole substructure
    Stringify,
    /// Descend into the substructure and return its most specific scalar hit;
    /// the substructure's JSON is only used when no scalar inside qualifies
    #[default]
    Descend,
}

/// Configuration for the dependency extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Handling of nested structures in the structured search
    pub nested_match: NestedMatchPolicy,

    /// Token prefixes recognised by the text fallback
    pub text_key_prefixes: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            nested_match: NestedMatchPolicy::Descend,
            text_key_prefixes: vec!["key=".to_string(), "id=".to_string()],
        }
    }
}

impl ExtractorConfig {
    /// Configuration that stringifies nested matches
    pub fn stringify() -> Self {
        Self {
            nested_match: NestedMatchPolicy::Stringify,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if let Some(prefix) = self
            .text_key_prefixes
            .iter()
            .find(|p| p.is_empty() || !p.ends_with('='))
        {
            return Err(ExtractorError::Config(format!(
                "text key prefix '{}' must be non-empty and end with '='",
                prefix
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
