//! Configuration for the Walker

use crate::error::WalkError;
use serde::{Deserialize, Serialize};
use tokentrail_domain::WalkMode;

/// Configuration for chain walks
///
/// The entropy threshold for path tokens belongs to the classifier
/// configuration, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Traversal strategy
    pub mode: WalkMode,

    /// Deepest step that is still expanded; deeper values are reported as
    /// depth-limited
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            mode: WalkMode::Full,
            max_depth: 32,
        }
    }
}

impl WalkConfig {
    /// First-reference walkback with the default depth bound
    pub fn first() -> Self {
        Self {
            mode: WalkMode::First,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), WalkError> {
        if self.max_depth == 0 {
            return Err(WalkError::Config(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, WalkError> {
        toml::from_str(toml_str)
            .map_err(|e| WalkError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, WalkError> {
        toml::to_string_pretty(self)
            .map_err(|e| WalkError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
