//! Seed selection policy

use crate::error::SweepError;
use serde::{Deserialize, Serialize};

/// One selection tier. Caps are running totals across all tiers so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SeedTier {
    /// Tokens classified under a named pattern
    Pattern {
        /// Pattern name
        pattern: String,
        /// Stop once this many seeds are selected in total
        cap: usize,
    },
    /// URL path tokens above an entropy floor
    UrlPath {
        /// Strict lower bound on entropy
        min_entropy: f64,
        /// Stop once this many seeds are selected in total
        cap: usize,
    },
}

impl SeedTier {
    /// Running cap of this tier
    pub fn cap(&self) -> usize {
        match self {
            SeedTier::Pattern { cap, .. } | SeedTier::UrlPath { cap, .. } => *cap,
        }
    }
}

/// Ranked seed selection policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedPolicy {
    /// Tokens at or below this entropy are never proposed
    pub min_entropy: f64,

    /// Selection tiers, applied in order
    pub tiers: Vec<SeedTier>,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            min_entropy: 3.0,
            tiers: vec![
                SeedTier::Pattern {
                    pattern: "numeric_id".to_string(),
                    cap: 3,
                },
                SeedTier::Pattern {
                    pattern: "stream_token".to_string(),
                    cap: 5,
                },
                SeedTier::UrlPath {
                    min_entropy: 4.0,
                    cap: 8,
                },
            ],
        }
    }
}

impl SeedPolicy {
    /// Largest number of seeds the policy can select
    pub fn max_seeds(&self) -> usize {
        self.tiers.iter().map(SeedTier::cap).max().unwrap_or(0)
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.min_entropy.is_finite() || self.min_entropy < 0.0 {
            return Err(SweepError::Config(format!(
                "min_entropy must be a non-negative number, got {}",
                self.min_entropy
            )));
        }
        for tier in &self.tiers {
            match tier {
                SeedTier::Pattern { pattern, .. } if pattern.trim().is_empty() => {
                    return Err(SweepError::Config(
                        "pattern tier needs a pattern name".to_string(),
                    ));
                }
                SeedTier::UrlPath { min_entropy, .. } if !min_entropy.is_finite() => {
                    return Err(SweepError::Config(
                        "url_path tier min_entropy must be finite".to_string(),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Load a policy from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, SweepError> {
        toml::from_str(toml_str)
            .map_err(|e| SweepError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize the policy to TOML string
    pub fn to_toml(&self) -> Result<String, SweepError> {
        toml::to_string_pretty(self)
            .map_err(|e| SweepError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
