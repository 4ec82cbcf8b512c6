//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Capture could not be loaded
    #[error(transparent)]
    Har(#[from] tokentrail_har::HarError),

    /// Invalid classifier settings
    #[error("Classifier error: {0}")]
    Classifier(#[from] tokentrail_classifier::ClassifierError),

    /// Invalid extractor settings
    #[error("Extractor error: {0}")]
    Extractor(#[from] tokentrail_extractor::ExtractorError),

    /// Walk setup or task failure
    #[error("Walk error: {0}")]
    Walk(#[from] tokentrail_walker::WalkError),

    /// Invalid seed policy
    #[error("Seed policy error: {0}")]
    Sweep(#[from] tokentrail_sweep::SweepError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
