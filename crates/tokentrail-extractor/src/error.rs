//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while configuring extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
