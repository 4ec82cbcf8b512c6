//! Classifier error types

use thiserror::Error;

/// Errors that can occur while building a classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A pattern in the table failed to compile
    #[error("Invalid pattern '{name}': {source}")]
    InvalidPattern {
        /// Pattern name
        name: String,
        /// Compiler error
        #[source]
        source: regex::Error,
    },

    /// Two patterns share a name
    #[error("Duplicate pattern name: {0}")]
    DuplicatePattern(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
