//! Error types for the Walker

use thiserror::Error;

/// Errors that can occur while setting up or running walks
#[derive(Error, Debug)]
pub enum WalkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A walk task panicked or was cancelled
    #[error("Walk task failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for WalkError {
    fn from(e: tokio::task::JoinError) -> Self {
        WalkError::Worker(e.to_string())
    }
}
