//! Error types for corpus sweeps

use thiserror::Error;

/// Errors that can occur while configuring sweeps
#[derive(Error, Debug)]
pub enum SweepError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
