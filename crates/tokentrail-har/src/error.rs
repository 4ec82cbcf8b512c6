//! Error types for corpus loading

use thiserror::Error;

/// Errors that abort a corpus load
#[derive(Error, Debug)]
pub enum HarError {
    /// The document has no usable entries list
    #[error("Corpus format error: {0}")]
    CorpusFormat(String),

    /// The capture file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The capture is not JSON at all
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
