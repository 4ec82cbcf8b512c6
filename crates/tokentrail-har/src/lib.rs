//! Tokentrail HAR loader
//!
//! Parses a HAR-style capture document into a [`Corpus`](tokentrail_domain::Corpus).
//!
//! The loader is the only I/O boundary of the analysis. It is deliberately
//! forgiving inside entries (missing fields become defaults, undecodable bodies
//! become "no body") and strict only about the document shape: a capture with no
//! `entries` list is a [`HarError::CorpusFormat`].
//!
//! # Example
//!
//! ```
//! use tokentrail_har::HarLoader;
//!
//! let har = r#"{"log": {"entries": [
//!     {"request": {"method": "GET", "url": "https://a.example/x"},
//!      "response": {"status": 200, "content": {"text": "hello", "mimeType": "text/plain"}}}
//! ]}}"#;
//!
//! let corpus = HarLoader::new().load_str(har)?;
//! assert_eq!(corpus.len(), 1);
//! # Ok::<(), tokentrail_har::HarError>(())
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod loader;

pub use document::{HarContent, HarEntry, HarHeader, HarRequest, HarResponse};
pub use error::HarError;
pub use loader::{HarFile, HarLoader};
