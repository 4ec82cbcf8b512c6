//! Tokentrail Extractor
//!
//! Finds where a value appears in a corpus and what other value most plausibly
//! caused it.
//!
//! # Overview
//!
//! Two services live here:
//!
//! - [`Locator`]: exact, case-sensitive substring search over decoded response
//!   bodies, either short-circuiting on the first hit or collecting every hit
//! - [`DependencyExtractor`]: given a transaction known to contain a value,
//!   proposes the value's origin from the JSON tree or, failing that, a
//!   `key=`/`id=` text heuristic, followed by a pattern sweep of the raw body
//!
//! # Architecture
//!
//! ```text
//! value → Locator → Transaction → DependencyExtractor → Dependencies
//! ```
//!
//! Nothing in this crate fails on malformed bodies: an unparseable JSON body
//! simply falls through to the text strategies, and "nothing found" is `None`.
//!
//! # Example Usage
//!
//! ```
//! use tokentrail_classifier::Classifier;
//! use tokentrail_domain::{Corpus, HttpRequest, HttpResponse, ResponseBody, Transaction};
//! use tokentrail_extractor::{DependencyExtractor, ExtractorConfig, Locator};
//!
//! let corpus = Corpus::new(vec![Transaction::new(
//!     HttpRequest::new("GET", "https://api.example/session"),
//!     HttpResponse::new(200, ResponseBody::from_text(r#"{"token": "tok-Zq81x"}"#, None)),
//! )]);
//!
//! let tx = Locator::new(&corpus).find_first("Zq81x").unwrap();
//! let extractor = DependencyExtractor::new(Classifier::default_config(), ExtractorConfig::default());
//! assert_eq!(extractor.primary(tx, "Zq81x").as_deref(), Some("token"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod locator;
mod structured;
mod text;


pub use config::{ExtractorConfig, NestedMatchPolicy};
pub use error::ExtractorError;
pub use extractor::{Candidate, Dependencies, DependencyExtractor};
pub use locator::Locator;
pub use structured::{find_in_json, is_likely_json};
pub use text::find_in_text;
