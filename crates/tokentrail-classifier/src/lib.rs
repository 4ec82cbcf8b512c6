//! Tokentrail Classifier
//!
//! Scores and categorises candidate tokens.
//!
//! The Classifier provides:
//! - Shannon entropy relevance (`is_interesting`)
//! - Classification against an ordered, swappable table of named patterns
//! - Pattern sweeps over free text (every match of every pattern)
//! - High-entropy segment extraction from URL paths
//!
//! The pattern table is data: it can be replaced through [`ClassifierConfig`],
//! including from TOML, without touching any control flow.
//!
//! # Examples
//!
//! ```
//! use tokentrail_classifier::Classifier;
//!
//! let classifier = Classifier::default_config();
//! let class = classifier.classify("550e8400-e29b-41d4-a716-446655440000");
//! assert!(class.is("device_id"));
//!
//! let tokens = classifier.path_tokens("/live/aZ3kQ9xL2mVb7/index");
//! assert_eq!(tokens[0].0, "aZ3kQ9xL2mVb7");
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod patterns;

pub use classifier::{Classifier, PatternMatch};
pub use config::{ClassifierConfig, PatternDef};
pub use error::ClassifierError;
pub use patterns::PatternTable;
pub use tokentrail_domain::shannon_entropy;
