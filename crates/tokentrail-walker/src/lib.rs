//! Tokentrail Walker
//!
//! Reconstructs dependency chains by alternating occurrence search and
//! dependency extraction, starting from a seed value.
//!
//! # Overview
//!
//! The [`ChainWalker`] supports two traversal modes:
//!
//! - **First-reference walkback** ([`WalkMode::First`]): strictly linear. Each
//!   step locates the earliest transaction containing the value and follows its
//!   single best dependency.
//! - **Full recursive chain** ([`WalkMode::Full`]): each explained step branches
//!   into the high-entropy segments of its transaction's URL path, then into every
//!   extracted dependency.
//!
//! Every walk owns its visited set, so a value is expanded at most once; revisits
//! are reported as cycle markers. A configurable depth bound stops runaway branches.
//!
//! # Walk States
//!
//! | Outcome | Meaning | Children |
//! |---------|---------|----------|
//! | **Explained** | Found in a transaction | Path tokens, then dependencies |
//! | **Unexplained** | No body contains the value | None |
//! | **AlreadyVisited** | Expanded earlier in this walk | None |
//! | **DepthLimit** | Beyond `max_depth` | None |
//!
//! # Usage
//!
//! ```
//! use tokentrail_domain::{Corpus, HttpRequest, HttpResponse, ResponseBody, Transaction};
//! use tokentrail_walker::{render_trace, ChainWalker};
//!
//! let corpus = Corpus::new(vec![Transaction::new(
//!     HttpRequest::new("GET", "https://api.example/items/9876543210"),
//!     HttpResponse::new(200, ResponseBody::from_text(r#"{"matchId": "9876543210"}"#, None)),
//! )]);
//!
//! let walker = ChainWalker::default_config();
//! let trace = walker.walk(&corpus, "9876543210");
//! assert!(trace.seed_explained());
//! println!("{}", render_trace(&trace));
//! ```
//!
//! Independent seeds can be walked concurrently with [`SeedBatch`].

#![warn(missing_docs)]

mod batch;
mod config;
mod error;
mod render;
mod walker;

pub use batch::SeedBatch;
pub use config::WalkConfig;
pub use error::WalkError;
pub use render::{render_step, render_trace};
pub use tokentrail_domain::WalkMode;
pub use walker::ChainWalker;
