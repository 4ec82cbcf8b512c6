//! Tokentrail Sweep
//!
//! Corpus-wide passes of the classifier: proposing seeds and surveying traffic.
//!
//! # Overview
//!
//! - **Seed discovery** ([`SeedDiscoverer`]): collects every high-entropy token
//!   in the corpus, deduplicates by value, ranks by entropy and selects seeds
//!   through an ordered list of capped tiers ([`SeedPolicy`])
//! - **Survey** ([`CorpusSurvey`]): entry and API-call counts, endpoints per
//!   host, external services, pattern hit counts and the top high-entropy values
//!
//! Both passes are pure functions of the corpus. Their counters are returned as
//! values, so sweeps can run concurrently with walks.
//!
//! ## Default Seed Tiers
//!
//! | Tier | Selects | Running cap |
//! |------|---------|-------------|
//! | 1 | `numeric_id` tokens | 3 |
//! | 2 | `stream_token` tokens | 5 |
//! | 3 | URL path tokens with entropy > 4.0 | 8 |
//!
//! # Usage
//!
//! ```
//! use tokentrail_domain::Corpus;
//! use tokentrail_sweep::{CorpusSurvey, SeedDiscoverer};
//!
//! let corpus = Corpus::default();
//! let seeds = SeedDiscoverer::default_config().discover(&corpus);
//! assert!(seeds.is_empty());
//!
//! let survey = CorpusSurvey::default_config().survey(&corpus);
//! println!("{}", survey.summary());
//! ```

#![warn(missing_docs)]

mod config;
mod discoverer;
mod error;
mod survey;

pub use config::{SeedPolicy, SeedTier};
pub use discoverer::{SeedCandidate, SeedDiscoverer};
pub use error::SweepError;
pub use survey::{CorpusSurvey, Endpoint, HostEndpoints, SurveyReport};
