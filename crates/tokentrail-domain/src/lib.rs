//! Tokentrail Domain Layer
//!
//! This crate contains the data model shared by every other tokentrail crate.
//! It defines the captured HTTP exchanges, the corpus they live in, the candidate
//! tokens pulled out of them and the traces produced by walking dependency chains.
//!
//! ## Key Concepts
//!
//! - **Transaction**: one captured request/response pair, immutable after load
//! - **Corpus**: the ordered set of transactions; order is capture order
//! - **Token**: a candidate value with its entropy, classification and source
//! - **DependencyEdge**: `value → originating value` discovered in one transaction
//! - **TraceResult**: the steps of one chain walk, plus its statistics
//!
//! ## Architecture
//!
//! - No I/O; loading lives in `tokentrail-har`
//! - Everything here is read-only once built, so a corpus can be shared across threads
//! - Trait definitions for the loading boundary live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod body;
pub mod corpus;
pub mod entropy;
pub mod token;
pub mod trace;
pub mod traits;
pub mod transaction;

// Re-exports for convenience
pub use body::{BodyEncoding, DecodeError, ResponseBody};
pub use corpus::Corpus;
pub use entropy::shannon_entropy;
pub use token::{Classification, Token, TokenLocation, TokenSource};
pub use trace::{
    DependencyEdge, DependencyOrigin, Reached, StepOutcome, TraceResult, TraceStep, WalkMode,
    WalkStats,
};
pub use transaction::{Header, HttpRequest, HttpResponse, Transaction, TransactionId};
