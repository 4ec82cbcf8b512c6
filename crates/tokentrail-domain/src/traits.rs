//! Trait definitions for the loading boundary
//!
//! Loading is the only I/O the analysis performs. Implementations live in
//! `tokentrail-har`; everything downstream works on an in-memory [`Corpus`].

use crate::Corpus;

/// Something that can produce a corpus
///
/// Implemented by the loader layer (tokentrail-har)
pub trait CorpusSource {
    /// Error type for load failures
    type Error;

    /// Read and parse the capture into a corpus
    fn load_corpus(&self) -> Result<Corpus, Self::Error>;
}
