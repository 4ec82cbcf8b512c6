//! Occurrence search over a corpus

use tokentrail_domain::{Corpus, Transaction};

/// Finds the transactions whose decoded response body contains a value.
///
/// Matching is an exact, case-sensitive substring test. The empty string
/// matches nothing.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'c> {
    corpus: &'c Corpus,
}

impl<'c> Locator<'c> {
    /// Create a locator over `corpus`
    pub fn new(corpus: &'c Corpus) -> Self {
        Self { corpus }
    }

    /// Earliest transaction (by capture order) containing `value`.
    ///
    /// Stops at the first hit.
    pub fn find_first(&self, value: &str) -> Option<&'c Transaction> {
        if value.is_empty() {
            return None;
        }
        self.corpus.iter().find(|tx| tx.response().body.contains(value))
    }

    /// Every transaction containing `value`, in capture order
    pub fn find_all_containing(&self, value: &str) -> Vec<&'c Transaction> {
        if value.is_empty() {
            return Vec::new();
        }
        self.corpus
            .iter()
            .filter(|tx| tx.response().body.contains(value))
            .collect()
    }

    /// Number of transactions `find_first` examined to produce `hit`
    pub fn scan_cost(&self, hit: Option<&Transaction>) -> usize {
        match hit {
            Some(tx) => tx.id().index() + 1,
            None => self.corpus.len(),
        }
    }
}
