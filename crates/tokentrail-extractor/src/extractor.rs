//! Dependency extraction from a matched transaction

use crate::config::ExtractorConfig;
use crate::structured::{find_in_json, is_likely_json};
use crate::text::find_in_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokentrail_classifier::Classifier;
use tokentrail_domain::{DependencyOrigin, Transaction};
use tracing::debug;

/// One proposed origin value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Proposed originating value
    pub value: String,
    /// Strategy that proposed it
    pub origin: DependencyOrigin,
}

/// Everything the extractor found in one transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    /// Best single origin: structured search, else the text heuristic
    pub primary: Option<Candidate>,

    /// Primary followed by pattern-sweep hits; unique, never the target
    pub candidates: Vec<Candidate>,
}

impl Dependencies {
    /// Whether nothing at all was found
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate values in order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.value.as_str())
    }
}

/// Proposes the origin of a value found in a transaction
#[derive(Debug, Clone)]
pub struct DependencyExtractor {
    classifier: Classifier,
    config: ExtractorConfig,
}

impl DependencyExtractor {
    /// Create an extractor
    pub fn new(classifier: Classifier, config: ExtractorConfig) -> Self {
        Self { classifier, config }
    }

    /// The classifier used for pattern sweeps
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Best single origin of `target` in `tx`, as a bare value
    pub fn primary(&self, tx: &Transaction, target: &str) -> Option<String> {
        self.primary_candidate(tx, target).map(|c| c.value)
    }

    /// Best single origin of `target` in `tx`.
    ///
    /// The JSON tree is searched when the body looks like JSON and parses;
    /// otherwise, or when that finds nothing, the text heuristic is tried.
    pub fn primary_candidate(&self, tx: &Transaction, target: &str) -> Option<Candidate> {
        let text = tx.body_text()?;
        let mime = tx.response().body.mime_type();

        if is_likely_json(mime, text) {
            match serde_json::from_str::<Value>(text) {
                Ok(root) => {
                    if let Some(value) = find_in_json(&root, target, self.config.nested_match) {
                        return Some(Candidate {
                            value,
                            origin: DependencyOrigin::Structured,
                        });
                    }
                }
                Err(e) => debug!(transaction = %tx.id(), error = %e, "Body is not valid JSON"),
            }
        }

        find_in_text(text, target, &self.config.text_key_prefixes).map(|value| Candidate {
            value,
            origin: DependencyOrigin::Text,
        })
    }

    /// Every pattern hit in the raw body other than `target`, first hit of
    /// each value only
    pub fn pattern_sweep(&self, tx: &Transaction, target: &str) -> Vec<Candidate> {
        let Some(text) = tx.body_text() else {
            return Vec::new();
        };
        let mut swept: Vec<Candidate> = Vec::new();
        for hit in self.classifier.find_matches(text) {
            if hit.value == target || swept.iter().any(|c| c.value == hit.value) {
                continue;
            }
            swept.push(Candidate {
                value: hit.value,
                origin: DependencyOrigin::Pattern(hit.pattern),
            });
        }
        swept
    }

    /// Primary origin plus pattern-sweep hits for `target` in `tx`
    pub fn extract(&self, tx: &Transaction, target: &str) -> Dependencies {
        let primary = self.primary_candidate(tx, target);
        let mut candidates: Vec<Candidate> = primary.iter().cloned().collect();
        for candidate in self.pattern_sweep(tx, target) {
            if !candidates.iter().any(|c| c.value == candidate.value) {
                candidates.push(candidate);
            }
        }
        debug!(
            transaction = %tx.id(),
            value = target,
            found = candidates.len(),
            "Extracted dependencies"
        );
        Dependencies { primary, candidates }
    }
}
