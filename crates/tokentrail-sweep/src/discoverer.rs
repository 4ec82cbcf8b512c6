//! Seed discovery over a whole corpus

use crate::config::{SeedPolicy, SeedTier};
use crate::error::SweepError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tokentrail_classifier::Classifier;
use tokentrail_domain::{Classification, Corpus, Token, TokenLocation, TokenSource};
use tokentrail_extractor::Locator;
use tracing::{debug, info};

/// A proposed starting value, with the context that made it stand out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedCandidate {
    /// Candidate value
    pub value: String,
    /// Shannon entropy of the value
    pub entropy: f64,
    /// Classification of its first sighting
    pub classification: Classification,
    /// Where it was first seen
    pub source: TokenSource,
    /// Number of transactions whose body contains it
    pub occurrences: usize,
}

impl SeedCandidate {
    fn from_token(token: Token) -> Self {
        Self {
            entropy: token.entropy(),
            classification: token.classification().clone(),
            source: token.source(),
            value: token.value().to_string(),
            occurrences: 0,
        }
    }
}

/// Ranks corpus tokens and selects seeds through a [`SeedPolicy`]
#[derive(Debug, Clone)]
pub struct SeedDiscoverer {
    classifier: Classifier,
    policy: SeedPolicy,
}

impl SeedDiscoverer {
    /// Create a discoverer
    pub fn new(classifier: Classifier, policy: SeedPolicy) -> Result<Self, SweepError> {
        policy.validate()?;
        Ok(Self { classifier, policy })
    }

    /// Create a discoverer with the built-in classifier and default policy
    pub fn default_config() -> Self {
        Self {
            classifier: Classifier::default_config(),
            policy: SeedPolicy::default(),
        }
    }

    /// Active policy
    pub fn policy(&self) -> &SeedPolicy {
        &self.policy
    }

    /// Every distinct high-entropy token, highest entropy first.
    ///
    /// Each value keeps its first sighting in capture order; equal entropies
    /// keep that order too. `occurrences` is left at zero.
    pub fn ranked(&self, corpus: &Corpus) -> Vec<SeedCandidate> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates: Vec<SeedCandidate> = Vec::new();

        for tx in corpus {
            for token in self.classifier.tokens_in(tx) {
                if token.entropy() <= self.policy.min_entropy {
                    continue;
                }
                if seen.insert(token.value().to_string()) {
                    candidates.push(SeedCandidate::from_token(token));
                }
            }
        }

        candidates.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
        candidates
    }

    /// Seeds selected tier by tier, each with its occurrence count
    pub fn discover(&self, corpus: &Corpus) -> Vec<SeedCandidate> {
        let ranked = self.ranked(corpus);
        debug!("Ranked {} distinct high-entropy values", ranked.len());

        let mut selected: Vec<SeedCandidate> = Vec::with_capacity(self.policy.max_seeds());
        for tier in &self.policy.tiers {
            for candidate in &ranked {
                if selected.len() >= tier.cap() {
                    break;
                }
                if tier_accepts(tier, candidate) && !selected.iter().any(|s| s.value == candidate.value) {
                    selected.push(candidate.clone());
                }
            }
        }

        let locator = Locator::new(corpus);
        for seed in &mut selected {
            seed.occurrences = locator.find_all_containing(&seed.value).len();
            info!(
                value = %seed.value,
                entropy = seed.entropy,
                classification = %seed.classification,
                "Selected seed"
            );
        }
        selected
    }
}

fn tier_accepts(tier: &SeedTier, candidate: &SeedCandidate) -> bool {
    match tier {
        SeedTier::Pattern { pattern, .. } => candidate.classification.is(pattern),
        SeedTier::UrlPath { min_entropy, .. } => {
            candidate.source.location == TokenLocation::UrlPath && candidate.entropy > *min_entropy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokentrail_domain::{HttpRequest, HttpResponse, ResponseBody, Transaction, TransactionId};

    fn tx(url: &str, body: &str) -> Transaction {
        Transaction::new(
            HttpRequest::new("GET", url),
            HttpResponse::new(200, ResponseBody::from_text(body, None)),
        )
    }

    #[test]
    fn test_ranked_is_sorted_and_unique() {
        let corpus = Corpus::new(vec![
            tx("https://a.example/x", "ids 9876543210 and 9876543210"),
            tx("https://a.example/y", "again 9876543210 and 1357924680"),
        ]);
        let ranked = SeedDiscoverer::default_config().ranked(&corpus);

        let values: Vec<&str> = ranked.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["9876543210", "1357924680"]);
        assert!(ranked[0].classification.is("numeric_id"));
        assert_eq!(ranked[0].source.transaction, TransactionId::new(0));
        assert!(ranked.windows(2).all(|w| w[0].entropy >= w[1].entropy));
    }

    #[test]
    fn test_first_tier_cap() {
        let body = "1029384756 5647382910 9182736450 1928374650 5019283746";
        let corpus = Corpus::new(vec![tx("https://a.example/x", body)]);
        let seeds = SeedDiscoverer::default_config().discover(&corpus);

        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|s| s.classification.is("numeric_id")));
        assert!(seeds.iter().all(|s| s.occurrences == 1));
    }

    #[test]
    fn test_low_entropy_is_ignored() {
        let corpus = Corpus::new(vec![tx("https://a.example/aaaaaaaaaaaa", "1111111111")]);
        assert!(SeedDiscoverer::default_config().discover(&corpus).is_empty());
    }

    #[test]
    fn test_custom_tier() {
        let corpus = Corpus::new(vec![tx(
            "https://a.example/x",
            r#"{"device": "550e8400-e29b-41d4-a716-446655440000"}"#,
        )]);
        let policy = SeedPolicy {
            tiers: vec![SeedTier::Pattern {
                pattern: "device_id".to_string(),
                cap: 1,
            }],
            ..SeedPolicy::default()
        };
        let seeds = SeedDiscoverer::new(Classifier::default_config(), policy)
            .unwrap()
            .discover(&corpus);

        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].value, "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(seeds[0].source.location, TokenLocation::ResponseBody);
    }
}
