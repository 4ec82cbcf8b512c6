//! Chain walker: first-reference walkback and full recursive chain

use crate::config::WalkConfig;
use crate::error::WalkError;
use std::collections::HashSet;
use tokentrail_classifier::Classifier;
use tokentrail_domain::{
    Corpus, DependencyEdge, Reached, StepOutcome, TraceResult, TraceStep, Transaction, WalkMode,
};
use tokentrail_extractor::{DependencyExtractor, ExtractorConfig, Locator};
use tracing::{debug, info};

/// A value waiting to be explained
struct Pending {
    depth: usize,
    value: String,
    reached: Reached,
}

/// Walks dependency chains over a corpus
///
/// The walker holds no per-walk state; every call to [`ChainWalker::walk`]
/// builds its own visited set, so one walker can serve many seeds at once.
#[derive(Debug, Clone)]
pub struct ChainWalker {
    extractor: DependencyExtractor,
    config: WalkConfig,
}

impl ChainWalker {
    /// Create a walker from an extractor and configuration
    pub fn new(extractor: DependencyExtractor, config: WalkConfig) -> Result<Self, WalkError> {
        config.validate()?;
        Ok(Self { extractor, config })
    }

    /// Create a full-chain walker with the built-in classifier and defaults
    pub fn default_config() -> Self {
        Self {
            extractor: DependencyExtractor::new(
                Classifier::default_config(),
                ExtractorConfig::default(),
            ),
            config: WalkConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// The extractor used at every explained step
    pub fn extractor(&self) -> &DependencyExtractor {
        &self.extractor
    }

    /// Walk from `seed` with the configured mode
    pub fn walk(&self, corpus: &Corpus, seed: &str) -> TraceResult {
        self.walk_with_mode(corpus, seed, self.config.mode)
    }

    /// Walk from `seed` with an explicit mode
    ///
    /// Steps are recorded in pre-order: a step's children (path tokens first,
    /// then dependencies) are fully walked before its next sibling.
    pub fn walk_with_mode(&self, corpus: &Corpus, seed: &str, mode: WalkMode) -> TraceResult {
        let locator = Locator::new(corpus);
        let mut trace = TraceResult::new(seed, mode);
        let mut visited: HashSet<String> = HashSet::new();
        let mut pending = vec![Pending {
            depth: 0,
            value: seed.to_string(),
            reached: Reached::Seed,
        }];

        while let Some(next) = pending.pop() {
            let children = self.visit(&locator, next, mode, &mut visited, &mut trace);
            // reversed so the first child is walked next
            pending.extend(children.into_iter().rev());
        }

        info!(
            seed,
            %mode,
            steps = trace.steps.len(),
            explained = trace.stats.values_explained,
            "Walk finished"
        );
        trace
    }

    /// Record one step and return the values to walk beneath it
    fn visit(
        &self,
        locator: &Locator<'_>,
        pending: Pending,
        mode: WalkMode,
        visited: &mut HashSet<String>,
        trace: &mut TraceResult,
    ) -> Vec<Pending> {
        let Pending {
            depth,
            value,
            reached,
        } = pending;
        trace.stats.max_depth = trace.stats.max_depth.max(depth);

        if visited.contains(&value) {
            debug!(value = %value, depth, "Already visited");
            trace.stats.cycles += 1;
            trace
                .steps
                .push(TraceStep::new(depth, value, reached, StepOutcome::AlreadyVisited));
            return Vec::new();
        }

        if depth > self.config.max_depth {
            debug!(value = %value, depth, "Depth bound reached");
            trace.stats.depth_limited += 1;
            trace
                .steps
                .push(TraceStep::new(depth, value, reached, StepOutcome::DepthLimit));
            return Vec::new();
        }
        visited.insert(value.clone());

        let hit = locator.find_first(&value);
        trace.stats.transactions_scanned += locator.scan_cost(hit);

        let Some(tx) = hit else {
            debug!(value = %value, depth, "No reference found");
            trace.stats.unexplained += 1;
            trace
                .steps
                .push(TraceStep::new(depth, value, reached, StepOutcome::Unexplained));
            return Vec::new();
        };

        trace.stats.values_explained += 1;
        let children = match mode {
            WalkMode::First => self.first_children(tx, &value, depth),
            WalkMode::Full => self.full_children(tx, &value, depth),
        };

        let origin_value = children
            .iter()
            .find(|c| matches!(c.reached, Reached::Dependency { .. }))
            .map(|c| c.value.clone());
        debug!(
            value = %value,
            transaction = %tx.id(),
            depth,
            origin = ?origin_value,
            "Found reference"
        );
        trace.edges.push(DependencyEdge {
            value: value.clone(),
            transaction: tx.id(),
            origin_value,
        });

        let mut step = TraceStep::new(
            depth,
            value,
            reached,
            StepOutcome::Explained {
                transaction: tx.id(),
                request_line: tx.top_line(),
            },
        );
        for child in &children {
            match child.reached {
                Reached::PathToken { .. } => step.path_tokens.push(child.value.clone()),
                _ => step.dependencies.push(child.value.clone()),
            }
        }
        trace.steps.push(step);
        children
    }

    /// The single best dependency, if any
    fn first_children(&self, tx: &Transaction, value: &str, depth: usize) -> Vec<Pending> {
        self.extractor
            .primary_candidate(tx, value)
            .map(|candidate| Pending {
                depth: depth + 1,
                value: candidate.value,
                reached: Reached::Dependency {
                    origin: candidate.origin,
                },
            })
            .into_iter()
            .collect()
    }

    /// High-entropy URL path segments, then every extracted dependency
    fn full_children(&self, tx: &Transaction, value: &str, depth: usize) -> Vec<Pending> {
        let path_tokens = self
            .extractor
            .classifier()
            .interesting_path_tokens(&tx.request().path())
            .into_iter()
            .filter(|(token, _)| token != value)
            .map(|(token, entropy)| Pending {
                depth: depth + 1,
                value: token,
                reached: Reached::PathToken { entropy },
            });

        let dependencies = self
            .extractor
            .extract(tx, value)
            .candidates
            .into_iter()
            .map(|candidate| Pending {
                depth: depth + 1,
                value: candidate.value,
                reached: Reached::Dependency {
                    origin: candidate.origin,
                },
            });

        path_tokens.chain(dependencies).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokentrail_domain::{HttpRequest, HttpResponse, ResponseBody, TransactionId};

    fn tx(url: &str, body: &str) -> Transaction {
        Transaction::new(
            HttpRequest::new("GET", url),
            HttpResponse::new(200, ResponseBody::from_text(body, None)),
        )
    }

    #[test]
    fn test_unknown_seed_is_unexplained() {
        let corpus = Corpus::new(vec![tx("https://a.example/x", "hello")]);
        let trace = ChainWalker::default_config().walk(&corpus, "missing");

        assert_eq!(trace.steps.len(), 1);
        assert_eq!(trace.steps[0].outcome, StepOutcome::Unexplained);
        assert_eq!(trace.stats.unexplained, 1);
        assert_eq!(trace.stats.transactions_scanned, 1);
        assert!(trace.edges.is_empty());
    }

    #[test]
    fn test_first_mode_is_linear() {
        let corpus = Corpus::new(vec![
            tx("https://a.example/one", r#"{"ref": "link-AAA"}"#),
            tx("https://a.example/two", r#"{"next": "to-ref"}"#),
        ]);
        let walker = ChainWalker::new(
            DependencyExtractor::new(Classifier::default_config(), ExtractorConfig::default()),
            WalkConfig::first(),
        )
        .unwrap();
        let trace = walker.walk(&corpus, "AAA");

        let values: Vec<&str> = trace.steps.iter().map(|s| s.value.as_str()).collect();
        // "ref" first appears in #0 itself, which offers no origin for it
        assert_eq!(values, vec!["AAA", "ref"]);
        assert_eq!(trace.steps[0].dependencies, vec!["ref"]);
        assert_eq!(trace.steps[1].transaction(), Some(TransactionId::new(0)));
        assert!(trace.steps.iter().all(|s| s.path_tokens.is_empty()));
        assert_eq!(trace.edges[0].origin_value.as_deref(), Some("ref"));
        assert_eq!(trace.edges[1].origin_value, None);
    }

    #[test]
    fn test_depth_bound() {
        // v0 -> v1 -> v2 -> v3 through text keys
        let corpus = Corpus::new(vec![
            tx("https://a.example/3", "v2 key=v3"),
            tx("https://a.example/2", "v1 key=v2"),
            tx("https://a.example/1", "v0 key=v1"),
        ]);
        let walker = ChainWalker::new(
            DependencyExtractor::new(Classifier::default_config(), ExtractorConfig::default()),
            WalkConfig {
                mode: WalkMode::First,
                max_depth: 1,
            },
        )
        .unwrap();
        let trace = walker.walk(&corpus, "v0");

        let outcomes: Vec<&StepOutcome> = trace.steps.iter().map(|s| &s.outcome).collect();
        assert_eq!(trace.steps.len(), 3);
        assert!(matches!(outcomes[0], StepOutcome::Explained { .. }));
        assert!(matches!(outcomes[1], StepOutcome::Explained { .. }));
        assert_eq!(outcomes[2], &StepOutcome::DepthLimit);
        assert_eq!(trace.stats.depth_limited, 1);
        assert_eq!(trace.stats.max_depth, 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = ChainWalker::new(
            DependencyExtractor::new(Classifier::default_config(), ExtractorConfig::default()),
            WalkConfig {
                mode: WalkMode::Full,
                max_depth: 0,
            },
        );
        assert!(matches!(result, Err(WalkError::Config(_))));
    }
}
