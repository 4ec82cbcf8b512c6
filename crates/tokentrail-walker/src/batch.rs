//! Concurrent walks over independent seeds

use crate::error::WalkError;
use crate::walker::ChainWalker;
use std::sync::Arc;
use tokentrail_domain::{Corpus, TraceResult};

/// Walks several seeds at once on the tokio blocking pool
///
/// Each seed gets its own task and its own visited set. The corpus is shared
/// read-only, so no locking is involved.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use tokentrail_domain::Corpus;
/// use tokentrail_walker::{ChainWalker, SeedBatch};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let corpus = Arc::new(Corpus::default());
///     let batch = SeedBatch::new(ChainWalker::default_config());
///
///     let traces = batch.walk_all(corpus, vec!["seed-a".into(), "seed-b".into()]).await?;
///     assert_eq!(traces.len(), 2);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SeedBatch {
    walker: Arc<ChainWalker>,
}

impl SeedBatch {
    /// Create a batch runner around `walker`
    pub fn new(walker: ChainWalker) -> Self {
        Self {
            walker: Arc::new(walker),
        }
    }

    /// Walk every seed concurrently; traces come back in seed order
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Worker`] if a walk task panics.
    pub async fn walk_all(
        &self,
        corpus: Arc<Corpus>,
        seeds: Vec<String>,
    ) -> Result<Vec<TraceResult>, WalkError> {
        tracing::info!("Walking {} seed(s) concurrently", seeds.len());

        let handles: Vec<_> = seeds
            .into_iter()
            .map(|seed| {
                let walker = Arc::clone(&self.walker);
                let corpus = Arc::clone(&corpus);
                tokio::task::spawn_blocking(move || walker.walk(&corpus, &seed))
            })
            .collect();

        let mut traces = Vec::with_capacity(handles.len());
        for handle in handles {
            traces.push(handle.await?);
        }
        Ok(traces)
    }
}
