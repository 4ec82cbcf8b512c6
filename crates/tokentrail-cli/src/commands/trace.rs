//! Trace command implementation.

use super::{build_classifier, build_discoverer, load_corpus};
use crate::cli::TraceArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::sync::Arc;
use tokentrail_extractor::DependencyExtractor;
use tokentrail_walker::{ChainWalker, SeedBatch};

/// Execute the trace command.
pub async fn execute_trace(args: TraceArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let output = trace_report(args, config, formatter).await?;
    println!("{}", output);
    Ok(())
}

/// Walk every seed and format the traces.
///
/// Without explicit seeds, the seed discoverer's selection is walked instead.
pub async fn trace_report(args: TraceArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    if args.seeds.iter().any(|s| s.is_empty()) {
        return Err(CliError::InvalidInput("Seed values must not be empty".to_string()));
    }

    let corpus = load_corpus(&args.har)?;
    let classifier = build_classifier(config, args.entropy_threshold)?;

    let mut walk = config.walk.clone();
    if let Some(mode) = args.mode {
        walk.mode = mode.into();
    }
    if let Some(max_depth) = args.max_depth {
        walk.max_depth = max_depth;
    }

    let seeds = if args.seeds.is_empty() {
        let discoverer = build_discoverer(config, classifier.clone(), args.entropy_threshold)?;
        let discovered: Vec<String> = discoverer
            .discover(&corpus)
            .into_iter()
            .map(|seed| seed.value)
            .collect();
        tracing::info!("No seeds given; discovered {}", discovered.len());

        if discovered.is_empty() && formatter.format() == OutputFormat::Text {
            return Ok(formatter.warning("No seeds given and none discovered"));
        }
        discovered
    } else {
        args.seeds
    };

    let extractor = DependencyExtractor::new(classifier, config.extractor.clone());
    let walker = ChainWalker::new(extractor, walk)?;
    let traces = SeedBatch::new(walker).walk_all(Arc::new(corpus), seeds).await?;

    formatter.format_traces(&traces)
}
