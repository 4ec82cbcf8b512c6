//! Seeds command implementation.

use super::{build_classifier, build_discoverer, load_corpus};
use crate::cli::SeedsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the seeds command.
pub fn execute_seeds(args: SeedsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", seeds_report(args, config, formatter)?);
    Ok(())
}

/// Discover seeds and format them in walk order.
pub fn seeds_report(args: SeedsArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let corpus = load_corpus(&args.har)?;
    let classifier = build_classifier(config, args.entropy_threshold)?;
    let discoverer = build_discoverer(config, classifier, args.entropy_threshold)?;

    let seeds = discoverer.discover(&corpus);
    tracing::info!("Discovered {} seeds", seeds.len());

    formatter.format_seeds(&seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{capture, capture_of, T1};
    use crate::config::OutputFormat;
    use tokentrail_sweep::{SeedPolicy, SeedTier};

    fn low_entropy_capture() -> tempfile::NamedTempFile {
        // "abcdefgaab" carries about 2.65 bits per char
        capture_of(serde_json::json!([
            {"request": {"method": "GET", "url": "https://a.example/v/abcdefgaab"}}
        ]))
    }

    #[test]
    fn test_seeds_quiet() {
        let file = capture();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = seeds_report(
            SeedsArgs {
                har: file.path().to_path_buf(),
                entropy_threshold: None,
            },
            &Config::default(),
            &formatter,
        )
        .unwrap();

        // client ids are ranked but belong to no seed tier
        assert_eq!(output, "1029384756");
        assert!(!output.contains(T1));
    }

    #[test]
    fn test_seeds_json() {
        let file = capture();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = seeds_report(
            SeedsArgs {
                har: file.path().to_path_buf(),
                entropy_threshold: None,
            },
            &Config::default(),
            &formatter,
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["value"], "1029384756");
        assert_eq!(parsed[0]["source"]["location"], "url_path");
        assert_eq!(parsed[0]["occurrences"], 0);
    }

    #[test]
    fn test_lowered_threshold_reaches_seed_selection() {
        let file = low_entropy_capture();
        let config = Config {
            seeds: SeedPolicy {
                tiers: vec![SeedTier::UrlPath {
                    min_entropy: 0.0,
                    cap: 8,
                }],
                ..SeedPolicy::default()
            },
            ..Config::default()
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = |entropy_threshold| SeedsArgs {
            har: file.path().to_path_buf(),
            entropy_threshold,
        };

        assert_eq!(seeds_report(args(None), &config, &formatter).unwrap(), "");
        assert_eq!(
            seeds_report(args(Some(2.5)), &config, &formatter).unwrap(),
            "abcdefgaab"
        );
    }
}
