//! Command implementations.

pub mod locate;
pub mod seeds;
pub mod survey;
pub mod trace;

pub use self::locate::execute_locate;
pub use self::seeds::execute_seeds;
pub use self::survey::execute_survey;
pub use self::trace::execute_trace;

use crate::config::Config;
use crate::error::{CliError, Result};
use std::path::Path;
use tokentrail_classifier::Classifier;
use tokentrail_domain::traits::CorpusSource;
use tokentrail_domain::Corpus;
use tokentrail_har::HarFile;
use tokentrail_sweep::SeedDiscoverer;

/// Load the capture at `path`.
pub(crate) fn load_corpus(path: &Path) -> Result<Corpus> {
    let corpus = HarFile::new(path).load_corpus()?;
    tracing::info!("Loaded {} transactions from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Classifier from the configured table, with an optional threshold override.
pub(crate) fn build_classifier(config: &Config, entropy_threshold: Option<f64>) -> Result<Classifier> {
    let mut classifier_config = config.classifier.clone();
    if let Some(threshold) = entropy_threshold {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CliError::InvalidInput(format!(
                "Entropy threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        classifier_config = classifier_config.with_entropy_threshold(threshold);
    }
    Ok(Classifier::new(classifier_config)?)
}

/// Seed discoverer whose entropy floor follows the threshold override.
pub(crate) fn build_discoverer(
    config: &Config,
    classifier: Classifier,
    entropy_threshold: Option<f64>,
) -> Result<SeedDiscoverer> {
    let mut policy = config.seeds.clone();
    if let Some(threshold) = entropy_threshold {
        policy.min_entropy = threshold;
    }
    Ok(SeedDiscoverer::new(classifier, policy)?)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::Write;
    use tempfile::NamedTempFile;

    pub const T1: &str = "a8F3kQ9zLm2Xv7Rt1Bn6Yc4Hs0Jd5Weu";
    pub const T2: &str = "Zp4Nq8Lx2Mv6Kb0Tr3Yw7Hc1Gf5Ds9Ej";

    /// Write `entries` as a HAR capture.
    pub fn capture_of(entries: serde_json::Value) -> NamedTempFile {
        let doc = serde_json::json!({"log": {"entries": entries}});
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", doc).unwrap();
        file
    }

    /// A two-entry capture where T1 leads to T2.
    pub fn capture() -> NamedTempFile {
        let embedding = format!(
            r#"{{"streamUrl":"https://cdn.example/live/{}/index.m3u8","sourceId":"{}"}}"#,
            T1, T2
        );
        capture_of(serde_json::json!([
            {
                "request": {"method": "GET", "url": "https://www.example.com/api/stream/1029384756", "httpVersion": "HTTP/1.1", "headers": []},
                "response": {"status": 200, "headers": [], "content": {"text": embedding, "mimeType": "application/json"}}
            },
            {
                "request": {"method": "GET", "url": "https://auth.example.net/token", "headers": []},
                "response": {"status": 200, "headers": [], "content": {"text": format!("{{\"token\":\"{}\"}}", T1), "mimeType": "application/json"}}
            }
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_override() {
        let classifier = build_classifier(&Config::default(), Some(1.5)).unwrap();
        assert_eq!(classifier.entropy_threshold(), 1.5);

        let classifier = build_classifier(&Config::default(), None).unwrap();
        assert_eq!(classifier.entropy_threshold(), 3.0);
    }

    #[test]
    fn test_negative_threshold() {
        let result = build_classifier(&Config::default(), Some(-0.5));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_threshold_override_lowers_seed_floor() {
        let config = Config::default();
        let classifier = build_classifier(&config, Some(2.5)).unwrap();
        let discoverer = build_discoverer(&config, classifier, Some(2.5)).unwrap();
        assert_eq!(discoverer.policy().min_entropy, 2.5);

        let discoverer = build_discoverer(&config, Classifier::default_config(), None).unwrap();
        assert_eq!(discoverer.policy().min_entropy, 3.0);
    }

    #[test]
    fn test_missing_capture() {
        let result = load_corpus(Path::new("/nonexistent/capture.har"));
        assert!(matches!(result, Err(CliError::Har(_))));
    }

    #[test]
    fn test_load_fixture() {
        let file = fixtures::capture();
        let corpus = load_corpus(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
    }
}
