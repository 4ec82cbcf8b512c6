//! Capture document → corpus

use crate::document::HarEntry;
use crate::error::HarError;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tokentrail_domain::traits::CorpusSource;
use tokentrail_domain::Corpus;
use tracing::{debug, info, warn};

/// Builds a corpus from a HAR document
#[derive(Debug, Clone, Copy, Default)]
pub struct HarLoader;

impl HarLoader {
    /// Create a loader
    pub fn new() -> Self {
        Self
    }

    /// Load from a file on disk
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Corpus, HarError> {
        let path = path.as_ref();
        debug!("Reading capture from {}", path.display());
        let contents = fs::read_to_string(path)?;
        self.load_str(&contents)
    }

    /// Load from JSON text
    pub fn load_str(&self, json: &str) -> Result<Corpus, HarError> {
        let doc: Value = serde_json::from_str(json)?;
        self.load_value(&doc)
    }

    /// Load from an already parsed document.
    ///
    /// Entries are read from `log.entries`, or from a top-level `entries` list
    /// when there is no `log` wrapper. The input is not modified.
    pub fn load_value(&self, doc: &Value) -> Result<Corpus, HarError> {
        let entries = entries_of(doc)?;

        let mut transactions = Vec::with_capacity(entries.len());
        for (idx, raw) in entries.iter().enumerate() {
            if !raw.is_object() {
                warn!("Skipping entry {}: not an object", idx);
                continue;
            }
            let entry = match HarEntry::deserialize(raw) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping malformed entry {}: {}", idx, e);
                    continue;
                }
            };

            let tx = entry.into_transaction();
            if let Some(e) = tx.response().body.decode_error() {
                warn!(
                    "Entry {} ({}): body treated as absent: {}",
                    idx,
                    tx.request().url,
                    e
                );
            }
            transactions.push(tx);
        }

        let skipped = entries.len() - transactions.len();
        info!(
            "Loaded {} transactions ({} skipped)",
            transactions.len(),
            skipped
        );

        Ok(Corpus::new(transactions))
    }
}

fn entries_of(doc: &Value) -> Result<&Vec<Value>, HarError> {
    let root = doc
        .as_object()
        .ok_or_else(|| HarError::CorpusFormat("top-level document is not an object".to_string()))?;

    let entries = root
        .get("log")
        .and_then(|log| log.get("entries"))
        .or_else(|| root.get("entries"))
        .ok_or_else(|| HarError::CorpusFormat("missing 'log.entries' list".to_string()))?;

    entries
        .as_array()
        .ok_or_else(|| HarError::CorpusFormat("'entries' is not a list".to_string()))
}

/// A HAR file on disk
#[derive(Debug, Clone)]
pub struct HarFile {
    path: PathBuf,
}

impl HarFile {
    /// Point at a capture file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the capture
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for HarFile {
    type Error = HarError;

    fn load_corpus(&self) -> Result<Corpus, HarError> {
        HarLoader::new().load_path(&self.path)
    }
}
