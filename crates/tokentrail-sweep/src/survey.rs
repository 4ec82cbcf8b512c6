//! Corpus survey: traffic shape and token statistics

use crate::discoverer::{SeedCandidate, SeedDiscoverer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokentrail_classifier::Classifier;
use tokentrail_domain::{Corpus, TokenLocation};

const TOP_VALUES: usize = 10;

/// One request seen in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// HTTP method
    pub method: String,
    /// URL path
    pub path: String,
    /// Response status
    pub status: i64,
}

/// Requests grouped under one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEndpoints {
    /// Host name
    pub host: String,
    /// Requests to it, in capture order
    pub endpoints: Vec<Endpoint>,
}

/// Result of a survey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    /// Number of transactions
    pub total_entries: usize,
    /// Requests whose path contains `/api/`
    pub api_calls: usize,
    /// Requests per host, hosts in first-seen order
    pub hosts: Vec<HostEndpoints>,
    /// Hosts other than the first transaction's host
    pub external_services: Vec<String>,
    /// High-entropy body hits per pattern
    pub pattern_matches: BTreeMap<String, usize>,
    /// High-entropy sightings, URL paths and bodies, duplicates included
    pub high_entropy_values: usize,
    /// Distinct high-entropy values, highest entropy first
    pub top_values: Vec<SeedCandidate>,
}

impl SurveyReport {
    /// Multi-line, human-readable summary
    pub fn summary(&self) -> String {
        let external = if self.external_services.is_empty() {
            "None".to_string()
        } else {
            self.external_services.join(", ")
        };
        let mut lines = vec![
            "Corpus Survey".to_string(),
            "=============".to_string(),
            format!("Total entries: {}", self.total_entries),
            format!("API calls: {}", self.api_calls),
            format!("External services: {}", external),
            format!("High-entropy values: {}", self.high_entropy_values),
        ];

        if !self.hosts.is_empty() {
            lines.push(String::new());
            lines.push("Endpoints by host:".to_string());
            for host in &self.hosts {
                lines.push(format!("  {} ({} requests)", host.host, host.endpoints.len()));
                for endpoint in host.endpoints.iter().take(5) {
                    lines.push(format!("    {} {}", endpoint.method, endpoint.path));
                }
                if host.endpoints.len() > 5 {
                    lines.push(format!("    ... and {} more", host.endpoints.len() - 5));
                }
            }
        }

        if !self.pattern_matches.is_empty() {
            lines.push(String::new());
            lines.push("Pattern matches:".to_string());
            for (pattern, count) in &self.pattern_matches {
                lines.push(format!("  {}: {}", pattern, count));
            }
        }

        if !self.top_values.is_empty() {
            lines.push(String::new());
            lines.push("Top high-entropy values:".to_string());
            for value in &self.top_values {
                lines.push(format!(
                    "  {} (entropy: {:.2}, pattern: {})",
                    value.value, value.entropy, value.classification
                ));
            }
        }

        lines.join("\n")
    }
}

/// Surveys a corpus
#[derive(Debug, Clone)]
pub struct CorpusSurvey {
    discoverer: SeedDiscoverer,
    classifier: Classifier,
}

impl CorpusSurvey {
    /// Create a survey that counts tokens the way `discoverer` ranks them
    pub fn new(classifier: Classifier, discoverer: SeedDiscoverer) -> Self {
        Self {
            discoverer,
            classifier,
        }
    }

    /// Create a survey with the built-in classifier and default policy
    pub fn default_config() -> Self {
        Self::new(Classifier::default_config(), SeedDiscoverer::default_config())
    }

    /// Survey `corpus`
    pub fn survey(&self, corpus: &Corpus) -> SurveyReport {
        let mut report = SurveyReport {
            total_entries: corpus.len(),
            ..SurveyReport::default()
        };
        let home = corpus.iter().next().and_then(|tx| tx.request().host());

        for tx in corpus {
            let request = tx.request();
            let path = request.path();
            if path.contains("/api/") {
                report.api_calls += 1;
            }

            if let Some(host) = request.host() {
                if home.as_deref() != Some(host.as_str())
                    && !report.external_services.contains(&host)
                {
                    report.external_services.push(host.clone());
                }
                let endpoint = Endpoint {
                    method: request.method.clone(),
                    path,
                    status: tx.response().status,
                };
                match report.hosts.iter_mut().find(|h| h.host == host) {
                    Some(group) => group.endpoints.push(endpoint),
                    None => report.hosts.push(HostEndpoints {
                        host,
                        endpoints: vec![endpoint],
                    }),
                }
            }

            for token in self.classifier.tokens_in(tx) {
                report.high_entropy_values += 1;
                if token.source().location == TokenLocation::ResponseBody {
                    if let Some(pattern) = token.classification().pattern() {
                        *report.pattern_matches.entry(pattern.to_string()).or_insert(0) += 1;
                    }
                }
            }
        }

        report.top_values = self.discoverer.ranked(corpus);
        report.top_values.truncate(TOP_VALUES);
        report
    }
}
