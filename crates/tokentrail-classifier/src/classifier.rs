//! Entropy scoring and classification

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::patterns::PatternTable;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokentrail_domain::{
    shannon_entropy, Classification, Token, TokenLocation, TokenSource, Transaction,
};

/// One hit of a pattern sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Name of the pattern that matched
    pub pattern: String,
    /// Matched text
    pub value: String,
}

/// Scores tokens by entropy and classifies them against a pattern table
#[derive(Debug, Clone)]
pub struct Classifier {
    table: PatternTable,
    entropy_threshold: f64,
    path_segment: Regex,
}

impl Classifier {
    /// Create a classifier from configuration
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        let table = PatternTable::compile(&config.patterns)?;
        let path_segment = Regex::new(&format!(
            r"/([A-Za-z0-9_-]{{{},}})",
            config.path_token_min_len
        ))
        .map_err(|source| ClassifierError::InvalidPattern {
            name: "path_segment".to_string(),
            source,
        })?;

        Ok(Self {
            table,
            entropy_threshold: config.entropy_threshold,
            path_segment,
        })
    }

    /// Create a Classifier with the built-in table and a 3.0 bit threshold
    pub fn default_config() -> Self {
        Self::new(ClassifierConfig::default())
            .expect("built-in classifier configuration compiles")
    }

    /// The compiled pattern table
    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    /// Entropy threshold in bits per character
    pub fn entropy_threshold(&self) -> f64 {
        self.entropy_threshold
    }

    /// Shannon entropy of `value`
    pub fn entropy(&self, value: &str) -> f64 {
        shannon_entropy(value)
    }

    /// Category of `value`: the first table pattern matching all of it
    pub fn classify(&self, value: &str) -> Classification {
        self.table.classify(value)
    }

    /// Whether a token's entropy is strictly above the threshold
    pub fn is_interesting(&self, token: &Token) -> bool {
        self.is_interesting_value(token.value())
    }

    /// Whether a raw value's entropy is strictly above the threshold
    pub fn is_interesting_value(&self, value: &str) -> bool {
        shannon_entropy(value) > self.entropy_threshold
    }

    /// Every pattern hit in `text`, table order first, then position
    pub fn find_matches(&self, text: &str) -> Vec<PatternMatch> {
        self.table
            .find_all(text)
            .into_iter()
            .map(|(pattern, value)| PatternMatch {
                pattern: pattern.to_string(),
                value: value.to_string(),
            })
            .collect()
    }

    /// Long `[A-Za-z0-9_-]` segments of a URL path, with their entropy
    pub fn path_tokens(&self, path: &str) -> Vec<(String, f64)> {
        self.path_segment
            .captures_iter(path)
            .filter_map(|caps| caps.get(1))
            .map(|m| (m.as_str().to_string(), shannon_entropy(m.as_str())))
            .collect()
    }

    /// Path segments whose entropy is above the threshold
    pub fn interesting_path_tokens(&self, path: &str) -> Vec<(String, f64)> {
        self.path_tokens(path)
            .into_iter()
            .filter(|(_, entropy)| *entropy > self.entropy_threshold)
            .collect()
    }

    /// High-entropy tokens of a transaction, one per occurrence.
    ///
    /// URL path segments come first, classified as a whole; then every pattern
    /// hit in the decoded body, labelled with the pattern that found it. A body
    /// value matched by several patterns appears once per pattern.
    pub fn tokens_in(&self, tx: &Transaction) -> Vec<Token> {
        let url_source = TokenSource {
            transaction: tx.id(),
            location: TokenLocation::UrlPath,
        };
        let body_source = TokenSource {
            transaction: tx.id(),
            location: TokenLocation::ResponseBody,
        };

        let mut tokens: Vec<Token> = self
            .interesting_path_tokens(&tx.request().path())
            .into_iter()
            .map(|(value, _)| {
                let class = self.classify(&value);
                Token::new(value, class, url_source)
            })
            .collect();

        if let Some(body) = tx.body_text() {
            tokens.extend(
                self.table
                    .find_all(body)
                    .into_iter()
                    .filter(|(_, value)| self.is_interesting_value(value))
                    .map(|(pattern, value)| {
                        Token::new(value, Classification::Pattern(pattern.to_string()), body_source)
                    }),
            );
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternDef;
    use tokentrail_domain::{HttpRequest, HttpResponse, ResponseBody, TransactionId};

    #[test]
    fn test_is_interesting_is_strict() {
        let classifier = Classifier::new(ClassifierConfig::default().with_entropy_threshold(1.0)).unwrap();
        // exactly 1.0 bit: not above the threshold
        assert!(!classifier.is_interesting_value("abab"));
        assert!(classifier.is_interesting_value("abc"));
    }

    #[test]
    fn test_path_tokens() {
        let classifier = Classifier::default_config();
        let tokens = classifier.path_tokens("/v1/items/9876543210/aaaaaaaaaaaa/short");
        let values: Vec<&str> = tokens.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["9876543210", "aaaaaaaaaaaa"]);

        let interesting = classifier.interesting_path_tokens("/v1/items/9876543210/aaaaaaaaaaaa");
        assert_eq!(interesting.len(), 1);
        assert_eq!(interesting[0].0, "9876543210");
    }

    #[test]
    fn test_custom_min_len() {
        let config = ClassifierConfig {
            path_token_min_len: 4,
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(config).unwrap();
        assert_eq!(classifier.path_tokens("/abcd/ab").len(), 1);
    }

    #[test]
    fn test_custom_table() {
        let config = ClassifierConfig {
            patterns: vec![PatternDef::new("order_id", r"ORD-[0-9]{6}")],
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(config).unwrap();
        assert!(classifier.classify("ORD-123456").is("order_id"));
        assert_eq!(classifier.classify("9876543210"), Classification::Unclassified);
    }

    #[test]
    fn test_tokens_in_transaction() {
        let classifier = Classifier::default_config();
        let tx = Transaction::new(
            HttpRequest::new("GET", "https://a.example/watch/Xk29fLq83Zp/info"),
            HttpResponse::new(
                200,
                ResponseBody::from_text(r#"{"session": "550e8400-e29b-41d4-a716-446655440000"}"#, None),
            ),
        );
        let tokens = classifier.tokens_in(&tx);

        assert_eq!(tokens[0].value(), "Xk29fLq83Zp");
        assert_eq!(tokens[0].source().location, TokenLocation::UrlPath);
        assert_eq!(tokens[0].source().transaction, TransactionId::new(0));

        let uuid = tokens
            .iter()
            .find(|t| t.value() == "550e8400-e29b-41d4-a716-446655440000")
            .unwrap();
        assert!(uuid.classification().is("device_id"));
        assert_eq!(uuid.source().location, TokenLocation::ResponseBody);
    }
}
