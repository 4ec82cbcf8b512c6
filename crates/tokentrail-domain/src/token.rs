//! Candidate tokens pulled out of a corpus

use crate::entropy::shannon_entropy;
use crate::transaction::TransactionId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural category of a token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pattern")]
pub enum Classification {
    /// Matched the named pattern of the classifier's table
    Pattern(String),
    /// Matched no pattern (typically a bare URL path segment)
    Unclassified,
}

impl Classification {
    /// Pattern name, if classified
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Classification::Pattern(name) => Some(name),
            Classification::Unclassified => None,
        }
    }

    /// Whether this is the named pattern
    pub fn is(&self, name: &str) -> bool {
        self.pattern() == Some(name)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Pattern(name) => f.write_str(name),
            Classification::Unclassified => f.write_str("unclassified"),
        }
    }
}

/// Which part of a transaction a token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenLocation {
    /// A segment of the request URL path
    UrlPath,
    /// The decoded response body
    ResponseBody,
}

impl fmt::Display for TokenLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenLocation::UrlPath => f.write_str("url path"),
            TokenLocation::ResponseBody => f.write_str("response body"),
        }
    }
}

/// Where a token was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSource {
    /// Transaction the token was found in
    pub transaction: TransactionId,
    /// Part of the transaction
    pub location: TokenLocation,
}

/// A candidate value of interest.
///
/// Tokens are immutable; entropy is derived from the value on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    value: String,
    classification: Classification,
    source: TokenSource,
}

impl Token {
    /// Create a token
    pub fn new(value: impl Into<String>, classification: Classification, source: TokenSource) -> Self {
        Self {
            value: value.into(),
            classification,
            source,
        }
    }

    /// The token text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Shannon entropy of the value, in bits per character
    pub fn entropy(&self) -> f64 {
        shannon_entropy(&self.value)
    }

    /// Structural category
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Where the token was found
    pub fn source(&self) -> TokenSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_follows_value() {
        let source = TokenSource {
            transaction: TransactionId::new(0),
            location: TokenLocation::UrlPath,
        };
        let low = Token::new("aaaaaaaaaa", Classification::Unclassified, source);
        let high = Token::new("a1B2c3D4e5", Classification::Unclassified, source);
        assert_eq!(low.entropy(), 0.0);
        assert!(high.entropy() > 3.0);
    }

    #[test]
    fn test_classification_helpers() {
        let c = Classification::Pattern("numeric_id".to_string());
        assert!(c.is("numeric_id"));
        assert!(!c.is("uuid"));
        assert_eq!(c.to_string(), "numeric_id");
        assert_eq!(Classification::Unclassified.pattern(), None);
    }
}
