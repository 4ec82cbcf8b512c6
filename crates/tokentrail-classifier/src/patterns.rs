//! Compiled pattern table

use crate::config::PatternDef;
use crate::error::ClassifierError;
use regex::Regex;
use std::collections::HashSet;
use tokentrail_domain::Classification;

#[derive(Debug, Clone)]
struct CompiledPattern {
    name: String,
    search: Regex,
    exact: Regex,
}

/// Ordered table of named matchers.
///
/// Each pattern is compiled twice: unanchored for sweeping free text and
/// anchored (`^(?:…)$`) for classifying a whole token.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<CompiledPattern>,
}

impl PatternTable {
    /// Compile a table; names must be unique
    pub fn compile(defs: &[PatternDef]) -> Result<Self, ClassifierError> {
        let mut seen = HashSet::new();
        let mut patterns = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.name.as_str()) {
                return Err(ClassifierError::DuplicatePattern(def.name.clone()));
            }
            let invalid = |source| ClassifierError::InvalidPattern {
                name: def.name.clone(),
                source,
            };
            let search = Regex::new(&def.regex).map_err(invalid)?;
            let exact = Regex::new(&format!("^(?:{})$", def.regex)).map_err(invalid)?;
            patterns.push(CompiledPattern {
                name: def.name.clone(),
                search,
                exact,
            });
        }

        Ok(Self { patterns })
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Pattern names in priority order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    /// First pattern matching the whole of `value`
    pub fn classify(&self, value: &str) -> Classification {
        self.patterns
            .iter()
            .find(|p| p.exact.is_match(value))
            .map(|p| Classification::Pattern(p.name.clone()))
            .unwrap_or(Classification::Unclassified)
    }

    /// Whether the named pattern matches the whole of `value`.
    ///
    /// Unknown names never match.
    pub fn matches_whole(&self, name: &str, value: &str) -> bool {
        self.patterns
            .iter()
            .find(|p| p.name == name)
            .is_some_and(|p| p.exact.is_match(value))
    }

    /// Every non-overlapping match of every pattern, pattern by pattern in table order
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<(&str, &'t str)> {
        self.patterns
            .iter()
            .flat_map(|p| {
                p.search
                    .find_iter(text)
                    .map(move |m| (p.name.as_str(), m.as_str()))
            })
            .collect()
    }
}
