//! Trace module - the output of one dependency-chain walk

use crate::transaction::TransactionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Traversal strategy of a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkMode {
    /// Linear walkback: one dependency per step, no branching
    First,
    /// Recursive chain: URL path tokens and every dependency, branching
    #[default]
    Full,
}

impl fmt::Display for WalkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkMode::First => f.write_str("first"),
            WalkMode::Full => f.write_str("full"),
        }
    }
}

impl FromStr for WalkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(WalkMode::First),
            "full" => Ok(WalkMode::Full),
            other => Err(format!("unknown walk mode '{}' (expected first or full)", other)),
        }
    }
}

/// How a dependency was found in its transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "pattern")]
pub enum DependencyOrigin {
    /// Structured (JSON) tree search
    Structured,
    /// `key=`/`id=` token on the first line containing the value
    Text,
    /// Pattern sweep over the raw body; carries the pattern name
    Pattern(String),
}

/// How the walk arrived at a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Reached {
    /// The walk's starting value
    Seed,
    /// High-entropy segment of the parent transaction's URL path
    PathToken {
        /// Entropy of the segment
        entropy: f64,
    },
    /// Dependency extracted from the parent transaction
    Dependency {
        /// Extraction strategy that produced it
        origin: DependencyOrigin,
    },
}

/// Terminal or expanding state of one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StepOutcome {
    /// Found in a transaction; children follow in the trace
    Explained {
        /// Transaction whose body contains the value
        transaction: TransactionId,
        /// `METHOD URL VERSION` of that transaction
        request_line: String,
    },
    /// No transaction body contains the value
    Unexplained,
    /// Already explained earlier in this walk (cycle marker)
    AlreadyVisited,
    /// Not expanded because the depth bound was reached
    DepthLimit,
}

/// One value explained (or not) during a walk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Distance from the seed
    pub depth: usize,

    /// Value being explained
    pub value: String,

    /// How the walk got here
    pub reached: Reached,

    /// What happened
    pub outcome: StepOutcome,

    /// High-entropy URL path tokens recursed into from this step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_tokens: Vec<String>,

    /// Dependencies recursed into from this step
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl TraceStep {
    /// A step with no children yet
    pub fn new(depth: usize, value: impl Into<String>, reached: Reached, outcome: StepOutcome) -> Self {
        Self {
            depth,
            value: value.into(),
            reached,
            outcome,
            path_tokens: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Transaction the value was found in, if any
    pub fn transaction(&self) -> Option<TransactionId> {
        match &self.outcome {
            StepOutcome::Explained { transaction, .. } => Some(*transaction),
            _ => None,
        }
    }
}

/// A directed `value → originating value` edge.
///
/// `origin_value` is `None` when the transaction offered no plausible origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Value that was explained
    pub value: String,
    /// Transaction it was found in
    pub transaction: TransactionId,
    /// Value judged to be its cause
    pub origin_value: Option<String>,
}

/// Counters for one walk, returned alongside its steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkStats {
    /// Transactions examined by the locator, summed over every lookup
    pub transactions_scanned: usize,
    /// Values found in some transaction
    pub values_explained: usize,
    /// Values found in no transaction
    pub unexplained: usize,
    /// Cycle markers emitted
    pub cycles: usize,
    /// Branches stopped by the depth bound
    pub depth_limited: usize,
    /// Deepest step depth
    pub max_depth: usize,
}

impl WalkStats {
    /// Multi-line, human-readable summary
    pub fn summary(&self) -> String {
        [
            "Walk Summary".to_string(),
            "============".to_string(),
            format!("Transactions scanned: {}", self.transactions_scanned),
            format!("Values explained: {}", self.values_explained),
            format!("Unexplained: {}", self.unexplained),
            format!("Cycles: {}", self.cycles),
            format!("Depth-limited: {}", self.depth_limited),
            format!("Deepest step: {}", self.max_depth),
        ]
        .join("\n")
    }
}

/// Steps of one walk in pre-order, plus its edges and statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceResult {
    /// Starting value
    pub seed: String,
    /// Traversal strategy used
    pub mode: WalkMode,
    /// Steps in the order they were visited
    pub steps: Vec<TraceStep>,
    /// Edges discovered by explained steps
    pub edges: Vec<DependencyEdge>,
    /// Counters
    pub stats: WalkStats,
}

impl TraceResult {
    /// An empty trace for `seed`
    pub fn new(seed: impl Into<String>, mode: WalkMode) -> Self {
        Self {
            seed: seed.into(),
            mode,
            steps: Vec::new(),
            edges: Vec::new(),
            stats: WalkStats::default(),
        }
    }

    /// Whether the seed itself was found in the corpus
    pub fn seed_explained(&self) -> bool {
        self.steps
            .first()
            .is_some_and(|s| matches!(s.outcome, StepOutcome::Explained { .. }))
    }

    /// Whether any edge leads to an originating value
    pub fn found_dependency(&self) -> bool {
        self.edges.iter().any(|e| e.origin_value.is_some())
    }

    /// Explained values in visit order
    pub fn explained_values(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Explained { .. }))
            .map(|s| s.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_mode_parsing() {
        assert_eq!("first".parse::<WalkMode>().unwrap(), WalkMode::First);
        assert_eq!("FULL".parse::<WalkMode>().unwrap(), WalkMode::Full);
        assert!("sideways".parse::<WalkMode>().is_err());
    }

    #[test]
    fn test_stats_summary() {
        let stats = WalkStats {
            values_explained: 2,
            cycles: 1,
            ..WalkStats::default()
        };
        let summary = stats.summary();
        assert!(summary.contains("Values explained: 2"));
        assert!(summary.contains("Cycles: 1"));
    }

    #[test]
    fn test_empty_trace() {
        let trace = TraceResult::new("abc", WalkMode::First);
        assert!(!trace.seed_explained());
        assert!(!trace.found_dependency());
        assert_eq!(trace.explained_values().count(), 0);
    }

    #[test]
    fn test_step_serializes_outcome_tag() {
        let step = TraceStep::new(
            0,
            "abc",
            Reached::Seed,
            StepOutcome::Explained {
                transaction: TransactionId::new(3),
                request_line: "GET https://a.example/ HTTP/1.1".to_string(),
            },
        );
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["outcome"]["kind"], "explained");
        assert_eq!(json["outcome"]["transaction"], 3);
        assert_eq!(json["reached"]["kind"], "seed");
        assert!(json.get("dependencies").is_none());
    }
}
