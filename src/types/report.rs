//! The composed analysis report.
//!
//! `AnalysisReport` is a stateless value produced once per scan invocation.
//! It is safe to cache or serialize; nothing in it references engine state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::convention::{NamingCategory, NamingStat};

/// One detected architectural pattern after reconciliation.
///
/// Invariant: within one report, `name` is unique. Candidates emitted by
/// independent scorers under the same name are merged, never listed twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitecturalPatternResult {
    pub name: String,
    /// Heuristic confidence, clamped to 0..=100. Not a probability.
    pub confidence: u8,
    pub evidence: Vec<String>,
    /// Detector names that contributed, sorted and deduplicated.
    pub sources: Vec<String>,
    pub detection_count: usize,
}

/// Headline numbers from the dependency graph, surfaced so callers can judge
/// how much topology backed the detection (including whether the graph was
/// truncated by the module cap).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInsights {
    pub module_count: usize,
    pub edge_count: usize,
    pub cycle_count: usize,
    pub truncated: bool,
}

/// Aggregate consistency metrics, all on the 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMetrics {
    pub overall: f64,
    pub naming: f64,
    pub architecture: f64,
}

/// The full profile of one source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub naming_conventions: BTreeMap<NamingCategory, NamingStat>,
    /// Sorted descending by confidence; names unique.
    pub architectural_patterns: Vec<ArchitecturalPatternResult>,
    /// Detected idioms: framework imports, graph anomalies such as
    /// `"circular-dependencies"`.
    pub code_patterns: BTreeSet<String>,
    pub dependency_insights: DependencyInsights,
    pub consistency: ConsistencyMetrics,
}

impl AnalysisReport {
    /// Look up one pattern by name.
    pub fn pattern(&self, name: &str) -> Option<&ArchitecturalPatternResult> {
        self.architectural_patterns.iter().find(|p| p.name == name)
    }

    /// The highest-confidence pattern, when any was detected.
    pub fn top_pattern(&self) -> Option<&ArchitecturalPatternResult> {
        self.architectural_patterns.first()
    }
}
