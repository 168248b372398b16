//! Architectural pattern detection.
//!
//! Two families of detectors feed one reconciliation step: structure scorers
//! read directory and file layout, graph scorers read the dependency
//! topology. Detection is a pure function of its inputs; nothing here holds
//! state between calls.

pub mod graph_signals;
pub mod heuristics;
pub mod reconcile;

use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::warn;

use crate::constants::REPORT_THRESHOLD;
use crate::graph::DependencyGraph;
use crate::types::{ArchitecturalPatternResult, ProjectStructure};

/// One raw detection before reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCandidate {
    pub name: &'static str,
    pub confidence: u8,
    pub evidence: Vec<String>,
    /// Detector family that produced this candidate.
    pub source: &'static str,
}

impl PatternCandidate {
    pub fn new(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            confidence: 0,
            evidence: Vec::new(),
            source,
        }
    }

    /// Add `points` of confidence with one supporting evidence line.
    pub fn score(&mut self, points: u8, evidence: impl Into<String>) {
        self.confidence = self.confidence.saturating_add(points).min(100);
        self.evidence.push(evidence.into());
    }
}

/// Run every detector and reconcile agreeing candidates.
///
/// A panicking scorer is contained and contributes nothing; detection never
/// takes the analysis down with it.
pub fn detect(
    structure: &ProjectStructure,
    graph: &DependencyGraph,
) -> Vec<ArchitecturalPatternResult> {
    let mut candidates: Vec<PatternCandidate> = Vec::new();

    for (name, scorer) in heuristics::SCORERS {
        match catch_unwind(AssertUnwindSafe(|| scorer(structure))) {
            Ok(Some(candidate)) => candidates.push(candidate),
            Ok(None) => {}
            Err(_) => warn!("pattern scorer {} panicked, skipping", name),
        }
    }
    candidates.extend(graph_signals::score(graph));

    candidates.retain(|c| c.confidence > REPORT_THRESHOLD);
    reconcile::merge(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_detect_nothing() {
        let structure = ProjectStructure::new("/tmp/empty".into());
        let graph = DependencyGraph::default();
        assert!(detect(&structure, &graph).is_empty());
    }
}
