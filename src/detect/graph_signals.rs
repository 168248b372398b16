//! Topology-based detection signals.
//!
//! The graph contributes one pattern candidate (inferred layering) and a set
//! of code-pattern tags (cycles, hub modules). Tags never carry confidence;
//! they either hold for the graph or they don't.

use std::collections::BTreeSet;

use super::PatternCandidate;
use crate::graph::DependencyGraph;

/// Fan-in at which a project module counts as a hub.
const HUB_FAN_IN: usize = 5;

pub fn score(graph: &DependencyGraph) -> Vec<PatternCandidate> {
    let mut candidates = Vec::new();

    let layer_count = graph.layers.len();
    if layer_count >= 2 {
        let mut candidate = PatternCandidate::new("Layered Architecture", "graph");
        candidate.confidence = (40 + 15 * layer_count).min(90) as u8;
        candidate
            .evidence
            .push(format!("{} dependency layers inferred", layer_count));
        candidates.push(candidate);
    }
    candidates
}

/// Code-pattern tags derived from the topology.
pub fn tags(graph: &DependencyGraph) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    if graph.has_cycles() {
        tags.insert("circular-dependencies".to_string());
    }
    let has_hub = graph
        .nodes
        .values()
        .any(|m| !m.external && m.imported_by.len() >= HUB_FAN_IN);
    if has_hub {
        tags.insert("hub-modules".to_string());
    }
    tags
}
