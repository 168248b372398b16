//! Candidate reconciliation.
//!
//! Independent detectors reporting the same pattern corroborate each other:
//! the merged result takes the strongest confidence plus a fixed boost,
//! keeps every evidence line, and records how many detectors agreed.

use std::collections::BTreeMap;

use super::PatternCandidate;
use crate::constants::RECONCILE_BOOST;
use crate::types::ArchitecturalPatternResult;

/// Merge same-name candidates and order the final list by confidence
/// descending, name ascending.
pub fn merge(candidates: Vec<PatternCandidate>) -> Vec<ArchitecturalPatternResult> {
    let mut groups: BTreeMap<&'static str, Vec<PatternCandidate>> = BTreeMap::new();
    for candidate in candidates {
        groups.entry(candidate.name).or_default().push(candidate);
    }

    let mut results: Vec<ArchitecturalPatternResult> = groups
        .into_iter()
        .map(|(name, group)| {
            let strongest = group.iter().map(|c| c.confidence).max().unwrap_or(0);
            let confidence = if group.len() > 1 {
                strongest.saturating_add(RECONCILE_BOOST).min(100)
            } else {
                strongest
            };
            let mut sources: Vec<String> =
                group.iter().map(|c| c.source.to_string()).collect();
            sources.sort();
            sources.dedup();
            ArchitecturalPatternResult {
                name: name.to_string(),
                confidence,
                evidence: group.iter().flat_map(|c| c.evidence.clone()).collect(),
                sources,
                detection_count: group.len(),
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.confidence
            .cmp(&a.confidence)
            .then_with(|| a.name.cmp(&b.name))
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &'static str, confidence: u8, source: &'static str) -> PatternCandidate {
        PatternCandidate {
            name,
            confidence,
            evidence: vec![format!("{} evidence", source)],
            source,
        }
    }

    #[test]
    fn test_agreement_boosts_strongest() {
        let merged = merge(vec![
            candidate("Layered Architecture", 65, "structure"),
            candidate("Layered Architecture", 70, "graph"),
        ]);

        assert_eq!(merged.len(), 1);
        let result = &merged[0];
        assert_eq!(result.confidence, 80);
        assert_eq!(result.detection_count, 2);
        assert_eq!(result.sources, vec!["graph", "structure"]);
        assert_eq!(result.evidence.len(), 2);
    }

    #[test]
    fn test_single_candidate_unboosted() {
        let merged = merge(vec![candidate("MVC", 80, "structure")]);
        assert_eq!(merged[0].confidence, 80);
        assert_eq!(merged[0].detection_count, 1);
    }

    #[test]
    fn test_boost_clamped_to_100() {
        let merged = merge(vec![
            candidate("MVC", 95, "structure"),
            candidate("MVC", 90, "graph"),
        ]);
        assert_eq!(merged[0].confidence, 100);
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let merged = merge(vec![
            candidate("MVVM", 70, "structure"),
            candidate("MVC", 70, "structure"),
            candidate("Event-driven", 90, "structure"),
        ]);
        let names: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Event-driven", "MVC", "MVVM"]);
    }
}
