//! Consistency scoring over the assembled profile.

use std::collections::BTreeMap;

use crate::types::{
    ArchitecturalPatternResult, ConsistencyMetrics, Dominant, NamingCategory, NamingStat,
};

/// Score how uniformly the codebase follows its own conventions.
///
/// `naming` averages the dominant convention's share across categories that
/// actually have a dominant convention; mixed or empty categories are left
/// out rather than counted as zero. `architecture` is the top pattern's
/// confidence. `overall` averages whichever components are non-zero.
pub fn score(
    naming_stats: &BTreeMap<NamingCategory, NamingStat>,
    patterns: &[ArchitecturalPatternResult],
) -> ConsistencyMetrics {
    let shares: Vec<f64> = naming_stats
        .values()
        .filter(|stat| matches!(stat.dominant, Some(Dominant::Convention(_))))
        .filter_map(NamingStat::dominant_share)
        .collect();
    let naming = if shares.is_empty() {
        0.0
    } else {
        100.0 * shares.iter().sum::<f64>() / shares.len() as f64
    };

    let architecture = patterns
        .iter()
        .map(|p| p.confidence)
        .max()
        .map(f64::from)
        .unwrap_or(0.0);

    let components: Vec<f64> = [naming, architecture]
        .into_iter()
        .filter(|c| *c > 0.0)
        .collect();
    let overall = if components.is_empty() {
        0.0
    } else {
        components.iter().sum::<f64>() / components.len() as f64
    };

    ConsistencyMetrics {
        overall,
        naming,
        architecture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::profile;

    fn pattern(confidence: u8) -> ArchitecturalPatternResult {
        ArchitecturalPatternResult {
            name: "MVC".to_string(),
            confidence,
            evidence: vec![],
            sources: vec!["structure".to_string()],
            detection_count: 1,
        }
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let metrics = score(&BTreeMap::new(), &[]);
        assert_eq!(metrics.overall, 0.0);
        assert_eq!(metrics.naming, 0.0);
        assert_eq!(metrics.architecture, 0.0);
    }

    #[test]
    fn test_mixed_categories_excluded_from_naming() {
        let mut stats = BTreeMap::new();
        // 100% camelCase
        stats.insert(NamingCategory::Variables, profile(["fooBar", "bazQux"]));
        // no dominant
        stats.insert(
            NamingCategory::Files,
            profile(["fooBar", "foo_bar", "FooBar", "foo-bar"]),
        );

        let metrics = score(&stats, &[]);
        assert!((metrics.naming - 100.0).abs() < 1e-9);
        assert!((metrics.overall - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_averages_nonzero_components() {
        let mut stats = BTreeMap::new();
        stats.insert(NamingCategory::Functions, profile(["fooBar", "bazQux"]));

        let metrics = score(&stats, &[pattern(80)]);
        assert!((metrics.naming - 100.0).abs() < 1e-9);
        assert_eq!(metrics.architecture, 80.0);
        assert!((metrics.overall - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_architecture_only() {
        let metrics = score(&BTreeMap::new(), &[pattern(70)]);
        assert_eq!(metrics.architecture, 70.0);
        assert_eq!(metrics.overall, 70.0);
    }
}
