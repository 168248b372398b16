//! End-to-end analysis pipeline.
//!
//! `Analyzer` owns only its configuration. Each `analyze` call walks the
//! tree, samples and extracts facts, builds the graph, profiles naming,
//! detects patterns, and assembles a fresh report; two runs over an
//! unchanged tree produce byte-identical serialized reports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::consistency;
use crate::deadline::Deadline;
use crate::detect::{self, graph_signals};
use crate::extract::{self, FileFacts};
use crate::graph;
use crate::naming;
use crate::scanner;
use crate::types::{
    AnalysisReport, DependencyInsights, NamingCategory, NamingStat, ProjectStructure, Result,
};

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Profile the source tree rooted at `root`.
    ///
    /// Fatal failures only: a missing root, an invalid configuration, or an
    /// expired deadline. Everything else degrades per stage and is logged.
    pub async fn analyze(&self, root: impl AsRef<Path>) -> Result<AnalysisReport> {
        self.config.validate()?;
        let deadline = self.config.deadline_secs.map(Deadline::from_secs);
        let root = root.as_ref();

        let structure = scanner::scan(root, &self.config, deadline.as_ref())?;
        debug!(
            "scanned {} files, {} directories under {}",
            structure.files.len(),
            structure.directories.len(),
            root.display()
        );

        let extraction = extract::extract_facts(&structure, &self.config, deadline.as_ref()).await?;
        debug!(
            "extracted facts from {} files ({} beyond sample)",
            extraction.sampled, extraction.beyond_sample
        );

        let graph = graph::build(
            &structure,
            &extraction.per_file,
            self.config.max_graph_modules,
        );
        let naming_conventions = profile_names(&structure, &extraction.per_file);
        let patterns = detect::detect(&structure, &graph);

        let mut code_patterns: BTreeSet<String> = extraction
            .per_file
            .iter()
            .flat_map(|(_, facts)| facts.tags.iter().cloned())
            .collect();
        code_patterns.extend(graph_signals::tags(&graph));

        let consistency = consistency::score(&naming_conventions, &patterns);

        Ok(AnalysisReport {
            naming_conventions,
            architectural_patterns: patterns,
            code_patterns,
            dependency_insights: DependencyInsights {
                module_count: graph.module_count,
                edge_count: graph.edge_count,
                cycle_count: graph.cycles.len(),
                truncated: graph.truncated,
            },
            consistency,
        })
    }
}

/// Profile every naming category; categories with no population carry an
/// empty stat rather than being omitted.
fn profile_names(
    structure: &ProjectStructure,
    per_file: &[(String, FileFacts)],
) -> BTreeMap<NamingCategory, NamingStat> {
    let mut variables: Vec<&str> = Vec::new();
    let mut functions: Vec<&str> = Vec::new();
    let mut classes: Vec<&str> = Vec::new();
    let mut components: Vec<&str> = Vec::new();
    for (_, facts) in per_file {
        variables.extend(facts.identifiers.variables.iter().map(String::as_str));
        functions.extend(facts.identifiers.functions.iter().map(String::as_str));
        classes.extend(facts.identifiers.classes.iter().map(String::as_str));
        components.extend(facts.identifiers.components.iter().map(String::as_str));
    }

    let mut stats = BTreeMap::new();
    stats.insert(
        NamingCategory::Files,
        naming::profile(structure.files.iter().map(|f| f.stem())),
    );
    stats.insert(
        NamingCategory::Directories,
        naming::profile(structure.directories.iter().map(|d| d.name.as_str())),
    );
    stats.insert(NamingCategory::Variables, naming::profile(variables));
    stats.insert(NamingCategory::Functions, naming::profile(functions));
    stats.insert(NamingCategory::Classes, naming::profile(classes));
    stats.insert(NamingCategory::Components, naming::profile(components));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArchError;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_root_is_fatal() {
        let analyzer = Analyzer::default();
        let err = analyzer.analyze("/nonexistent/project").await.unwrap_err();
        assert!(matches!(err, ArchError::RootNotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_tree_yields_empty_report() {
        let dir = TempDir::new().unwrap();
        let report = Analyzer::default().analyze(dir.path()).await.unwrap();

        assert!(report.architectural_patterns.is_empty());
        assert!(report.code_patterns.is_empty());
        assert_eq!(report.dependency_insights.module_count, 0);
        assert_eq!(report.naming_conventions.len(), NamingCategory::ALL.len());
        assert!(report.naming_conventions[&NamingCategory::Files]
            .dominant
            .is_none());
        assert_eq!(report.consistency.overall, 0.0);
    }

    #[tokio::test]
    async fn test_invalid_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ts"), "const x = 1;").unwrap();

        let analyzer = Analyzer::new(AnalyzerConfig {
            sample_size: 0,
            ..Default::default()
        });
        let err = analyzer.analyze(dir.path()).await.unwrap_err();
        assert!(matches!(err, ArchError::Config(_)));
    }
}
