//! Module dependency graph.
//!
//! Nodes are project modules (project-relative path, extension stripped) plus
//! external packages as unexpanded leaves. Adjacency is kept in both
//! directions so fan-in and fan-out queries are symmetric.

pub mod builder;
pub mod cycles;
pub mod layers;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

pub use builder::build;

/// One node in the dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    /// Project-relative source path; `None` for external packages.
    pub file_path: Option<String>,
    pub imports: BTreeSet<String>,
    pub imported_by: BTreeSet<String>,
    pub external: bool,
}

impl Module {
    pub fn project(id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_path: Some(file_path.into()),
            external: false,
            ..Default::default()
        }
    }

    pub fn external(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_path: None,
            external: true,
            ..Default::default()
        }
    }
}

/// One inferred architectural layer; `modules` ordered by directory depth,
/// then id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub modules: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: BTreeMap<String, Module>,
    /// Project modules only; externals are excluded.
    pub module_count: usize,
    pub edge_count: usize,
    /// Strongly-connected components of size > 1, each sorted by id.
    pub cycles: Vec<Vec<String>>,
    /// Present only when the layering passed the conformance gate.
    pub layers: Vec<Layer>,
    /// True when the module cap cut extraction facts out of the graph.
    pub truncated: bool,
}

impl DependencyGraph {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Project modules importing `id`.
    pub fn dependents_of(&self, id: &str) -> BTreeSet<String> {
        self.nodes
            .get(id)
            .map(|m| m.imported_by.clone())
            .unwrap_or_default()
    }
}
