//! Graph construction from per-file import facts.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::{DependencyGraph, Module, cycles, layers};
use crate::extract::{FileFacts, ImportKind};
use crate::types::ProjectStructure;

/// Build the dependency graph from extraction facts.
///
/// `facts` entries beyond `max_modules` are dropped and the graph is marked
/// truncated. Imports that resolve to no project file become external leaf
/// nodes when the reference is a package name, and are dropped with a debug
/// log when it is a dangling project path.
pub fn build(
    structure: &ProjectStructure,
    facts: &[(String, FileFacts)],
    max_modules: usize,
) -> DependencyGraph {
    let index: BTreeMap<String, String> = structure
        .files
        .iter()
        .map(|f| (module_id(&f.relative_path), f.relative_path.clone()))
        .collect();

    let mut graph = DependencyGraph {
        truncated: facts.len() > max_modules,
        ..Default::default()
    };
    let admitted = &facts[..facts.len().min(max_modules)];

    for (path, file_facts) in admitted {
        let from = module_id(path);
        graph
            .nodes
            .entry(from.clone())
            .or_insert_with(|| Module::project(&from, path));

        for import in &file_facts.imports {
            let target = match import.kind {
                ImportKind::Relative => resolve_relative(path, &import.source, &index),
                ImportKind::Anchored => resolve_anchored(&import.source, &index),
                ImportKind::External => Some(Target::External(import.source.clone())),
            };
            match target {
                Some(Target::Project(to)) => add_project_edge(&mut graph, &from, &to, &index),
                Some(Target::External(name)) => add_external_edge(&mut graph, &from, &name),
                None => {
                    debug!("unresolved import {:?} in {}", import.source, path);
                }
            }
        }
    }

    graph.module_count = graph.nodes.values().filter(|m| !m.external).count();
    graph.edge_count = graph.nodes.values().map(|m| m.imports.len()).sum();
    graph.cycles = cycles::find(&graph.nodes);
    graph.layers = layers::infer(&graph.nodes, &graph.cycles);
    graph
}

enum Target {
    Project(String),
    External(String),
}

fn add_project_edge(
    graph: &mut DependencyGraph,
    from: &str,
    to: &str,
    index: &BTreeMap<String, String>,
) {
    if from == to {
        return;
    }
    graph
        .nodes
        .entry(to.to_string())
        .or_insert_with(|| Module::project(to, index[to].clone()))
        .imported_by
        .insert(from.to_string());
    if let Some(module) = graph.nodes.get_mut(from) {
        module.imports.insert(to.to_string());
    }
}

fn add_external_edge(graph: &mut DependencyGraph, from: &str, name: &str) {
    if from == name {
        return;
    }
    graph
        .nodes
        .entry(name.to_string())
        .or_insert_with(|| Module::external(name))
        .imported_by
        .insert(from.to_string());
    if let Some(module) = graph.nodes.get_mut(from) {
        module.imports.insert(name.to_string());
    }
}

/// Project-relative path with its extension stripped.
pub fn module_id(rel_path: &str) -> String {
    let name_start = rel_path.rfind('/').map_or(0, |i| i + 1);
    match rel_path[name_start..].rfind('.') {
        Some(0) | None => rel_path.to_string(),
        Some(dot) => rel_path[..name_start + dot].to_string(),
    }
}

/// Resolve `./x` / `../y` against the importing file's directory.
fn resolve_relative(
    importer: &str,
    source: &str,
    index: &BTreeMap<String, String>,
) -> Option<Target> {
    let dir = importer.rsplit_once('/').map_or("", |(d, _)| d);
    let base = normalize(&format!("{}/{}", dir, source))?;
    lookup(&base, index).map(Target::Project)
}

/// Resolve a source-root-anchored path, trying `src/` first.
fn resolve_anchored(source: &str, index: &BTreeMap<String, String>) -> Option<Target> {
    for prefix in ["src/", ""] {
        if let Some(id) = lookup(&format!("{}{}", prefix, source), index) {
            return Some(Target::Project(id));
        }
    }
    // the trailing segment may name an item inside the parent module
    let (head, _) = source.rsplit_once('/')?;
    for prefix in ["src/", ""] {
        if let Some(id) = lookup(&format!("{}{}", prefix, head), index) {
            return Some(Target::Project(id));
        }
    }
    None
}

/// Try the path itself, then the `index`/`mod` file conventions.
fn lookup(base: &str, index: &BTreeMap<String, String>) -> Option<String> {
    for candidate in [
        base.to_string(),
        format!("{}/index", base),
        format!("{}/mod", base),
    ] {
        if index.contains_key(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Collapse `.` and `..` segments; `None` when the path escapes the root.
fn normalize(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }
    Some(segments.join("/"))
}
