//! Layer inference over the cycle-collapsed graph.
//!
//! Rank 0 holds modules with no project dependencies; each module's rank is
//! one past the deepest module it imports. The ranking is reported only when
//! it actually describes the codebase: at least two layers, and at least
//! [`LAYER_CONFORMANCE_MIN`] of project edges crossing between components
//! (intra-cycle edges conform to no layering).

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{Layer, Module};
use crate::constants::LAYER_CONFORMANCE_MIN;

pub fn infer(nodes: &BTreeMap<String, Module>, cycles: &[Vec<String>]) -> Vec<Layer> {
    // collapse cycle members into one component each; every other project
    // module is its own component
    let mut component_of: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, cycle) in cycles.iter().enumerate() {
        for id in cycle {
            component_of.insert(id, i);
        }
    }
    let mut next = cycles.len();
    for (id, module) in nodes {
        if !module.external && !component_of.contains_key(id.as_str()) {
            component_of.insert(id, next);
            next += 1;
        }
    }
    if next == 0 {
        return Vec::new();
    }

    let mut project_edges = 0usize;
    let mut conforming = 0usize;
    let mut dependencies: BTreeSet<(usize, usize)> = BTreeSet::new();
    for (id, module) in nodes {
        if module.external {
            continue;
        }
        let from = component_of[id.as_str()];
        for target in &module.imports {
            let Some(&to) = component_of.get(target.as_str()) else {
                continue; // external target
            };
            project_edges += 1;
            if from != to {
                conforming += 1;
                dependencies.insert((from, to));
            }
        }
    }
    if project_edges == 0 {
        return Vec::new();
    }
    if (conforming as f64 / project_edges as f64) < LAYER_CONFORMANCE_MIN {
        return Vec::new();
    }

    let ranks = longest_path_ranks(next, &dependencies);
    let distinct: BTreeSet<usize> = ranks.iter().copied().collect();
    if distinct.len() < 2 {
        return Vec::new();
    }

    let mut members: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (id, module) in nodes {
        if !module.external {
            members
                .entry(ranks[component_of[id.as_str()]])
                .or_default()
                .push(id);
        }
    }
    members
        .into_iter()
        .map(|(rank, mut modules)| {
            modules.sort_by_key(|id| (id.matches('/').count(), id.to_string()));
            Layer {
                name: format!("layer-{}", rank),
                modules: modules.into_iter().map(String::from).collect(),
            }
        })
        .collect()
}

/// Longest-path rank per component over the acyclic condensation.
fn longest_path_ranks(components: usize, dependencies: &BTreeSet<(usize, usize)>) -> Vec<usize> {
    let mut pending = vec![0usize; components];
    let mut importers: Vec<Vec<usize>> = vec![Vec::new(); components];
    for &(from, to) in dependencies {
        pending[from] += 1;
        importers[to].push(from);
    }

    let mut ranks = vec![0usize; components];
    let mut ready: VecDeque<usize> = (0..components).filter(|&c| pending[c] == 0).collect();
    while let Some(c) = ready.pop_front() {
        for &importer in &importers[c] {
            ranks[importer] = ranks[importer].max(ranks[c] + 1);
            pending[importer] -= 1;
            if pending[importer] == 0 {
                ready.push_back(importer);
            }
        }
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::cycles;

    fn graph_of(edges: &[(&str, &str)]) -> BTreeMap<String, Module> {
        let mut nodes: BTreeMap<String, Module> = BTreeMap::new();
        for (from, to) in edges {
            nodes
                .entry(from.to_string())
                .or_insert_with(|| Module::project(*from, format!("{}.ts", from)))
                .imports
                .insert(to.to_string());
            nodes
                .entry(to.to_string())
                .or_insert_with(|| Module::project(*to, format!("{}.ts", to)))
                .imported_by
                .insert(from.to_string());
        }
        nodes
    }

    #[test]
    fn test_chain_forms_three_layers() {
        let nodes = graph_of(&[("app/main", "services/user"), ("services/user", "db/pool")]);
        let layers = infer(&nodes, &[]);
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].name, "layer-0");
        assert_eq!(layers[0].modules, vec!["db/pool"]);
        assert_eq!(layers[2].modules, vec!["app/main"]);
    }

    #[test]
    fn test_single_rank_yields_no_layers() {
        let nodes = graph_of(&[]);
        assert!(infer(&nodes, &[]).is_empty());
    }

    #[test]
    fn test_cycle_heavy_graph_fails_conformance() {
        // two of three edges are inside the cycle; conformance 1/3 < 0.8
        let nodes = graph_of(&[("a", "b"), ("b", "a"), ("a", "c")]);
        let cycle = cycles::find(&nodes);
        assert!(infer(&nodes, &cycle).is_empty());
    }

    #[test]
    fn test_collapsed_cycle_still_ranks() {
        // a <-> b cycle sits above c; 9 conforming edges drown the 2
        // intra-cycle ones (11 total, conformance ~0.82)
        let mut edges = vec![("a", "b"), ("b", "a")];
        let leaves = ["c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7"];
        for leaf in &leaves {
            edges.push(("a", leaf));
        }
        edges.push(("b", "c0"));
        let nodes = graph_of(&edges);
        let cycle = cycles::find(&nodes);
        let layers = infer(&nodes, &cycle);
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].modules.len(), leaves.len());
        assert_eq!(layers[1].modules, vec!["a", "b"]);
    }
}
