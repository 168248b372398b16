//! Cycle detection over the module graph.
//!
//! Tarjan's strongly-connected components, run iteratively so pathological
//! import chains cannot blow the call stack. Components of size 1 are not
//! cycles and are discarded.

use std::collections::BTreeMap;

use super::Module;

const UNVISITED: usize = usize::MAX;

/// Strongly-connected components of size > 1, each sorted by module id, the
/// list sorted by its first member.
pub fn find(nodes: &BTreeMap<String, Module>) -> Vec<Vec<String>> {
    let ids: Vec<&String> = nodes.keys().collect();
    let index_of: BTreeMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();
    let adjacency: Vec<Vec<usize>> = ids
        .iter()
        .map(|id| {
            nodes[id.as_str()]
                .imports
                .iter()
                .filter_map(|t| index_of.get(t.as_str()).copied())
                .collect()
        })
        .collect();

    let n = ids.len();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut next_index = 0usize;
    let mut components: Vec<Vec<String>> = Vec::new();

    for start in 0..n {
        if index[start] != UNVISITED {
            continue;
        }
        // explicit DFS frames: (node, next child offset)
        let mut frames: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(&(v, child)) = frames.last() {
            if child == 0 {
                index[v] = next_index;
                lowlink[v] = next_index;
                next_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }
            if child < adjacency[v].len() {
                frames.last_mut().unwrap().1 += 1;
                let w = adjacency[v][child];
                if index[w] == UNVISITED {
                    frames.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
            } else {
                frames.pop();
                if let Some(&(parent, _)) = frames.last() {
                    lowlink[parent] = lowlink[parent].min(lowlink[v]);
                }
                if lowlink[v] == index[v] {
                    let mut component = Vec::new();
                    loop {
                        let w = stack.pop().unwrap();
                        on_stack[w] = false;
                        component.push(ids[w].clone());
                        if w == v {
                            break;
                        }
                    }
                    if component.len() > 1 {
                        component.sort();
                        components.push(component);
                    }
                }
            }
        }
    }

    components.sort();
    components
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_acyclic_graph_has_no_cycles() {
        let nodes = graph_of(&[("a", "b"), ("b", "c"), ("a", "c")]);
        assert!(find(&nodes).is_empty());
    }

    #[test]
    fn test_three_node_cycle() {
        let nodes = graph_of(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let cycles = find(&nodes);
        assert_eq!(cycles, vec![vec!["a".to_string(), "b".into(), "c".into()]]);
    }

    #[test]
    fn test_two_disjoint_cycles() {
        let nodes = graph_of(&[("a", "b"), ("b", "a"), ("x", "y"), ("y", "x"), ("b", "x")]);
        let cycles = find(&nodes);
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0], vec!["a".to_string(), "b".into()]);
        assert_eq!(cycles[1], vec!["x".to_string(), "y".into()]);
    }

    #[test]
    fn test_self_reference_is_not_a_cycle() {
        // builder never emits self-loops, but the detector must not report a
        // singleton component either way
        let nodes = graph_of(&[("a", "b")]);
        assert!(find(&nodes).is_empty());
    }
}
