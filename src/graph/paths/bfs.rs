// src/graph/paths/bfs.rs
//! Breadth-first layered traversal with early exit on the first target.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{reconstruct_path, ParentMap};
use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};

/// Result of one breadth-first run.
#[derive(Debug, Clone)]
pub struct BreadthFirst<V: Vertex> {
    /// First target dequeued, if any.
    pub found: Option<V>,
    pub parent: ParentMap<V>,
    /// Number of edges from the source.
    pub depth: HashMap<V, usize>,
}

impl<V: Vertex> BreadthFirst<V> {
    /// Path from the source to `target`, both inclusive.
    #[must_use]
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        reconstruct_path(&self.parent, target)
    }

    /// Depth of the target that stopped the search.
    #[must_use]
    pub fn found_depth(&self) -> Option<usize> {
        self.found.as_ref().and_then(|v| self.depth.get(v).copied())
    }
}

/// Explores `graph` from `source` in FIFO order, ignoring weights.
///
/// Each vertex is marked when enqueued, so depths are minimum hop counts.
/// The run stops when the first member of `targets` is dequeued (the source
/// itself counts); with no match the whole component is explored.
///
/// # Errors
/// `InvalidVertex` if `source` is absent.
pub fn breadth_first<V: Vertex>(
    graph: &WeightedGraph<V>,
    source: &V,
    targets: &[V],
) -> Result<BreadthFirst<V>> {
    if !graph.contains(source) {
        return Err(GraphError::InvalidVertex(source.to_string()));
    }

    let wanted: HashSet<&V> = targets.iter().collect();
    let mut visited: HashSet<V> = HashSet::new();
    let mut parent: ParentMap<V> = HashMap::new();
    let mut depth: HashMap<V, usize> = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(source.clone());
    parent.insert(source.clone(), None);
    depth.insert(source.clone(), 0);
    queue.push_back(source.clone());

    while let Some(v) = queue.pop_front() {
        if wanted.contains(&v) {
            return Ok(BreadthFirst {
                found: Some(v),
                parent,
                depth,
            });
        }

        let next_depth = depth.get(&v).copied().unwrap_or(0) + 1;
        for (w, _) in graph.iter_neighbors(&v) {
            if visited.insert(w.clone()) {
                parent.insert(w.clone(), Some(v.clone()));
                depth.insert(w.clone(), next_depth);
                queue.push_back(w.clone());
            }
        }
    }

    Ok(BreadthFirst {
        found: None,
        parent,
        depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_shortcut() -> WeightedGraph<u32> {
        // 0-1-2-3-4 plus a heavy shortcut 0-4 that BFS must still prefer.
        let mut g = WeightedGraph::new();
        for v in 0..6 {
            g.add_vertex(v);
        }
        for v in 0..4 {
            g.add_edge(&v, &(v + 1), 1.0);
        }
        g.add_edge(&0, &4, 100.0);
        g
    }

    #[test]
    fn test_depth_counts_edges_not_weight() {
        let result = breadth_first(&chain_with_shortcut(), &0, &[]).expect("source exists");
        assert_eq!(result.found, None);
        assert_eq!(result.depth.get(&0), Some(&0));
        assert_eq!(result.depth.get(&4), Some(&1));
        assert_eq!(result.depth.get(&3), Some(&2));
        assert_eq!(result.depth.get(&5), None);
    }

    #[test]
    fn test_stops_at_first_target() {
        let result = breadth_first(&chain_with_shortcut(), &0, &[3, 4]).expect("source exists");
        assert_eq!(result.found, Some(4));
        assert_eq!(result.found_depth(), Some(1));
        assert_eq!(result.path_to(&4), Some(vec![0, 4]));
    }

    #[test]
    fn test_source_as_target() {
        let result = breadth_first(&chain_with_shortcut(), &2, &[2]).expect("source exists");
        assert_eq!(result.found, Some(2));
        assert_eq!(result.found_depth(), Some(0));
        assert_eq!(result.depth.len(), 1);
    }

    #[test]
    fn test_unreachable_target_explores_component() {
        let result = breadth_first(&chain_with_shortcut(), &0, &[5]).expect("source exists");
        assert_eq!(result.found, None);
        assert_eq!(result.depth.len(), 5);
        assert_eq!(result.path_to(&5), None);
    }

    #[test]
    fn test_invalid_source() {
        assert!(matches!(
            breadth_first(&chain_with_shortcut(), &42, &[]),
            Err(GraphError::InvalidVertex(_))
        ));
    }
}
