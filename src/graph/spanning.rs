// src/graph/spanning.rs
//! Minimum spanning tree (Prim) grown from a random root.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use super::heap::MinQueue;
use super::{Vertex, WeightedGraph};

/// Builds a minimum spanning tree of the component containing a uniformly
/// chosen root.
///
/// The returned graph holds every vertex of `graph`; vertices outside the
/// root's component stay isolated. The input is never modified.
pub fn minimum_spanning_tree<V: Vertex, R: Rng + ?Sized>(
    graph: &WeightedGraph<V>,
    rng: &mut R,
) -> WeightedGraph<V> {
    let mut tree = WeightedGraph::new();
    for v in graph.iter_vertices() {
        tree.add_vertex(v.clone());
    }

    let Some(root) = graph.random_vertex(rng) else {
        return tree;
    };
    debug!(root = %root, "growing spanning tree");

    let mut visited: HashSet<V> = HashSet::with_capacity(graph.vertex_count());
    let mut frontier: MinQueue<(V, V)> = MinQueue::new();
    push_frontier(graph, &root, &visited, &mut frontier);
    visited.insert(root);

    while let Some((weight, (from, to))) = frontier.pop() {
        if visited.contains(&to) {
            continue;
        }
        tree.add_edge(&from, &to, weight);
        push_frontier(graph, &to, &visited, &mut frontier);
        visited.insert(to);
    }

    tree
}

fn push_frontier<V: Vertex>(
    graph: &WeightedGraph<V>,
    from: &V,
    visited: &HashSet<V>,
    frontier: &mut MinQueue<(V, V)>,
) {
    for (to, weight) in graph.iter_neighbors(from) {
        if to != from && !visited.contains(to) {
            frontier.push(weight, (from.clone(), to.clone()));
        }
    }
}
