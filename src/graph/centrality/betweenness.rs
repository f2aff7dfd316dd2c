// src/graph/centrality/betweenness.rs
//! Betweenness centrality by dependency accumulation over shortest-path trees.
//!
//! One Dijkstra run per source; vertices are then visited farthest-first and
//! each pushes `1 + its dependency` onto its recorded parent. Only the single
//! parent Dijkstra recorded is credited, so when several shortest paths tie
//! the score follows one of them instead of splitting across all of them.
//! Zero-weight edges can also order a child and its parent arbitrarily.

use std::collections::HashMap;

use super::Centrality;
use crate::error::Result;
use crate::graph::ordering;
use crate::graph::paths::shortest_path;
use crate::graph::{Vertex, WeightedGraph};

/// Sums, over every source, the number of shortest-path tree descendants of
/// each vertex.
///
/// # Errors
/// `NegativeWeight` if any edge weight is negative or NaN.
pub fn betweenness_centrality<V: Vertex>(graph: &WeightedGraph<V>) -> Result<Centrality<V>> {
    let mut scores: Centrality<V> = graph.iter_vertices().map(|v| (v.clone(), 0.0)).collect();

    for source in graph.iter_vertices() {
        let paths = shortest_path(graph, source, &[])?;

        let mut by_distance: Vec<(V, f64)> = graph
            .iter_vertices()
            .map(|v| (v.clone(), paths.distance(v)))
            .collect();
        ordering::quick_sort(&mut by_distance);

        let mut dependency: HashMap<V, f64> = HashMap::new();
        for (vertex, _) in by_distance.iter().rev() {
            let Some(parent) = paths.parent(vertex) else {
                continue; // source or unreachable
            };
            let carried = 1.0 + dependency.get(vertex).copied().unwrap_or(0.0);
            *dependency.entry(parent.clone()).or_insert(0.0) += carried;
        }

        for (vertex, value) in dependency {
            if &vertex != source {
                *scores.entry(vertex).or_insert(0.0) += value;
            }
        }
    }

    Ok(scores)
}
