// src/graph/paths/mod.rs
//! Single-source traversals: weighted (Dijkstra) and unweighted (BFS).

pub mod bfs;
pub mod dijkstra;

use std::collections::HashMap;

use super::Vertex;

pub use bfs::{breadth_first, BreadthFirst};
pub use dijkstra::{shortest_path, ShortestPaths};

/// Predecessor map produced by a traversal. The source maps to `None`.
pub type ParentMap<V> = HashMap<V, Option<V>>;

/// Walks the predecessor chain back from `target` and returns the path
/// source-first. `None` if `target` was never reached.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn reconstruct_path<V: Vertex>(parent: &ParentMap<V>, target: &V) -> Option<Vec<V>> {
    let mut path = vec![target.clone()];
    let mut current = parent.get(target)?;

    while let Some(previous) = current {
        path.push(previous.clone());
        current = parent.get(previous)?;
        if path.len() > parent.len() {
            // A well-formed parent map cannot hold a chain longer than its size.
            return None;
        }
    }

    path.reverse();
    Some(path)
}
