// src/graph/centrality/mod.rs
//! Vertex influence estimators.

pub mod betweenness;
pub mod random_walk;

use indexmap::IndexMap;

use super::Vertex;

pub use betweenness::betweenness_centrality;
pub use random_walk::approximate_centrality;

/// Score per vertex, zero-initialized over every vertex in graph order.
pub type Centrality<V> = IndexMap<V, f64>;

/// The `n` highest-scoring vertices, best first. Equal scores keep the
/// order of `scores`, which is graph order for the estimators here.
#[must_use]
pub fn rank<V: Vertex>(scores: &Centrality<V>, n: usize) -> Vec<(V, f64)> {
    let mut ranked: Vec<(V, f64)> = scores.iter().map(|(v, s)| (v.clone(), *s)).collect();
    // Stable, so ties are not reordered.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}
