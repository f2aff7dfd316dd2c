// src/graph/paths/dijkstra.rs
//! Single-source shortest paths (Dijkstra) with early exit toward a target set.
//!
//! Precondition: every weight reachable from the source is `>= 0`. A negative
//! or NaN weight met during relaxation aborts the run with `NegativeWeight`.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use super::{reconstruct_path, ParentMap};
use crate::error::{GraphError, Result};
use crate::graph::heap::MinQueue;
use crate::graph::{Vertex, WeightedGraph};

/// Result of one Dijkstra run.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V: Vertex> {
    source: V,
    parent: ParentMap<V>,
    distance: HashMap<V, f64>,
    arrival: IndexMap<V, f64>,
}

impl<V: Vertex> ShortestPaths<V> {
    #[must_use]
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Distance from the source; `+inf` if unreachable or unknown.
    #[must_use]
    pub fn distance(&self, vertex: &V) -> f64 {
        self.distance.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Predecessor on the recorded shortest path. `None` for the source and
    /// for unreachable vertices.
    #[must_use]
    pub fn parent(&self, vertex: &V) -> Option<&V> {
        self.parent.get(vertex).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn distances(&self) -> &HashMap<V, f64> {
        &self.distance
    }

    #[must_use]
    pub fn parents(&self) -> &ParentMap<V> {
        &self.parent
    }

    /// Finalized distances of the requested targets (`+inf` if unreachable),
    /// in the order the targets were given.
    #[must_use]
    pub fn arrival(&self) -> &IndexMap<V, f64> {
        &self.arrival
    }

    /// The reachable target with the smallest arrival distance; the earliest
    /// given target wins a tie.
    #[must_use]
    pub fn closest_target(&self) -> Option<(&V, f64)> {
        self.arrival
            .iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(v, d)| (v, *d))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Vertices from the source to `target`, both inclusive.
    #[must_use]
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distance(target).is_finite() {
            return None;
        }
        reconstruct_path(&self.parent, target)
    }
}

/// Runs Dijkstra from `source`.
///
/// With a non-empty `targets` slice the search stops as soon as every target
/// present in the graph has been finalized (popped from the queue); distances
/// of vertices not yet finalized at that point are tentative.
///
/// # Errors
/// `InvalidVertex` if `source` is absent, `NegativeWeight` on a negative or NaN
/// weight.
pub fn shortest_path<V: Vertex>(
    graph: &WeightedGraph<V>,
    source: &V,
    targets: &[V],
) -> Result<ShortestPaths<V>> {
    if !graph.contains(source) {
        return Err(GraphError::InvalidVertex(source.to_string()));
    }

    let mut distance: HashMap<V, f64> = graph
        .iter_vertices()
        .map(|v| (v.clone(), f64::INFINITY))
        .collect();
    let mut parent: ParentMap<V> = graph.iter_vertices().map(|v| (v.clone(), None)).collect();

    let wanted: HashSet<&V> = targets.iter().filter(|t| graph.contains(t)).collect();
    let mut arrival: IndexMap<V, f64> = targets
        .iter()
        .filter(|t| wanted.contains(t))
        .map(|t| (t.clone(), f64::INFINITY))
        .collect();
    let mut pending = wanted.len();

    let mut finalized: HashSet<V> = HashSet::with_capacity(graph.vertex_count());
    let mut queue = MinQueue::new();
    distance.insert(source.clone(), 0.0);
    queue.push(0.0, source.clone());

    while let Some((dist_v, v)) = queue.pop() {
        if !finalized.insert(v.clone()) {
            continue; // stale entry
        }
        if wanted.contains(&v) {
            arrival.insert(v.clone(), dist_v);
            pending -= 1;
            if pending == 0 {
                break;
            }
        }
        relax(graph, &v, dist_v, &mut distance, &mut parent, &mut queue)?;
    }

    Ok(ShortestPaths {
        source: source.clone(),
        parent,
        distance,
        arrival,
    })
}

fn relax<V: Vertex>(
    graph: &WeightedGraph<V>,
    v: &V,
    dist_v: f64,
    distance: &mut HashMap<V, f64>,
    parent: &mut ParentMap<V>,
    queue: &mut MinQueue<V>,
) -> Result<()> {
    for (w, weight) in graph.iter_neighbors(v) {
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: v.to_string(),
                to: w.to_string(),
                weight,
            });
        }
        let candidate = dist_v + weight;
        let current = distance.get(w).copied().unwrap_or(f64::INFINITY);
        if candidate < current {
            distance.insert(w.clone(), candidate);
            parent.insert(w.clone(), Some(v.clone()));
            queue.push(candidate, w.clone());
        }
    }
    Ok(())
}
