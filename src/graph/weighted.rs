// src/graph/weighted.rs
//! Adjacency-map graph with symmetric edge weights.
//!
//! Each vertex owns an ordered map of `neighbor -> weight`. An edge `{u, v}`
//! is stored on both sides with the same weight; a self-loop is stored once.

use indexmap::IndexMap;
use rand::Rng;

use super::ordering;
use super::Vertex;
use crate::error::{GraphError, Result};

/// Undirected weighted graph without parallel edges.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex> {
    adjacency: IndexMap<V, IndexMap<V, f64>>,
    edge_count: usize,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
            edge_count: 0,
        }
    }
}

impl<V: Vertex> WeightedGraph<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an isolated vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, IndexMap::new());
        true
    }

    /// Removes a vertex with every incident edge and returns its incidence list.
    ///
    /// O(V): the vertex index is shifted to keep insertion order, on top of
    /// one O(degree) pass over the incident rows.
    pub fn remove_vertex(&mut self, vertex: &V) -> Vec<(V, f64)> {
        let Some(incident) = self.adjacency.shift_remove(vertex) else {
            return Vec::new();
        };

        for neighbor in incident.keys() {
            if neighbor != vertex {
                if let Some(row) = self.adjacency.get_mut(neighbor) {
                    row.shift_remove(vertex);
                }
            }
        }

        self.edge_count -= incident.len();
        incident.into_iter().collect()
    }

    /// Connects `u` and `v`, overwriting the weight of an existing edge.
    ///
    /// Returns false, leaving the graph untouched, if either endpoint is absent.
    pub fn add_edge(&mut self, u: &V, v: &V, weight: f64) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }
        let is_new = self.set_symmetric(u, v, weight).is_none();
        if is_new {
            self.edge_count += 1;
        }
        true
    }

    /// Like [`add_edge`](Self::add_edge) but reports why the edge was refused.
    ///
    /// # Errors
    /// `InvalidVertex` if an endpoint is absent, `NegativeWeight` for a
    /// negative or NaN weight. The graph is unchanged on error.
    pub fn try_add_edge(&mut self, u: &V, v: &V, weight: f64) -> Result<()> {
        for endpoint in [u, v] {
            if !self.contains(endpoint) {
                return Err(GraphError::InvalidVertex(endpoint.to_string()));
            }
        }
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: u.to_string(),
                to: v.to_string(),
                weight,
            });
        }
        self.add_edge(u, v, weight);
        Ok(())
    }

    /// Removes the edge `{u, v}` and returns its weight.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Option<f64> {
        let weight = self.adjacency.get_mut(u)?.shift_remove(v)?;
        if u != v {
            if let Some(row) = self.adjacency.get_mut(v) {
                row.shift_remove(u);
            }
        }
        self.edge_count -= 1;
        Some(weight)
    }

    #[must_use]
    pub fn weight(&self, u: &V, v: &V) -> Option<f64> {
        self.adjacency.get(u)?.get(v).copied()
    }

    /// Updates the weight of an existing edge. Returns false if there is no such edge.
    pub fn change_weight(&mut self, u: &V, v: &V, weight: f64) -> bool {
        if !self.is_adjacent(u, v) {
            return false;
        }
        self.set_symmetric(u, v, weight);
        true
    }

    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    #[must_use]
    pub fn is_adjacent(&self, u: &V, v: &V) -> bool {
        self.adjacency.get(u).is_some_and(|row| row.contains_key(v))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of `vertex` with edge weights, in insertion order.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Vec<(V, f64)> {
        self.adjacency
            .get(vertex)
            .map(|row| row.iter().map(|(n, w)| (n.clone(), *w)).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn neighbor_vertices(&self, vertex: &V) -> Vec<V> {
        self.adjacency
            .get(vertex)
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Borrowing iterator over the neighbors of `vertex`; empty if absent.
    pub fn iter_neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|row| row.iter().map(|(n, w)| (n, *w)))
    }

    /// The `index`-th neighbor of `vertex`, used by cursor-based traversals.
    pub(crate) fn neighbor_at(&self, vertex: &V, index: usize) -> Option<(&V, f64)> {
        self.adjacency
            .get(vertex)?
            .get_index(index)
            .map(|(n, w)| (n, *w))
    }

    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    pub fn iter_vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Every undirected edge exactly once, as `((u, v), weight)`.
    #[must_use]
    pub fn edges(&self) -> Vec<((V, V), f64)> {
        let mut result = Vec::with_capacity(self.edge_count);
        for (index, (u, row)) in self.adjacency.iter().enumerate() {
            for (v, weight) in row {
                // Report each pair from the endpoint that appears first.
                let owner = self.adjacency.get_index_of(v).unwrap_or(index);
                if owner >= index {
                    result.push(((u.clone(), v.clone()), *weight));
                }
            }
        }
        result
    }

    /// [`edges`](Self::edges) in ascending weight order.
    #[must_use]
    pub fn sorted_edges(&self) -> Vec<((V, V), f64)> {
        let mut edges = self.edges();
        ordering::quick_sort(&mut edges);
        edges
    }

    /// A uniformly chosen vertex, or `None` for an empty graph.
    pub fn random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<V> {
        if self.adjacency.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.adjacency.len());
        self.adjacency.get_index(index).map(|(v, _)| v.clone())
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Writes `weight` on both sides; returns the previous weight if the edge existed.
    fn set_symmetric(&mut self, u: &V, v: &V, weight: f64) -> Option<f64> {
        let previous = self
            .adjacency
            .get_mut(u)
            .and_then(|row| row.insert(v.clone(), weight));
        if u != v {
            if let Some(row) = self.adjacency.get_mut(v) {
                row.insert(u.clone(), weight);
            }
        }
        previous
    }
}
