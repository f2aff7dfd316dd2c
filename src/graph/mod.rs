// src/graph/mod.rs
//! Undirected weighted graph and the route-planning engines built on it.

pub mod centrality;
pub mod cycles;
mod heap;
pub mod ordering;
pub mod paths;
pub mod spanning;
pub mod weighted;

use std::fmt::Display;
use std::hash::Hash;

pub use centrality::{approximate_centrality, betweenness_centrality, rank, Centrality};
pub use cycles::bounded_cycle;
pub use paths::{breadth_first, shortest_path, BreadthFirst, ShortestPaths};
pub use spanning::minimum_spanning_tree;
pub use weighted::WeightedGraph;

/// Anything usable as a vertex identifier.
///
/// `Display` is required so precondition errors can name the offending vertex.
pub trait Vertex: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> Vertex for T {}
