// src/graph/centrality/random_walk.rs
//! Sampling centrality: visit counts of a weighted random walk.
//!
//! A single walk position is drawn once and carried across every outer
//! iteration; the walk is never restarted between rounds. A vertex with no
//! neighbors teleports the walk to a uniformly chosen vertex.

use rand::Rng;

use super::Centrality;
use crate::error::{GraphError, Result};
use crate::graph::{Vertex, WeightedGraph};

/// Runs `walk_count` rounds of `walk_length` weighted steps and counts how
/// often each vertex is stepped onto.
///
/// The next vertex is drawn with probability proportional to edge weight. If
/// every outgoing weight is zero the neighbor is drawn uniformly.
///
/// # Errors
/// `EmptyGraph` if steps are requested on an empty graph, `NegativeWeight`
/// if the walk meets a negative or NaN weight.
pub fn approximate_centrality<V: Vertex, R: Rng + ?Sized>(
    graph: &WeightedGraph<V>,
    walk_count: usize,
    walk_length: usize,
    rng: &mut R,
) -> Result<Centrality<V>> {
    let mut scores: Centrality<V> = graph.iter_vertices().map(|v| (v.clone(), 0.0)).collect();
    if walk_count == 0 || walk_length == 0 {
        return Ok(scores);
    }

    let mut position = graph.random_vertex(rng).ok_or(GraphError::EmptyGraph)?;
    for _ in 0..walk_count {
        for _ in 0..walk_length {
            position = match weighted_step(graph, &position, rng)? {
                Some(next) => next,
                None => graph.random_vertex(rng).ok_or(GraphError::EmptyGraph)?,
            };
            *scores.entry(position.clone()).or_insert(0.0) += 1.0;
        }
    }

    Ok(scores)
}

/// Picks a neighbor of `from` by cumulative weight over a uniform draw in
/// `[0, total)`. `None` if `from` has no neighbors.
///
/// When the weights sum past `f64::MAX` they are sampled relative to the
/// heaviest edge; infinite edges share all of the probability.
fn weighted_step<V: Vertex, R: Rng + ?Sized>(
    graph: &WeightedGraph<V>,
    from: &V,
    rng: &mut R,
) -> Result<Option<V>> {
    let mut total = 0.0;
    let mut heaviest = 0.0_f64;
    let mut degree = 0;
    for (to, weight) in graph.iter_neighbors(from) {
        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::NegativeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        total += weight;
        heaviest = heaviest.max(weight);
        degree += 1;
    }

    if degree == 0 {
        return Ok(None);
    }
    if heaviest.is_infinite() {
        let unbounded = graph
            .iter_neighbors(from)
            .filter(|(_, w)| w.is_infinite())
            .count();
        let pick = rng.gen_range(0..unbounded);
        return Ok(graph
            .iter_neighbors(from)
            .filter(|(_, w)| w.is_infinite())
            .nth(pick)
            .map(|(to, _)| to.clone()));
    }
    if total <= 0.0 {
        let pick = rng.gen_range(0..degree);
        return Ok(graph.iter_neighbors(from).nth(pick).map(|(to, _)| to.clone()));
    }

    let mut scale = 1.0;
    if !total.is_finite() {
        scale = heaviest;
        total = graph.iter_neighbors(from).map(|(_, w)| w / scale).sum();
    }

    let draw = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for (to, weight) in graph.iter_neighbors(from) {
        cumulative += weight / scale;
        if draw < cumulative {
            return Ok(Some(to.clone()));
        }
        last = Some(to);
    }
    // Rounding can leave `draw` just above the final cumulative sum.
    Ok(last.cloned())
}
