// src/graph/cycles.rs
//! Bounded simple-cycle search.
//!
//! Finds a closed tour `start -> v1 -> ... -> vn -> start` over exactly `n`
//! distinct intermediate vertices using depth-first backtracking. The search
//! is exponential in the worst case, so callers can pass a step budget.
//! Frames live on an explicit stack, so long tours do not grow the call stack.

use std::collections::HashSet;

use tracing::debug;

use super::{Vertex, WeightedGraph};
use crate::error::{GraphError, Result};

/// Returns `length` distinct vertices (excluding `start`) forming a cycle
/// through `start`, or an empty `Vec` when no such cycle exists.
///
/// Neighbors are tried in graph order and the first complete cycle wins.
/// `budget` caps the number of vertices entered; `None` means unlimited.
///
/// # Errors
/// `InvalidVertex` if `start` is absent, `SearchBudgetExhausted` when the
/// budget runs out before the search settles.
pub fn bounded_cycle<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    length: usize,
    budget: Option<u64>,
) -> Result<Vec<V>> {
    if !graph.contains(start) {
        return Err(GraphError::InvalidVertex(start.to_string()));
    }
    if length == 0 || graph.vertex_count() < length + 1 {
        return Ok(Vec::new());
    }

    let mut search = CycleSearch {
        graph,
        start,
        length,
        budget,
        steps: 0,
        visited: HashSet::from([start.clone()]),
        path: Vec::with_capacity(length),
        frames: vec![Frame::new(start.clone())],
    };
    search.run()
}

struct Frame<V> {
    vertex: V,
    /// Index of the next neighbor to try.
    cursor: usize,
}

impl<V> Frame<V> {
    fn new(vertex: V) -> Self {
        Self { vertex, cursor: 0 }
    }
}

struct CycleSearch<'a, V: Vertex> {
    graph: &'a WeightedGraph<V>,
    start: &'a V,
    length: usize,
    budget: Option<u64>,
    steps: u64,
    visited: HashSet<V>,
    /// Vertices entered after `start`; mirrors `frames[1..]`.
    path: Vec<V>,
    frames: Vec<Frame<V>>,
}

impl<V: Vertex> CycleSearch<'_, V> {
    fn run(&mut self) -> Result<Vec<V>> {
        while let Some(frame) = self.frames.last_mut() {
            if self.path.len() == self.length {
                if self.graph.is_adjacent(&frame.vertex, self.start) {
                    return Ok(std::mem::take(&mut self.path));
                }
                self.backtrack();
                continue;
            }

            let cursor = frame.cursor;
            frame.cursor += 1;
            let next = self
                .graph
                .neighbor_at(&frame.vertex, cursor)
                .map(|(n, _)| n.clone());

            match next {
                Some(next) if !self.visited.contains(&next) => self.enter(next)?,
                Some(_) => {}
                None => self.backtrack(),
            }
        }
        Ok(Vec::new())
    }

    fn enter(&mut self, vertex: V) -> Result<()> {
        self.steps += 1;
        if self.budget.is_some_and(|limit| self.steps > limit) {
            debug!(steps = self.steps, "cycle search budget exhausted");
            return Err(GraphError::SearchBudgetExhausted { steps: self.steps - 1 });
        }
        self.visited.insert(vertex.clone());
        self.path.push(vertex.clone());
        self.frames.push(Frame::new(vertex));
        Ok(())
    }

    fn backtrack(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.visited.remove(&frame.vertex);
            if !self.frames.is_empty() {
                self.path.pop();
            }
        }
    }
}
