// src/graph/heap.rs
//! Min-priority queue keyed by `f64`, with lazy invalidation.
//!
//! There is no decrease-key: callers push a fresh entry when a score
//! improves and discard stale entries when they are popped.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Scored<T> {
    score: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Scored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Scored<T> {}

impl<T> Ord for Scored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest score; ties pop in push order.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Scored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) struct MinQueue<T> {
    heap: BinaryHeap<Scored<T>>,
    next_seq: u64,
}

impl<T> MinQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, score: f64, item: T) {
        self.heap.push(Scored {
            score,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|entry| (entry.score, entry.item))
    }
}
