//! Min-priority frontier keyed by `(f, insertion sequence)`.
//!
//! Lower scores pop first. Equal scores pop in the order they were pushed,
//! independent of how the underlying heap happens to arrange equal keys.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::SearchError;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    f: f64,
    /// Monotonically increasing push counter. Lower = pushed earlier.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// The search frontier.
///
/// Entries are never removed except through [`pop_min`](Self::pop_min). The
/// same item may be pushed again while an older entry for it is still queued.
#[derive(Debug)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push `item` with score `f`, stamping it with the next sequence number.
    pub fn push(&mut self, item: T, f: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, f, seq }));
    }

    /// Remove and return the item with the smallest `(f, seq)`.
    pub fn pop_min(&mut self) -> Result<T, SearchError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.item)
            .ok_or(SearchError::EmptyFrontier)
    }

    /// Smallest score currently queued.
    pub fn peek_f(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.f)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
