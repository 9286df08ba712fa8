use ordered_float::OrderedFloat;

use crate::graph::Weight;
use crate::{Error, Result};

const ABSENT: usize = usize::MAX;

type Key = (OrderedFloat<Weight>, usize);

/// Indexed binary min-heap over `(distance, vertex)` supporting decrease-key
///
/// Entries are ordered by distance, with ties broken by the lower vertex id, so
/// the pop sequence is fully determined by the keys. A `position` index maps
/// each vertex to its heap slot, which keeps `decrease_key` logarithmic and
/// guarantees that a vertex is present at most once.
#[derive(Debug, Clone)]
pub struct PriorityFrontier {
    /// Heap-ordered keys
    heap: Vec<Key>,

    /// vertex -> slot in `heap`, or `ABSENT`
    position: Vec<usize>,
}

impl PriorityFrontier {
    /// Creates an empty frontier for vertices in `[0, vertex_count)`
    pub fn new(vertex_count: usize) -> Self {
        PriorityFrontier {
            heap: Vec::new(),
            position: vec![ABSENT; vertex_count],
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued vertices
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the vertex is currently queued
    pub fn contains(&self, vertex: usize) -> bool {
        self.position.get(vertex).map_or(false, |&slot| slot != ABSENT)
    }

    /// Returns the queued distance of a vertex
    pub fn priority(&self, vertex: usize) -> Option<Weight> {
        match self.position.get(vertex) {
            Some(&slot) if slot != ABSENT => Some(self.heap[slot].0.into_inner()),
            _ => None,
        }
    }

    /// Queues a vertex, or lowers its distance if it is already queued.
    ///
    /// # Panics
    /// Panics if `vertex` is outside the range given to [`PriorityFrontier::new`].
    pub fn push(&mut self, vertex: usize, distance: Weight) {
        if self.contains(vertex) {
            self.decrease_key(vertex, distance);
            return;
        }

        let slot = self.heap.len();
        self.heap.push((OrderedFloat(distance), vertex));
        self.position[vertex] = slot;
        self.sift_up(slot);
    }

    /// Lowers the distance of a queued vertex.
    ///
    /// Returns false, leaving the frontier untouched, when the vertex is not
    /// queued or `distance` is not smaller than its current one.
    pub fn decrease_key(&mut self, vertex: usize, distance: Weight) -> bool {
        let slot = match self.position.get(vertex) {
            Some(&slot) if slot != ABSENT => slot,
            _ => return false,
        };

        let distance = OrderedFloat(distance);
        if distance >= self.heap[slot].0 {
            return false;
        }

        self.heap[slot].0 = distance;
        self.sift_up(slot);
        true
    }

    /// Returns the minimum entry without removing it
    pub fn peek_min(&self) -> Option<(usize, Weight)> {
        self.heap.first().map(|&(d, v)| (v, d.into_inner()))
    }

    /// Removes and returns the vertex with the smallest distance
    pub fn pop_min(&mut self) -> Result<(usize, Weight)> {
        self.try_pop_min().ok_or(Error::EmptyFrontier)
    }

    /// Removes and returns the vertex with the smallest distance, if any
    pub fn try_pop_min(&mut self) -> Option<(usize, Weight)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (distance, vertex) = self.heap.pop()?;
        self.position[vertex] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((vertex, distance.into_inner()))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        for &(_, vertex) in &self.heap {
            self.position[vertex] = ABSENT;
        }
        self.heap.clear();
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a].1] = a;
        self.position[self.heap[b].1] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot] >= self.heap[parent] {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };
            if self.heap[slot] <= self.heap[child] {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
