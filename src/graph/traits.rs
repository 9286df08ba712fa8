use std::fmt::Debug;

use crate::graph::csr::Neighbors;
use crate::graph::Weight;

/// Trait representing an immutable weighted directed graph
///
/// Implementations are read-only after construction, which is what lets many
/// worker threads share one instance without synchronization.
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns a lazy, restartable iterator over the outgoing `(target, weight)` pairs
    fn neighbors(&self, vertex: usize) -> Neighbors<'_>;

    /// Returns the outgoing range of a vertex as two parallel slices
    fn neighbor_slices(&self, vertex: usize) -> (&[usize], &[Weight]);

    /// Returns the number of outgoing edges of a vertex
    fn out_degree(&self, vertex: usize) -> usize {
        self.neighbor_slices(vertex).0.len()
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbor_slices(from).0.contains(&to)
    }

    /// Gets the smallest weight among the edges `from -> to`, if any
    fn edge_weight(&self, from: usize, to: usize) -> Option<Weight> {
        self.neighbors(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .reduce(f64::min)
    }
}
