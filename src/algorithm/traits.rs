use log::warn;

use crate::graph::{Graph, Weight};
use crate::{Result, UNREACHED};

/// Result of a single-source shortest path computation
///
/// Unreached vertices carry [`UNREACHED`] as distance and `None` as predecessor.
/// The vector is produced once by a query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceVector {
    /// Source vertex ID
    source: usize,

    /// Distances from source to each vertex
    distances: Vec<Weight>,

    /// Predecessor vertices in the shortest path tree
    predecessors: Vec<Option<usize>>,
}

impl DistanceVector {
    pub(crate) fn new(source: usize, distances: Vec<Weight>, predecessors: Vec<Option<usize>>) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        DistanceVector {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `vertex`, or `None` if it is unreached or out of range
    pub fn distance(&self, vertex: usize) -> Option<Weight> {
        self.distances.get(vertex).copied().filter(|d| *d != UNREACHED)
    }

    /// Distance to `vertex` with the [`UNREACHED`] sentinel left in place
    pub fn raw_distance(&self, vertex: usize) -> Weight {
        self.distances.get(vertex).copied().unwrap_or(UNREACHED)
    }

    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reached(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| **d != UNREACHED).count()
    }

    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessors
    }

    pub fn into_parts(self) -> (Vec<Weight>, Vec<Option<usize>>) {
        (self.distances, self.predecessors)
    }

    /// Reconstructs the shortest path from the source to `target`
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reached(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = match self.predecessors[current] {
                Some(pred) => pred,
                None => {
                    warn!("Broken predecessor chain at vertex {}", current);
                    return None;
                }
            };
            path.push(current);

            if path.len() > self.predecessors.len() {
                warn!("Path to {} exceeds graph size, predecessor cycle", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph + ?Sized,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
