use std::sync::Arc;

use log::trace;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::data_structures::{AtomicDistance, PriorityFrontier};
use crate::graph::{Graph, Weight};
use crate::{Error, Result, UNREACHED};

/// Dijkstra with intra-query parallel edge relaxation
///
/// Settling order is identical to [`crate::Dijkstra`]; only the neighbor scan
/// of a high-degree vertex is split into disjoint sub-ranges that are relaxed
/// concurrently. Shared distances are [`AtomicDistance`] cells updated with a
/// smallest-wins compare-and-exchange, and the frontier is only touched after
/// the scan has joined, so the output matches the sequential engine exactly.
#[derive(Debug, Clone)]
pub struct ParallelDijkstra {
    /// Out-degree at which a vertex's relaxation is split
    degree_threshold: usize,
    /// Neighbors per parallel task
    chunk_size: usize,
    /// Distances above this bound are not explored
    cutoff: Option<Weight>,
    /// Pool to run on; the ambient rayon pool when `None`
    pool: Option<Arc<ThreadPool>>,
}

impl Default for ParallelDijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelDijkstra {
    pub const DEFAULT_DEGREE_THRESHOLD: usize = 4096;
    pub const DEFAULT_CHUNK_SIZE: usize = 1024;

    pub fn new() -> Self {
        ParallelDijkstra {
            degree_threshold: Self::DEFAULT_DEGREE_THRESHOLD,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            cutoff: None,
            pool: None,
        }
    }

    /// Set the out-degree at which relaxation goes parallel
    pub fn with_degree_threshold(mut self, threshold: usize) -> Self {
        self.degree_threshold = threshold;
        self
    }

    /// Set the number of neighbors handled per parallel task (at least 1)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_cutoff(mut self, cutoff: Weight) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Run on a dedicated pool instead of the global one
    pub fn with_pool(mut self, pool: Arc<ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    fn run<G>(&self, graph: &G, source: usize) -> DistanceVector
    where
        G: Graph + ?Sized,
    {
        let n = graph.vertex_count();
        let cutoff = self.cutoff.unwrap_or(UNREACHED);

        let distances: Vec<AtomicDistance> = (0..n).map(|_| AtomicDistance::new(UNREACHED)).collect();
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut split_scans = 0usize;

        distances[source].fetch_min(0.0);
        let mut frontier = PriorityFrontier::new(n);
        frontier.push(source, 0.0);

        while let Some((u, dist_u)) = frontier.try_pop_min() {
            if finalized[u] {
                continue;
            }
            if dist_u > cutoff {
                break;
            }
            finalized[u] = true;

            let (targets, weights) = graph.neighbor_slices(u);
            if targets.len() >= self.degree_threshold {
                split_scans += 1;
                let settled = &finalized;
                let shared = &distances;
                let improved: Vec<usize> = targets
                    .par_chunks(self.chunk_size)
                    .zip(weights.par_chunks(self.chunk_size))
                    .flat_map_iter(|(chunk_targets, chunk_weights)| {
                        let mut local = Vec::new();
                        for (&v, &weight) in chunk_targets.iter().zip(chunk_weights) {
                            if settled[v] {
                                continue;
                            }
                            let new_dist = dist_u + weight;
                            if new_dist <= cutoff && shared[v].fetch_min(new_dist) {
                                local.push(v);
                            }
                        }
                        local
                    })
                    .collect();

                // Every improvement in this scan came from u
                for v in improved {
                    predecessors[v] = Some(u);
                    frontier.push(v, distances[v].load());
                }
            } else {
                for (&v, &weight) in targets.iter().zip(weights) {
                    if finalized[v] {
                        continue;
                    }
                    let new_dist = dist_u + weight;
                    if new_dist <= cutoff && distances[v].fetch_min(new_dist) {
                        predecessors[v] = Some(u);
                        frontier.push(v, new_dist);
                    }
                }
            }
        }

        trace!(
            "Parallel Dijkstra from {} split {} neighbor scans",
            source,
            split_scans
        );

        let distances = distances.into_iter().map(AtomicDistance::into_inner).collect();
        DistanceVector::new(source, distances, predecessors)
    }
}

impl<G> ShortestPathAlgorithm<G> for ParallelDijkstra
where
    G: Graph + Sync + ?Sized,
{
    fn name(&self) -> &'static str {
        "ParallelDijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        Ok(match &self.pool {
            Some(pool) => pool.install(|| self.run(graph, source)),
            None => self.run(graph, source),
        })
    }
}
