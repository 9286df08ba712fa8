use log::trace;

use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::data_structures::PriorityFrontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result, UNREACHED};

/// Classic Dijkstra's algorithm over an indexed priority frontier
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Distances above this bound are not explored
    cutoff: Option<Weight>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cutoff: None }
    }

    /// Stop exploring once tentative distances exceed `cutoff`.
    ///
    /// Vertices farther than the cutoff are reported as unreached.
    pub fn with_cutoff(mut self, cutoff: Weight) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn cutoff(&self) -> Option<Weight> {
        self.cutoff
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<DistanceVector> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let cutoff = self.cutoff.unwrap_or(UNREACHED);

        let mut distances = vec![UNREACHED; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];

        distances[source] = 0.0;
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

            for (v, weight) in graph.neighbors(u) {
                if finalized[v] {
                    continue;
                }
                let new_dist = dist_u + weight;
                if new_dist < distances[v] && new_dist <= cutoff {
                    distances[v] = new_dist;
                    predecessors[v] = Some(u);
                    frontier.push(v, new_dist);
                }
            }
        }

        trace!("Dijkstra from {} settled {} vertices", source, finalized.iter().filter(|f| **f).count());

        Ok(DistanceVector::new(source, distances, predecessors))
    }
}
