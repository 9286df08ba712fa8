use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::parallel::ParallelDijkstra;
use crate::algorithm::{DistanceVector, ShortestPathAlgorithm};
use crate::dispatch::cancel::CancellationToken;
use crate::dispatch::config::{DispatchConfig, RelaxationMode};
use crate::graph::{Graph, Weight};
use crate::{Error, Result, NO_PREDECESSOR, UNREACHED};

/// Per-source outcome of a batch run, keyed by source vertex
#[derive(Debug, Default)]
pub struct BatchResults {
    results: HashMap<usize, Result<DistanceVector>>,
}

impl BatchResults {
    pub fn get(&self, source: usize) -> Option<&Result<DistanceVector>> {
        self.results.get(&source)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sources present in the batch, in no particular order
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.results.keys().copied()
    }

    pub fn successes(&self) -> impl Iterator<Item = (usize, &DistanceVector)> + '_ {
        self.results
            .iter()
            .filter_map(|(&source, result)| result.as_ref().ok().map(|dv| (source, dv)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &Error)> + '_ {
        self.results
            .iter()
            .filter_map(|(&source, result)| result.as_ref().err().map(|e| (source, e)))
    }

    pub fn into_inner(self) -> HashMap<usize, Result<DistanceVector>> {
        self.results
    }
}

/// Row-major `sources x vertices` distance and predecessor matrices
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    sources: Vec<usize>,
    vertex_count: usize,
    distances: Vec<Weight>,
    predecessors: Vec<Option<usize>>,
}

impl DistanceMatrix {
    /// Source of each row, in row order
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub fn rows(&self) -> usize {
        self.sources.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Distances of row `row`; unreached vertices hold [`UNREACHED`]
    pub fn distance_row(&self, row: usize) -> &[Weight] {
        &self.distances[row * self.vertex_count..(row + 1) * self.vertex_count]
    }

    pub fn predecessor_row(&self, row: usize) -> &[Option<usize>] {
        &self.predecessors[row * self.vertex_count..(row + 1) * self.vertex_count]
    }

    pub fn distance(&self, row: usize, vertex: usize) -> Weight {
        self.distances[row * self.vertex_count + vertex]
    }

    pub fn predecessor(&self, row: usize, vertex: usize) -> Option<usize> {
        self.predecessors[row * self.vertex_count + vertex]
    }

    /// Flat distance buffer, row-major
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Flat predecessor buffer with [`NO_PREDECESSOR`] in place of `None`
    pub fn predecessor_codes(&self) -> Vec<i64> {
        self.predecessors
            .iter()
            .map(|p| p.map_or(NO_PREDECESSOR, |v| v as i64))
            .collect()
    }
}

/// Runs many independent single-source queries on a fixed worker pool
///
/// The graph is the only state shared between workers and is only ever read.
/// Each query owns its frontier and distance buffer; results are gathered
/// through rayon's collect, so no two workers ever write the same slot.
#[derive(Debug)]
pub struct BatchDispatcher {
    config: DispatchConfig,
    pool: Arc<ThreadPool>,
    sequential: Dijkstra,
    intra_query: ParallelDijkstra,
}

impl BatchDispatcher {
    /// Builds the worker pool described by `config`
    pub fn new(config: DispatchConfig) -> Result<Self> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .thread_name(|i| format!("fast-dijkstra-{}", i))
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;

        info!(
            "Dispatcher ready: {} workers, mode {:?}",
            pool.current_num_threads(),
            config.mode
        );

        let mut sequential = Dijkstra::new();
        let mut intra_query = ParallelDijkstra::new()
            .with_degree_threshold(config.parallel_degree_threshold)
            .with_chunk_size(config.chunk_size);
        if let Some(cutoff) = config.cutoff {
            sequential = sequential.with_cutoff(cutoff);
            intra_query = intra_query.with_cutoff(cutoff);
        }

        Ok(BatchDispatcher {
            config,
            pool: Arc::new(pool),
            sequential,
            intra_query,
        })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Number of threads in the pool
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs one query on the pool
    pub fn run_single<G>(&self, graph: &G, source: usize) -> Result<DistanceVector>
    where
        G: Graph + Sync + ?Sized,
    {
        self.pool.install(|| self.solve(graph, source))
    }

    /// Runs every source; duplicates are computed once
    pub fn run<G>(&self, graph: &G, sources: &[usize]) -> BatchResults
    where
        G: Graph + Sync + ?Sized,
    {
        self.run_cancellable(graph, sources, &CancellationToken::new())
    }

    /// Like [`BatchDispatcher::run`], checking `token` before each source starts
    pub fn run_cancellable<G>(
        &self,
        graph: &G,
        sources: &[usize],
        token: &CancellationToken,
    ) -> BatchResults
    where
        G: Graph + Sync + ?Sized,
    {
        let start = Instant::now();
        let mut seen = HashSet::with_capacity(sources.len());
        let unique: Vec<usize> = sources.iter().copied().filter(|s| seen.insert(*s)).collect();
        if unique.len() < sources.len() {
            debug!("Collapsed {} duplicate sources", sources.len() - unique.len());
        }

        let results: HashMap<usize, Result<DistanceVector>> = self.pool.install(|| {
            unique
                .par_iter()
                .map(|&source| {
                    if token.is_cancelled() {
                        return (source, Err(Error::Cancelled(source)));
                    }
                    (source, self.solve(graph, source))
                })
                .collect()
        });

        let failed = results.values().filter(|r| r.is_err()).count();
        if failed > 0 {
            warn!("{} of {} sources failed", failed, results.len());
        }
        info!(
            "Batch of {} sources finished in {:?}",
            results.len(),
            start.elapsed()
        );

        BatchResults { results }
    }

    /// Computes dense `sources x vertices` matrices, one row per entry of `sources`.
    ///
    /// Unlike [`BatchDispatcher::run`], any invalid source fails the whole call
    /// before work is dispatched. Each worker writes only its own row.
    pub fn run_dense<G>(&self, graph: &G, sources: &[usize]) -> Result<DistanceMatrix>
    where
        G: Graph + Sync + ?Sized,
    {
        if let Some(&bad) = sources.iter().find(|&&s| !graph.has_vertex(s)) {
            return Err(Error::InvalidVertex(bad));
        }

        let n = graph.vertex_count();
        let mut distances = vec![UNREACHED; sources.len() * n];
        let mut predecessors: Vec<Option<usize>> = vec![None; sources.len() * n];

        if !sources.is_empty() {
            let start = Instant::now();
            self.pool.install(|| {
                distances
                    .par_chunks_mut(n)
                    .zip(predecessors.par_chunks_mut(n))
                    .zip(sources.par_iter())
                    .try_for_each(|((dist_row, pred_row), &source)| -> Result<()> {
                        let result = self.solve(graph, source)?;
                        dist_row.copy_from_slice(result.distances());
                        pred_row.copy_from_slice(result.predecessors());
                        Ok(())
                    })
            })?;
            info!(
                "Dense batch of {} rows x {} vertices finished in {:?}",
                sources.len(),
                n,
                start.elapsed()
            );
        }

        Ok(DistanceMatrix {
            sources: sources.to_vec(),
            vertex_count: n,
            distances,
            predecessors,
        })
    }

    fn solve<G>(&self, graph: &G, source: usize) -> Result<DistanceVector>
    where
        G: Graph + Sync + ?Sized,
    {
        match self.config.mode {
            RelaxationMode::Sequential => self.sequential.compute_shortest_paths(graph, source),
            RelaxationMode::IntraQuery => self.intra_query.compute_shortest_paths(graph, source),
        }
    }
}
