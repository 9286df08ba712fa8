//! Fast Dijkstra - parallel multi-source shortest paths
//!
//! This library computes single-source shortest paths on directed graphs with
//! non-negative `f64` edge weights. Graphs are stored once in a compressed sparse
//! row layout and shared read-only between worker threads, so many sources can be
//! solved concurrently without any locking.
//!
//! The four entry points mirror the minimal functional surface:
//! [`build_graph`], [`shortest_paths`] and [`shortest_paths_batch`], plus the
//! [`BatchDispatcher`] for finer control (dense output, cancellation, intra-query
//! parallel relaxation).

pub mod algorithm;
pub mod data_structures;
pub mod dispatch;
pub mod graph;
pub mod io;

use std::sync::Arc;

pub use algorithm::{
    dijkstra::Dijkstra, parallel::ParallelDijkstra, DistanceVector, ShortestPathAlgorithm,
};
pub use dispatch::{
    BatchDispatcher, BatchResults, CancellationToken, DistanceMatrix, DispatchConfig,
    RelaxationMode,
};
/// Re-export main types for convenient use
pub use graph::csr::CsrGraph;
pub use graph::{Graph, Weight};

/// Sentinel distance reported for vertices the source cannot reach
pub const UNREACHED: Weight = f64::INFINITY;

/// Predecessor value used in dense output for "no predecessor"
pub const NO_PREDECESSOR: i64 = -9999;

/// Shared, immutable handle to a built graph
pub type GraphHandle = Arc<CsrGraph>;

/// Reason an individual edge was rejected at build time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeDefect {
    /// Weight is below zero
    NegativeWeight(f64),
    /// Weight is NaN or infinite
    NonFiniteWeight(f64),
    /// Source endpoint is not in `[0, vertex_count)`
    SourceOutOfRange,
    /// Target endpoint is not in `[0, vertex_count)`
    TargetOutOfRange,
}

impl std::fmt::Display for EdgeDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeDefect::NegativeWeight(w) => write!(f, "negative weight {}", w),
            EdgeDefect::NonFiniteWeight(w) => write!(f, "non-finite weight {}", w),
            EdgeDefect::SourceOutOfRange => write!(f, "source endpoint out of range"),
            EdgeDefect::TargetOutOfRange => write!(f, "target endpoint out of range"),
        }
    }
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(i64),

    #[error("Invalid edge #{index}: from {from} to {to}: {defect}")]
    InvalidEdge {
        index: usize,
        from: usize,
        to: usize,
        defect: EdgeDefect,
    },

    #[error("Malformed CSR input: {0}")]
    InvalidCsr(String),

    #[error("Priority frontier is empty")]
    EmptyFrontier,

    #[error("Batch cancelled before source {0} was dispatched")]
    Cancelled(usize),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Builds an immutable graph from a vertex count and `(u, v, weight)` triples.
///
/// Fails with [`Error::InvalidVertexCount`] for a negative count and with
/// [`Error::InvalidEdge`] for the first malformed edge. No graph is produced on
/// failure.
pub fn build_graph<I>(vertex_count: i64, edges: I) -> Result<GraphHandle>
where
    I: IntoIterator<Item = (usize, usize, Weight)>,
{
    let vertex_count =
        usize::try_from(vertex_count).map_err(|_| Error::InvalidVertexCount(vertex_count))?;
    Ok(Arc::new(CsrGraph::build(vertex_count, edges)?))
}

/// Computes shortest paths from `source` with the sequential engine.
pub fn shortest_paths(graph: &GraphHandle, source: usize) -> Result<DistanceVector> {
    Dijkstra::new().compute_shortest_paths(graph.as_ref(), source)
}

/// Computes shortest paths from every source on a pool of `worker_count` threads.
///
/// Per-source failures (such as an out-of-range source) are reported inside the
/// returned [`BatchResults`]; the outer error only covers worker pool setup.
/// A `worker_count` of zero uses one worker per logical core.
pub fn shortest_paths_batch(
    graph: &GraphHandle,
    sources: &[usize],
    worker_count: usize,
) -> Result<BatchResults> {
    let dispatcher = BatchDispatcher::new(DispatchConfig::default().with_worker_count(worker_count))?;
    Ok(dispatcher.run(graph.as_ref(), sources))
}
