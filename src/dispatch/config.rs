use std::str::FromStr;

use crate::algorithm::parallel::ParallelDijkstra;
use crate::graph::Weight;
use crate::{Error, Result};

pub const ENV_THREADS: &str = "FAST_DIJKSTRA_THREADS";
pub const ENV_CUTOFF: &str = "FAST_DIJKSTRA_CUTOFF";
pub const ENV_MODE: &str = "FAST_DIJKSTRA_MODE";

/// How each single-source computation relaxes edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationMode {
    /// One thread per source
    Sequential,
    /// Split the neighbor scans of high-degree vertices across the pool
    IntraQuery,
}

impl FromStr for RelaxationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(RelaxationMode::Sequential),
            "intra-query" | "intra" | "parallel" => Ok(RelaxationMode::IntraQuery),
            other => Err(Error::InvalidConfig(format!("unknown relaxation mode: {}", other))),
        }
    }
}

/// Configuration for the batch dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchConfig {
    /// Worker threads in the pool; 0 uses one per logical core
    pub worker_count: usize,
    /// Distances above this bound are not explored
    pub cutoff: Option<Weight>,
    pub mode: RelaxationMode,
    /// Out-degree at which intra-query mode splits a neighbor scan
    pub parallel_degree_threshold: usize,
    /// Neighbors per task in intra-query mode
    pub chunk_size: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            worker_count: 0,
            cutoff: None,
            mode: RelaxationMode::Sequential,
            parallel_degree_threshold: ParallelDijkstra::DEFAULT_DEGREE_THRESHOLD,
            chunk_size: ParallelDijkstra::DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DispatchConfig {
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_cutoff(mut self, cutoff: Weight) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn with_mode(mut self, mode: RelaxationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel_degree_threshold(mut self, threshold: usize) -> Self {
        self.parallel_degree_threshold = threshold;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Default configuration overlaid with `FAST_DIJKSTRA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Overlays values produced by `lookup` for the `FAST_DIJKSTRA_*` keys
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_THREADS) {
            self.worker_count = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{} must be a non-negative integer, got {:?}", ENV_THREADS, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_CUTOFF) {
            let cutoff: Weight = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{} must be a number, got {:?}", ENV_CUTOFF, raw))
            })?;
            self.cutoff = Some(cutoff);
        }
        if let Some(raw) = lookup(ENV_MODE) {
            self.mode = raw.trim().parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks that the values can drive a dispatcher
    pub fn validate(&self) -> Result<()> {
        if let Some(cutoff) = self.cutoff {
            if cutoff.is_nan() || cutoff < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "cutoff must be a non-negative number, got {}",
                    cutoff
                )));
            }
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidConfig("chunk_size must be at least 1".to_string()));
        }
        Ok(())
    }
}
