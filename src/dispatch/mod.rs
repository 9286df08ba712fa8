//! Fan-out of shortest path queries across a worker pool.

pub mod batch;
pub mod cancel;
pub mod config;

pub use batch::{BatchDispatcher, BatchResults, DistanceMatrix};
pub use cancel::CancellationToken;
pub use config::{DispatchConfig, RelaxationMode};
