pub mod dijkstra;
pub mod parallel;
pub mod traits;

pub use traits::{DistanceVector, ShortestPathAlgorithm};
