pub mod csr;
pub mod generators;
pub mod traits;

pub use csr::{CsrGraph, Neighbors};
pub use traits::Graph;

/// Edge weight and distance type
pub type Weight = f64;
