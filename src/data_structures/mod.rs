pub mod atomic_distance;
pub mod frontier;

pub use atomic_distance::AtomicDistance;
pub use frontier::PriorityFrontier;
