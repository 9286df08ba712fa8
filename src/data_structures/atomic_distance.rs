use std::sync::atomic::{AtomicU64, Ordering};

use crate::graph::Weight;

/// A tentative distance shared between relaxation workers
///
/// The `f64` is stored as its bit pattern in an `AtomicU64`. Updates go through
/// [`AtomicDistance::fetch_min`], so concurrent writers can only ever lower the
/// value: the smallest candidate wins regardless of arrival order.
#[derive(Debug)]
pub struct AtomicDistance(AtomicU64);

impl AtomicDistance {
    pub fn new(distance: Weight) -> Self {
        AtomicDistance(AtomicU64::new(distance.to_bits()))
    }

    pub fn load(&self) -> Weight {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    /// Lowers the stored distance to `candidate` if it is smaller.
    ///
    /// Returns true if this call installed `candidate`. If another thread
    /// races in between the load and the exchange, the comparison is retried
    /// against the fresh value.
    pub fn fetch_min(&self, candidate: Weight) -> bool {
        let mut current = self.0.load(Ordering::Acquire);
        loop {
            if candidate >= f64::from_bits(current) {
                return false;
            }
            match self.0.compare_exchange_weak(
                current,
                candidate.to_bits(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }

    pub fn into_inner(self) -> Weight {
        f64::from_bits(self.0.into_inner())
    }
}
