//! Entries that can sit on a continuum.

use serde::{Deserialize, Serialize};

/// An element of a continuum: anything exposing a `u32` ring position.
///
/// The payload (node, server, shard owner...) is never inspected by the
/// lookup; only [`value`](RingEntry::value) is read.
pub trait RingEntry {
    /// Position of this entry on the ring.
    fn value(&self) -> u32;
}

impl RingEntry for u32 {
    fn value(&self) -> u32 {
        *self
    }
}

impl<T> RingEntry for (u32, T) {
    fn value(&self) -> u32 {
        self.0
    }
}

impl<E: RingEntry + ?Sized> RingEntry for &E {
    fn value(&self) -> u32 {
        (**self).value()
    }
}

/// A ring position paired with an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T> {
    /// Position on the ring.
    pub value: u32,
    /// Whatever owns this position.
    pub payload: T,
}

impl<T> Point<T> {
    /// Create a point at `value` owned by `payload`.
    pub fn new(value: u32, payload: T) -> Self {
        Self { value, payload }
    }
}

impl<T> RingEntry for Point<T> {
    fn value(&self) -> u32 {
        self.value
    }
}
