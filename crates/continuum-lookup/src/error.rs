//! Error types for continuum lookups.

/// Errors raised at the boundaries of a lookup.
///
/// The search itself is total; these only come from converting a query into
/// a [`ContinuumKey`](crate::ContinuumKey) or from validating a slice in
/// [`Continuum::checked`](crate::Continuum::checked).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    /// Integer query does not fit in the unsigned 32-bit key space.
    #[error("query {value} is outside the key range 0..={max}", max = u32::MAX)]
    OutOfRange {
        /// The rejected value.
        value: i128,
    },

    /// Float query is NaN or infinite.
    #[error("query {value} is not a finite number")]
    NotFinite {
        /// The rejected value.
        value: f64,
    },

    /// Entries are not in ascending order.
    #[error("continuum is not sorted: entry {index} is smaller than its predecessor")]
    Unsorted {
        /// Index of the first entry whose value is below its predecessor's.
        index: usize,
    },
}
