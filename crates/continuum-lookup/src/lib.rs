//! Key lookup on a sorted consistent-hashing continuum.
//!
//! A continuum is a slice of entries sorted by their `u32` ring position
//! (typically many points per server, built and hashed by the caller). This
//! crate answers a single question: given a hashed key, which slot does it
//! land on?
//!
//! - [`search`] — binary search returning the exact index, the predecessor
//!   index, or `-1` when the key precedes every entry.
//! - [`locate`] — the same search returning a typed [`Position`].
//! - [`search_number`] — converts a loosely typed [`Number`] into a
//!   [`ContinuumKey`] first, failing with [`LookupError`] if it does not fit.
//! - [`Continuum`] — a borrowed view that resolves the wraparound and hands
//!   back the owning entry.
//!
//! Lookups only read the slice: they allocate nothing, hold no state and can
//! run from any number of threads against the same entries.

mod continuum;
mod entry;
mod error;
mod key;
mod lookup;


pub use continuum::Continuum;
pub use entry::{Point, RingEntry};
pub use error::LookupError;
pub use key::{ContinuumKey, Number};
pub use lookup::{Position, locate, search, search_number};
