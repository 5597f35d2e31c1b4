//! Read-only view over a caller-owned sorted continuum.

use tracing::{debug, trace};

use crate::entry::RingEntry;
use crate::error::LookupError;
use crate::key::ContinuumKey;
use crate::lookup::{Position, locate};

/// A borrowed, sorted continuum of ring entries.
///
/// The view never builds, sorts or mutates the entries; the owner rebuilds
/// its slice and hands out a fresh view. Holding a `Continuum` keeps the
/// slice borrowed, so it cannot change under an in-flight lookup.
#[derive(Debug)]
pub struct Continuum<'a, E> {
    entries: &'a [E],
}

// Manual impls: a view is copyable whatever `E` is.
impl<E> Clone for Continuum<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Continuum<'_, E> {}

impl<'a, E: RingEntry> Continuum<'a, E> {
    /// Wrap `entries` without checking their order.
    pub fn new(entries: &'a [E]) -> Self {
        Self { entries }
    }

    /// Wrap `entries` after checking they are sorted ascending by value.
    ///
    /// This is a single O(n) pass, meant for when a continuum is (re)built,
    /// not for every lookup.
    pub fn checked(entries: &'a [E]) -> Result<Self, LookupError> {
        if let Some(pos) = entries
            .windows(2)
            .position(|w| w[0].value() > w[1].value())
        {
            let index = pos + 1;
            debug!(index, len = entries.len(), "rejected unsorted continuum");
            return Err(LookupError::Unsorted { index });
        }
        Ok(Self { entries })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the continuum has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The underlying entries.
    pub fn entries(&self) -> &'a [E] {
        self.entries
    }

    /// Locate `key` on the continuum. See [`locate`].
    pub fn locate(&self, key: impl Into<ContinuumKey>) -> Position {
        let key = key.into();
        let position = locate(self.entries, key);
        trace!(%key, ?position, "continuum lookup");
        position
    }

    /// Integer index of `key`, in `[-1, len - 1]`. See [`search`](crate::search).
    pub fn search(&self, key: impl Into<ContinuumKey>) -> isize {
        self.locate(key).index()
    }

    /// The entry that owns `key`.
    ///
    /// This is the exact match or the predecessor; a key below the first
    /// entry wraps around to the last one. `None` only if the continuum is
    /// empty.
    pub fn entry_for(&self, key: impl Into<ContinuumKey>) -> Option<&'a E> {
        let slot = self.locate(key).slot(self.entries.len())?;
        self.entries.get(slot)
    }
}
