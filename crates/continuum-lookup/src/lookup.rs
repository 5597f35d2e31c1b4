//! Binary search of a key on a sorted continuum.

use tracing::debug;

use crate::entry::RingEntry;
use crate::error::LookupError;
use crate::key::{ContinuumKey, Number};

/// Where a key landed on a continuum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The key is below every entry (or the continuum is empty).
    ///
    /// On a ring this wraps around to the last entry.
    BeforeFirst,
    /// An entry with exactly this value sits at the index.
    Exact(usize),
    /// No exact match; the index is the last entry whose value is below the key.
    Predecessor(usize),
}

impl Position {
    /// Integer form of the position: `-1` for [`Position::BeforeFirst`],
    /// otherwise the entry index.
    pub fn index(self) -> isize {
        match self {
            Position::BeforeFirst => -1,
            // Slices of sized entries never hold more than `isize::MAX` elements.
            Position::Exact(i) | Position::Predecessor(i) => i as isize,
        }
    }

    /// Resolve the position to a concrete slot on a ring of `len` entries,
    /// wrapping [`Position::BeforeFirst`] around to the last entry.
    ///
    /// Returns `None` only when `len == 0`.
    pub fn slot(self, len: usize) -> Option<usize> {
        match self {
            Position::BeforeFirst => len.checked_sub(1),
            Position::Exact(i) | Position::Predecessor(i) => Some(i),
        }
    }

    /// Whether an entry with exactly the searched value was found.
    pub fn is_exact(self) -> bool {
        matches!(self, Position::Exact(_))
    }
}

/// Locate `key` on `entries`, which must be sorted ascending by value.
///
/// Classic inclusive-bounds binary search: the midpoint is
/// `floor((lower + upper) / 2)`, the first equal entry met on the search path
/// wins, and a miss reports the predecessor slot. With duplicate values the
/// returned exact index is whichever duplicate the probe sequence hits first.
///
/// Unsorted input is not detected. The result is still deterministic and
/// follows the same probe sequence, it just may not mean "nearest".
pub fn locate<E: RingEntry>(entries: &[E], key: impl Into<ContinuumKey>) -> Position {
    let key = key.into().get();

    // `upper_excl` is the inclusive upper bound plus one, so an upper bound
    // of -1 needs no signed arithmetic and `lower + upper` cannot overflow.
    let mut lower = 0usize;
    let mut upper_excl = entries.len();

    while lower < upper_excl {
        let idx = lower + (upper_excl - 1 - lower) / 2;
        let value = entries[idx].value();

        if value == key {
            return Position::Exact(idx);
        } else if value > key {
            upper_excl = idx;
        } else {
            lower = idx + 1;
        }
    }

    match upper_excl {
        0 => Position::BeforeFirst,
        n => Position::Predecessor(n - 1),
    }
}

/// Search `key` on `entries` and return the integer index in `[-1, len - 1]`.
///
/// `-1` means the key precedes every entry (including the empty case);
/// callers on a ring treat it as wrapping to the last entry.
pub fn search<E: RingEntry>(entries: &[E], key: impl Into<ContinuumKey>) -> isize {
    locate(entries, key).index()
}

/// Convert a loosely typed number into a key, then [`search`].
///
/// The conversion runs once, before any entry is read; an out-of-range or
/// non-finite number is returned to the caller as-is.
pub fn search_number<E: RingEntry>(
    entries: &[E],
    number: impl Into<Number>,
) -> Result<isize, LookupError> {
    let number = number.into();
    let key = ContinuumKey::try_from(number).inspect_err(|e| {
        debug!(?number, error = %e, "rejected continuum query");
    })?;
    Ok(search(entries, key))
}
