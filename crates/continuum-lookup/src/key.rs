//! Query keys and the conversion boundary into the `u32` key space.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A validated lookup key: a point in the unsigned 32-bit key space.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContinuumKey(u32);

impl ContinuumKey {
    /// Wrap a raw key.
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Return the raw key.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ContinuumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ContinuumKey {
    fn from(key: u32) -> Self {
        Self(key)
    }
}

impl From<u16> for ContinuumKey {
    fn from(key: u16) -> Self {
        Self(key.into())
    }
}

impl From<u8> for ContinuumKey {
    fn from(key: u8) -> Self {
        Self(key.into())
    }
}

impl From<ContinuumKey> for u32 {
    fn from(key: ContinuumKey) -> Self {
        key.0
    }
}

macro_rules! try_from_int {
    ($($ty:ty),* $(,)?) => {$(
        impl TryFrom<$ty> for ContinuumKey {
            type Error = LookupError;

            fn try_from(n: $ty) -> Result<Self, Self::Error> {
                u32::try_from(n)
                    .map(Self)
                    .map_err(|_| LookupError::OutOfRange { value: n as i128 })
            }
        }
    )*};
}

try_from_int!(i8, i16, i32, i64, i128, isize, u64, usize);

/// A number whose concrete type is only known at runtime.
///
/// This is what arrives at a loosely typed boundary (a scripting binding,
/// a JSON/TOML document): it deserializes from any numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A non-negative integer.
    Unsigned(u64),
    /// A negative integer.
    Signed(i64),
    /// A floating-point number.
    Float(f64),
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::Unsigned(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::Unsigned(n.into())
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Signed(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Signed(n.into())
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

impl TryFrom<Number> for ContinuumKey {
    type Error = LookupError;

    /// Floats are truncated toward zero; they must be finite and land inside
    /// the key range after truncation.
    fn try_from(number: Number) -> Result<Self, Self::Error> {
        match number {
            Number::Unsigned(n) => Self::try_from(n),
            Number::Signed(n) => Self::try_from(n),
            Number::Float(f) => {
                if !f.is_finite() {
                    return Err(LookupError::NotFinite { value: f });
                }
                let truncated = f.trunc();
                if truncated < 0.0 || truncated > f64::from(u32::MAX) {
                    return Err(LookupError::OutOfRange {
                        value: truncated as i128,
                    });
                }
                Ok(Self(truncated as u32))
            }
        }
    }
}
