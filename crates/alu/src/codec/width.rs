//! Validated bit widths.

use std::fmt;

use crate::common::{RangeError, WORD_BITS, Wide};

/// A bit width in `1..=64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Width(u32);

impl Width {
    /// Full machine word (64 bits).
    pub const WORD: Self = Self(WORD_BITS);

    /// IEEE-754 binary32 field (32 bits).
    pub const SINGLE: Self = Self(32);

    /// Creates a width, rejecting zero and anything wider than a word.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Width`] if `bits` is outside `1..=64`.
    pub const fn new(bits: u32) -> Result<Self, RangeError> {
        if bits == 0 || bits > WORD_BITS {
            return Err(RangeError::Width(bits));
        }
        Ok(Self(bits))
    }

    /// Number of bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Mask selecting the low `bits` bits of a `u64`.
    #[inline]
    pub const fn mask(self) -> u64 {
        u64::MAX >> (WORD_BITS - self.0)
    }

    /// Largest unsigned value, `2^bits - 1`.
    #[inline]
    pub const fn unsigned_max(self) -> Wide {
        self.mask() as Wide
    }

    /// Smallest signed value, `-2^(bits-1)`.
    #[inline]
    pub const fn signed_min(self) -> Wide {
        -(1 << (self.0 - 1))
    }

    /// Largest signed value, `2^(bits-1) - 1`.
    #[inline]
    pub const fn signed_max(self) -> Wide {
        (1 << (self.0 - 1)) - 1
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::WORD
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
