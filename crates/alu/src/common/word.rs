//! Word and signedness definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 64-bit two's-complement machine word.
///
/// This is the canonical operand and result representation. Unsigned
/// operations reinterpret the same 64 bits as a magnitude in `0..2^64`.
pub type Word = i64;

/// Exact mathematical integer used before truncation to a [`Word`].
///
/// Every signed or unsigned sum, difference, quotient and remainder of two
/// words, and every signed product, fits in 128 bits.
pub type Wide = i128;

/// Interpretation applied to a word's bit pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
    /// Two's-complement signed interpretation (`-2^63..=2^63-1`).
    #[default]
    Signed,
    /// Unsigned magnitude interpretation (`0..=2^64-1`).
    Unsigned,
}

impl Signedness {
    /// Widens `word` into the exact integer it denotes under this interpretation.
    #[inline]
    pub const fn widen(self, word: Word) -> Wide {
        match self {
            Self::Signed => word as Wide,
            Self::Unsigned => word as u64 as Wide,
        }
    }
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => write!(f, "signed"),
            Self::Unsigned => write!(f, "unsigned"),
        }
    }
}
