//! Two's-complement truncation.
//!
//! Arithmetic is first carried out exactly in the wide domain and then reduced
//! here, so overflow is detected by comparing the reduced value with the exact
//! one.

use super::width::Width;
use crate::common::{Wide, Word};

/// Reduces an exact integer to its 64-bit two's-complement representative.
///
/// Equivalent to taking the unsigned residue modulo `2^64` and reinterpreting
/// it as signed. Never fails.
#[inline]
pub const fn truncate(value: Wide) -> Word {
    value as Word
}

/// Reduces an exact integer to its `width`-bit two's-complement representative,
/// sign-extended to a word.
#[inline]
pub const fn truncate_to(value: Wide, width: Width) -> Word {
    let shift = Wide::BITS - width.bits();
    ((value << shift) >> shift) as Word
}
