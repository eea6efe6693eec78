//! Bit-vector codec.
//!
//! Converts between words and their ordered bit representation (most
//! significant bit first) and reduces exact integers to their two's-complement
//! residue at a given width. Operations are organized into submodules:
//! - [`width`]:    Validated bit widths and their range boundaries.
//! - [`bits`]:     The [`BitVector`] type and its shift/rotate primitives.
//! - [`truncate`](mod@truncate): Wraparound of exact results to a word.

/// Bit vector type and width-local shift/rotate primitives.
pub mod bits;

/// Two's-complement truncation.
pub mod truncate;

/// Validated bit widths.
pub mod width;

pub use bits::BitVector;
pub use truncate::{truncate, truncate_to};
pub use width::Width;

use crate::common::{RangeError, Signedness, Wide, Word};

/// Encodes `value` as a `width`-bit vector.
///
/// Both interpretations produce the identical two's-complement bit pattern;
/// only the accepted input range differs.
///
/// # Errors
///
/// Returns [`RangeError::Value`] when `value` lies outside
/// `0..=2^width-1` (unsigned) or `-2^(width-1)..=2^(width-1)-1` (signed).
pub fn to_bits(value: Wide, width: Width, signedness: Signedness) -> Result<BitVector, RangeError> {
    let (lo, hi) = match signedness {
        Signedness::Signed => (width.signed_min(), width.signed_max()),
        Signedness::Unsigned => (0, width.unsigned_max()),
    };
    if value < lo || value > hi {
        tracing::debug!(%value, width = width.bits(), %signedness, "value outside encodable range");
        return Err(RangeError::Value {
            value,
            width: width.bits(),
            signedness,
        });
    }
    Ok(BitVector::from_raw(value as u64, width))
}

/// Encodes a word as a 64-bit vector under `signedness`.
///
/// A word always fits the signed encoding. Under the unsigned encoding the
/// word's magnitude must be non-negative; use [`unsigned_of`] first to encode
/// the unsigned reinterpretation of a negative word.
///
/// # Errors
///
/// Returns [`RangeError::Value`] for a negative word encoded as unsigned.
pub fn to_bits64(word: Word, signedness: Signedness) -> Result<BitVector, RangeError> {
    to_bits(word as Wide, Width::WORD, signedness)
}

/// Returns the bit vector of a word's two's-complement pattern.
///
/// Infallible counterpart of [`to_bits64`] used by the execution units, whose
/// operands are valid words by construction.
#[inline]
pub const fn word_bits(word: Word) -> BitVector {
    BitVector::from_raw(word as u64, Width::WORD)
}

/// Decodes a bit vector as an unsigned magnitude.
///
/// Each set bit at index `i` contributes `2^(width-1-i)`.
pub fn from_bits_unsigned(bits: &BitVector) -> u64 {
    bits.iter().fold(0, |acc, bit| (acc << 1) | u64::from(bit))
}

/// Decodes a bit vector as a two's-complement signed value.
///
/// Bit 0 contributes `-2^(width-1)` when set; the remaining bits contribute
/// positively.
pub fn from_bits_signed(bits: &BitVector) -> i64 {
    let shift = 64 - bits.width().bits();
    ((from_bits_unsigned(bits) << shift) as i64) >> shift
}

/// Reinterprets a word's bit pattern as an unsigned magnitude.
#[inline]
pub const fn unsigned_of(word: Word) -> u64 {
    word as u64
}
