//! IEEE-754 bit-pattern extraction.
//!
//! These are reinterpretations of the native layout, not numeric conversions:
//! subnormals, infinities, signed zeros and NaN payloads come through
//! unchanged.

use crate::codec::{BitVector, Width, word_bits};
use crate::common::Word;
use crate::common::constants::LOW_HALF_MASK;

/// Binary32 pattern in the low 32 bits of a word; the high 32 bits are zero.
#[inline]
pub const fn float_word(f: f32) -> Word {
    ((f.to_bits() as u64) & LOW_HALF_MASK) as Word
}

/// Binary64 pattern read as a signed word.
#[inline]
pub const fn double_word(f: f64) -> Word {
    f.to_bits() as Word
}

/// Binary32 layout, left-padded with 32 zero bits to a 64-bit vector.
pub const fn f32_bit_vector(f: f32) -> BitVector {
    word_bits(float_word(f))
}

/// Binary32 layout as an unpadded 32-bit vector.
pub const fn f32_bit_vector_narrow(f: f32) -> BitVector {
    BitVector::from_raw(f.to_bits() as u64, Width::SINGLE)
}

/// Binary64 layout as a 64-bit vector.
pub const fn f64_bit_vector(f: f64) -> BitVector {
    word_bits(double_word(f))
}
