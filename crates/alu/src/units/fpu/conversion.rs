//! Integer to floating-point conversion.
//!
//! Rust's `as` casts from integers to floats round to nearest, ties to even,
//! which is the IEEE-754 default this model requires. Every 64-bit integer is
//! within binary32/binary64 range, so no conversion overflows to infinity.

use super::encoding::{double_word, float_word};
use crate::common::{Signedness, Word};

/// Converts `a`, read under `signedness`, to the nearest binary32 value.
pub const fn to_f32(a: Word, signedness: Signedness) -> f32 {
    match signedness {
        Signedness::Signed => a as f32,
        Signedness::Unsigned => a as u64 as f32,
    }
}

/// Converts `a`, read under `signedness`, to the nearest binary64 value.
pub const fn to_f64(a: Word, signedness: Signedness) -> f64 {
    match signedness {
        Signedness::Signed => a as f64,
        Signedness::Unsigned => a as u64 as f64,
    }
}

/// Integer to float: the binary32 pattern zero-extended into a word.
pub const fn int_to_float(a: Word, signedness: Signedness) -> Word {
    float_word(to_f32(a, signedness))
}

/// Integer to double: the binary64 pattern read as a signed word.
pub const fn int_to_double(a: Word, signedness: Signedness) -> Word {
    double_word(to_f64(a, signedness))
}
