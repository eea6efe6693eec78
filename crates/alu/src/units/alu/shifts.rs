//! ALU shift and rotate operations.
//!
//! Implements logical shift left/right, rotate left/right and arithmetic shift
//! right. The shift amount is a full signed word: it may be negative, which
//! reverses the direction, or exceed the word width.
//!
//! Unlike a masked hardware shifter, amounts are never reduced modulo 64 for
//! shifts: any `|n| >= 64` shifts every bit out. Rotates do reduce modulo 64.
//! Right-hand forms are defined through their left-hand duals (`SHR(x, n) =
//! SHL(x, -n)`, `ROTL(x, n) = ROTR(x, -n)`). Negating `i64::MIN` wraps to
//! itself, which is harmless: `2^63` and `-2^63` agree modulo 64 and both
//! exceed the width. Flags are always clear.

use super::flags::Outcome;
use crate::codec::{from_bits_signed, word_bits};
use crate::common::Word;
use crate::op::AluOp;

/// Logical shift left by `n`; negative `n` shifts right.
pub fn shl(a: Word, n: Word) -> Outcome {
    Outcome::clear(from_bits_signed(&word_bits(a).shifted_left(n)))
}

/// Logical shift right by `n`; negative `n` shifts left.
pub fn shr(a: Word, n: Word) -> Outcome {
    shl(a, n.wrapping_neg())
}

/// Rotate right by `n`, any `n`.
pub fn rotr(a: Word, n: Word) -> Outcome {
    Outcome::clear(from_bits_signed(&word_bits(a).rotated_right(n)))
}

/// Rotate left by `n`, any `n`.
pub fn rotl(a: Word, n: Word) -> Outcome {
    rotr(a, n.wrapping_neg())
}

/// Arithmetic shift right by `n`.
///
/// `n >= 64` yields `0` or `-1` by the sign of `a`; `n <= -64` yields `0`;
/// `-64 < n < 0` is a zero-filling left shift by `|n|`.
pub fn ashr(a: Word, n: Word) -> Outcome {
    Outcome::clear(from_bits_signed(&word_bits(a).shifted_right_arithmetic(n)))
}

/// Executes a shift or rotate operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift/rotate variant).
/// * `a`  - The value to be shifted.
/// * `n`  - The signed shift amount.
///
/// # Returns
///
/// The shifted word with clear flags. Returns a clear zero outcome for
/// non-shift operations.
pub fn execute(op: AluOp, a: Word, n: Word) -> Outcome {
    match op {
        AluOp::Shl => shl(a, n),
        AluOp::Shr => shr(a, n),
        AluOp::Rotl => rotl(a, n),
        AluOp::Rotr => rotr(a, n),
        AluOp::Ashr => ashr(a, n),
        _ => Outcome::default(),
    }
}
