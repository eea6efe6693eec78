//! ALU logical operations.
//!
//! Implements bitwise AND, OR, NOR, XOR, NAND, XNOR and NOT. Each operand is
//! taken through the codec as a 64-bit two's-complement pattern, combined bit
//! by bit and decoded back as signed. Flags are always clear.

use super::flags::Outcome;
use crate::codec::{BitVector, from_bits_signed, word_bits};
use crate::common::Word;
use crate::op::AluOp;

fn combine(a: Word, b: Word, f: impl FnOnce(BitVector, BitVector) -> BitVector) -> Outcome {
    Outcome::clear(from_bits_signed(&f(word_bits(a), word_bits(b))))
}

/// Bitwise AND.
pub fn and(a: Word, b: Word) -> Outcome {
    combine(a, b, |x, y| x & y)
}

/// Bitwise OR.
pub fn or(a: Word, b: Word) -> Outcome {
    combine(a, b, |x, y| x | y)
}

/// Bitwise NOR.
pub fn nor(a: Word, b: Word) -> Outcome {
    combine(a, b, |x, y| !(x | y))
}

/// Bitwise XOR.
pub fn xor(a: Word, b: Word) -> Outcome {
    combine(a, b, |x, y| x ^ y)
}

/// Bitwise NAND.
pub fn nand(a: Word, b: Word) -> Outcome {
    combine(a, b, |x, y| !(x & y))
}

/// Bitwise XNOR.
pub fn xnor(a: Word, b: Word) -> Outcome {
    combine(a, b, |x, y| !(x ^ y))
}

/// Bitwise NOT.
pub fn not(a: Word) -> Outcome {
    Outcome::clear(from_bits_signed(&!word_bits(a)))
}

/// Executes a logical operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logical variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Not`).
///
/// # Returns
///
/// The result with clear flags. Returns a clear zero outcome for non-logic
/// operations.
pub fn execute(op: AluOp, a: Word, b: Word) -> Outcome {
    match op {
        AluOp::And => and(a, b),
        AluOp::Or => or(a, b),
        AluOp::Nor => nor(a, b),
        AluOp::Xor => xor(a, b),
        AluOp::Nand => nand(a, b),
        AluOp::Xnor => xnor(a, b),
        AluOp::Not => not(a),
        _ => Outcome::default(),
    }
}
