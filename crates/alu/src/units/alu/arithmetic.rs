//! ALU arithmetic operations.
//!
//! Implements negation, addition, subtraction, multiplication, division and
//! modulo in signed and unsigned variants.
//!
//! Each operation computes the exact mathematical result in the wide (`i128`)
//! domain, truncates it to 64 bits and raises `overflow` iff the truncated
//! value, read back under the same signedness, differs from the exact one.
//! Unsigned results are returned with their bits read as signed.
//!
//! Division and modulo use floor semantics: signed quotients round toward
//! negative infinity and signed remainders take the sign of the divisor. A zero
//! divisor short-circuits to `(0, divide_by_zero)`, so the two flags are never
//! raised together.

use super::flags::Outcome;
use crate::codec::truncate;
use crate::common::{Signedness, Wide, Word};
use crate::op::AluOp;

/// Truncates `exact` and flags overflow if it did not fit under `signedness`.
const fn settle(exact: Wide, signedness: Signedness) -> Outcome {
    let value = truncate(exact);
    Outcome::overflowed(value, signedness.widen(value) != exact)
}

/// Floor division; `y` must be non-zero.
const fn floor_div(x: Wide, y: Wide) -> Wide {
    let q = x / y;
    if x % y != 0 && (x < 0) != (y < 0) { q - 1 } else { q }
}

/// Floor modulo; `y` must be non-zero. The result has the sign of `y`.
const fn floor_mod(x: Wide, y: Wide) -> Wide {
    let r = x % y;
    if r != 0 && (r < 0) != (y < 0) { r + y } else { r }
}

/// Two's-complement negation.
///
/// `-2^63` has no positive counterpart: the input is returned unchanged with
/// `overflow` set.
pub const fn negate(a: Word) -> Outcome {
    settle(-(a as Wide), Signedness::Signed)
}

/// Addition under `signedness`.
pub const fn add(a: Word, b: Word, signedness: Signedness) -> Outcome {
    settle(signedness.widen(a) + signedness.widen(b), signedness)
}

/// Subtraction under `signedness`.
///
/// An unsigned difference below zero does not fit and raises `overflow`.
pub const fn sub(a: Word, b: Word, signedness: Signedness) -> Outcome {
    settle(signedness.widen(a) - signedness.widen(b), signedness)
}

/// Multiplication under `signedness`.
pub const fn mul(a: Word, b: Word, signedness: Signedness) -> Outcome {
    match signedness {
        Signedness::Signed => settle(a as Wide * b as Wide, signedness),
        Signedness::Unsigned => {
            // (2^64 - 1)^2 exceeds i128, so the unsigned product is kept in u128.
            let exact = (a as u64 as u128) * (b as u64 as u128);
            Outcome::overflowed(exact as u64 as Word, exact > u64::MAX as u128)
        }
    }
}

/// Division under `signedness`, rounding toward negative infinity.
///
/// Only `-2^63 / -1` overflows; it wraps back to `-2^63`.
pub const fn div(a: Word, b: Word, signedness: Signedness) -> Outcome {
    if b == 0 {
        return Outcome::DIVIDE_BY_ZERO;
    }
    settle(floor_div(signedness.widen(a), signedness.widen(b)), signedness)
}

/// Modulo under `signedness`; a signed remainder takes the sign of the divisor.
pub const fn modulo(a: Word, b: Word, signedness: Signedness) -> Outcome {
    if b == 0 {
        return Outcome::DIVIDE_BY_ZERO;
    }
    settle(floor_mod(signedness.widen(a), signedness.widen(b)), signedness)
}

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Negate`).
///
/// # Returns
///
/// The truncated result and its flags. Returns a clear zero outcome for
/// non-arithmetic operations.
pub const fn execute(op: AluOp, a: Word, b: Word) -> Outcome {
    match op {
        AluOp::Negate => negate(a),
        AluOp::UnsignedAdd => add(a, b, Signedness::Unsigned),
        AluOp::SignedAdd => add(a, b, Signedness::Signed),
        AluOp::UnsignedSub => sub(a, b, Signedness::Unsigned),
        AluOp::SignedSub => sub(a, b, Signedness::Signed),
        AluOp::UnsignedMul => mul(a, b, Signedness::Unsigned),
        AluOp::SignedMul => mul(a, b, Signedness::Signed),
        AluOp::UnsignedDiv => div(a, b, Signedness::Unsigned),
        AluOp::UnsignedMod => modulo(a, b, Signedness::Unsigned),
        AluOp::SignedDiv => div(a, b, Signedness::Signed),
        AluOp::SignedMod => modulo(a, b, Signedness::Signed),
        _ => Outcome::clear(0),
    }
}
