//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 64-bit integer ALU reference model. It computes
//! the exact result word and status flags for bitwise logic, shifts and
//! rotates, and signed/unsigned integer arithmetic, and forwards
//! integer-to-float conversions to the [`fpu`](crate::units::fpu).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Negate, Add, Sub, Mul, Div, Mod (signed and unsigned)
//! - [`logic`]:      And, Or, Nor, Xor, Nand, Xnor, Not
//! - [`shifts`]:     Shl, Shr, Rotl, Rotr, Ashr
//! - [`flags`]:      The uniform [`Flags`] / [`Outcome`] result record

/// Integer arithmetic operations (negate, add, subtract, multiply, divide, modulo).
pub mod arithmetic;

/// Status flags and the result record.
pub mod flags;

/// Bitwise logical operations.
pub mod logic;

/// Shift and rotate operations.
pub mod shifts;

pub use flags::{Flags, Outcome};

use crate::common::{AluError, Word};
use crate::op::{AluOp, Arity};
use crate::units::fpu::Fpu;

/// Arithmetic Logic Unit (ALU) reference model.
///
/// Stateless: every call is a pure function of its operands, so a single
/// `Alu` can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand, or the signed shift amount; ignored by unary operations
    ///
    /// # Returns
    ///
    /// The result word truncated to 64 bits together with its flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use alu64_core::{Alu, AluOp, Flags};
    ///
    /// // Signed overflow wraps and raises the flag
    /// let out = Alu::execute(AluOp::SignedAdd, i64::MAX, 1);
    /// assert_eq!(out.value, i64::MIN);
    /// assert!(out.flags.overflow);
    ///
    /// // Division by zero never divides
    /// let out = Alu::execute(AluOp::UnsignedDiv, 10, 0);
    /// assert_eq!(out.value, 0);
    /// assert_eq!(out.flags, Flags::DIVIDE_BY_ZERO);
    ///
    /// // Shift amounts are not masked
    /// assert_eq!(Alu::execute(AluOp::Shl, 1, 63).value, i64::MIN);
    /// assert_eq!(Alu::execute(AluOp::Shl, 1, 64).value, 0);
    ///
    /// // Rotation wraps the low bit into the sign position
    /// assert_eq!(Alu::execute(AluOp::Rotr, 1, 1).value, i64::MIN);
    ///
    /// // Signed floor division rounds toward negative infinity
    /// assert_eq!(Alu::execute(AluOp::SignedDiv, -7, 2).value, -4);
    /// ```
    pub fn execute(op: AluOp, a: Word, b: Word) -> Outcome {
        let outcome = match op {
            // Logic: and, or, nor, xor, nand, xnor, not
            AluOp::And
            | AluOp::Or
            | AluOp::Nor
            | AluOp::Xor
            | AluOp::Nand
            | AluOp::Xnor
            | AluOp::Not => logic::execute(op, a, b),

            // Shifts and rotates: shl, shr, rotl, rotr, ashr
            AluOp::Shl | AluOp::Shr | AluOp::Rotl | AluOp::Rotr | AluOp::Ashr => {
                shifts::execute(op, a, b)
            }

            // Arithmetic: negate, add, sub, mul, div, mod
            AluOp::Negate
            | AluOp::UnsignedAdd
            | AluOp::SignedAdd
            | AluOp::UnsignedSub
            | AluOp::SignedSub
            | AluOp::UnsignedMul
            | AluOp::SignedMul
            | AluOp::UnsignedDiv
            | AluOp::UnsignedMod
            | AluOp::SignedDiv
            | AluOp::SignedMod => arithmetic::execute(op, a, b),

            // Integer to float/double bit patterns
            AluOp::UnsignedToFloat
            | AluOp::SignedToFloat
            | AluOp::UnsignedToDouble
            | AluOp::SignedToDouble => Fpu::execute(op, a),
        };

        tracing::trace!(
            %op,
            a,
            b,
            value = outcome.value,
            overflow = outcome.flags.overflow,
            divide_by_zero = outcome.flags.divide_by_zero,
            "alu"
        );
        if !outcome.flags.is_clear() {
            tracing::debug!(%op, a, b, flags = ?outcome.flags, "alu raised status flags");
        }
        outcome
    }

    /// Executes a unary operation (`Not`, `Negate`, conversions).
    #[inline]
    pub fn execute_unary(op: AluOp, a: Word) -> Outcome {
        Self::execute(op, a, 0)
    }

    /// Executes an operation on an operand slice, checking its length.
    ///
    /// # Errors
    ///
    /// Returns [`AluError::Arity`] when `operands.len()` differs from the
    /// operation's arity.
    pub fn evaluate(op: AluOp, operands: &[Word]) -> Result<Outcome, AluError> {
        match (op.arity(), operands) {
            (Arity::Unary, &[a]) => Ok(Self::execute_unary(op, a)),
            (Arity::Binary, &[a, b]) => Ok(Self::execute(op, a, b)),
            (arity, _) => Err(AluError::Arity {
                op,
                expected: arity.operands(),
                actual: operands.len(),
            }),
        }
    }
}
