//! Float/Double Reinterpretation Unit.
//!
//! Converts integer words to IEEE-754 binary32/binary64 values and reports the
//! resulting bit patterns as words. Floats never appear as operands; they only
//! exist as the output encoding of these conversions.
//!
//! Operations are organized into submodules:
//! - [`conversion`]: Signed/unsigned integer to float and double.
//! - [`encoding`]:   Bit-pattern extraction of native `f32`/`f64` values.

/// Integer to binary32/binary64 conversion.
pub mod conversion;

/// IEEE-754 bit-pattern extraction.
pub mod encoding;

use crate::common::{Signedness, Word};
use crate::op::AluOp;
use crate::units::alu::Outcome;

/// Floating-point conversion unit.
///
/// Implements the integer to single/double precision conversions of the ALU
/// operation table. Every conversion rounds to nearest, ties to even, and
/// leaves both flags clear.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fpu;

impl Fpu {
    /// Executes a conversion operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The conversion to perform
    /// * `a`  - The integer operand
    ///
    /// # Returns
    ///
    /// The converted value's bit pattern as a word with clear flags. A binary32
    /// pattern occupies the low 32 bits with the high 32 bits zero. Returns a
    /// clear zero outcome for non-conversion operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use alu64_core::AluOp;
    /// use alu64_core::units::fpu::Fpu;
    ///
    /// let out = Fpu::execute(AluOp::SignedToFloat, -1);
    /// assert_eq!(out.value, 0xBF80_0000);
    ///
    /// let out = Fpu::execute(AluOp::SignedToDouble, 1);
    /// assert_eq!(out.value as u64, 1.0_f64.to_bits());
    /// ```
    pub const fn execute(op: AluOp, a: Word) -> Outcome {
        let value = match op {
            AluOp::UnsignedToFloat => conversion::int_to_float(a, Signedness::Unsigned),
            AluOp::SignedToFloat => conversion::int_to_float(a, Signedness::Signed),
            AluOp::UnsignedToDouble => conversion::int_to_double(a, Signedness::Unsigned),
            AluOp::SignedToDouble => conversion::int_to_double(a, Signedness::Signed),
            _ => 0,
        };
        Outcome::clear(value)
    }
}
