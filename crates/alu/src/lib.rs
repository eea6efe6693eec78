//! Bit-exact 64-bit ALU reference model.
//!
//! This crate predicts, for every supported operation, the exact result word and
//! status flags a hardware 64-bit integer ALU must produce. It provides:
//! 1. **Common:** The `Word` type, signedness selector, constants and error types.
//! 2. **Codec:** Conversion between words and MSB-first bit vectors, plus truncation.
//! 3. **ALU:** Logic, shift/rotate and integer arithmetic units with uniform flags.
//! 4. **FPU:** Integer to IEEE-754 single/double bit-pattern conversion.
//! 5. **Configuration:** The packed flag layout used by vector generators.
//!
//! Every operation is a pure function: no global state, no I/O, safe to call
//! from any number of threads.

/// Common types and constants (word, signedness, errors).
pub mod common;
/// Flag wire-layout configuration.
pub mod config;
/// Bit-vector codec and two's-complement truncation.
pub mod codec;
/// Operation catalogue (mnemonics, arity, operation class).
pub mod op;
/// Execution units (integer ALU and float reinterpretation unit).
pub mod units;

/// Word type and signedness selector; the operand currency of every unit.
pub use crate::common::{Signedness, Word};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// MSB-first bit vector produced by the codec.
pub use crate::codec::BitVector;
/// Operation enumeration accepted by [`Alu::execute`].
pub use crate::op::AluOp;
/// Integer ALU dispatcher together with its result record.
pub use crate::units::alu::{Alu, Flags, Outcome};
