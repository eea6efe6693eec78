//! Execution units.
//!
//! - [`alu`]: Integer logic, shift/rotate and arithmetic, plus the dispatcher.
//! - [`fpu`]: Integer to IEEE-754 bit-pattern conversion.

/// Integer arithmetic logic unit.
pub mod alu;

/// Float/double reinterpretation unit.
pub mod fpu;
