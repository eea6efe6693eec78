//! Error definitions.
//!
//! The model has exactly one class of contract violation at the arithmetic
//! boundary: asking the codec for an encoding the requested width cannot hold.
//! Overflow and divide-by-zero are never errors; they are reported through
//! [`Flags`](crate::units::alu::Flags). The remaining errors cover dispatch
//! arity and configuration parsing.

use thiserror::Error;

use super::word::{Signedness, Wide};
use crate::op::AluOp;

/// Codec range violation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The value cannot be encoded in `width` bits under `signedness`.
    #[error("{value} cannot be encoded as a {width}-bit {signedness} integer")]
    Value {
        /// Value the caller attempted to encode.
        value: Wide,
        /// Requested width in bits.
        width: u32,
        /// Requested interpretation.
        signedness: Signedness,
    },

    /// The requested width is outside `1..=64`.
    #[error("unsupported bit width {0} (expected 1..=64)")]
    Width(u32),
}

/// Dispatch error raised by [`Alu::evaluate`](crate::units::alu::Alu::evaluate).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// The operand count does not match the operation's arity.
    #[error("{op} takes {expected} operand(s), got {actual}")]
    Arity {
        /// Operation that was requested.
        op: AluOp,
        /// Operand count the operation takes.
        expected: usize,
        /// Operand count that was supplied.
        actual: usize,
    },
}

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The flag layout places a flag outside the flag byte or two flags on one bit.
    #[error("invalid flag layout: overflow bit {overflow_bit}, divide-by-zero bit {divide_by_zero_bit}")]
    Layout {
        /// Configured overflow bit position.
        overflow_bit: u8,
        /// Configured divide-by-zero bit position.
        divide_by_zero_bit: u8,
    },
}
