//! Common types and constants shared by every unit of the ALU model.
//!
//! This module provides the fundamental building blocks used across the crate:
//! 1. **Word Types:** The 64-bit two's-complement operand type and its wide companion.
//! 2. **Constants:** Word width and the binary32 field mask.
//! 3. **Error Handling:** Range, arity and configuration error types.

/// Word-size constants.
pub mod constants;

/// Error types for codec range violations, operand arity and configuration.
pub mod error;

/// Word and signedness definitions.
pub mod word;

pub use constants::WORD_BITS;
pub use error::{AluError, ConfigError, RangeError};
pub use word::{Signedness, Wide, Word};
