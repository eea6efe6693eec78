//! ALU status flags.
//!
//! Every operation returns the same two-field record. Logic, shift and
//! conversion operations always leave it clear; arithmetic sets `overflow`
//! when the exact result does not fit the word, and divide/modulo set
//! `divide_by_zero` instead of computing anything when the divisor is zero.
//!
//! | Field            | Raised by                               |
//! |------------------|-----------------------------------------|
//! | `overflow`       | negate, add, sub, mul, div, mod         |
//! | `divide_by_zero` | div, mod with a zero divisor            |

use serde::{Deserialize, Serialize};

use crate::common::Word;
use crate::config::FlagLayout;

/// Status bits produced alongside a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    /// The exact result did not fit in 64 bits.
    pub overflow: bool,
    /// The divisor was zero; no division was performed.
    pub divide_by_zero: bool,
}

impl Flags {
    /// No flags raised.
    pub const CLEAR: Self = Self {
        overflow: false,
        divide_by_zero: false,
    };

    /// Overflow only.
    pub const OVERFLOW: Self = Self {
        overflow: true,
        divide_by_zero: false,
    };

    /// Divide-by-zero only.
    pub const DIVIDE_BY_ZERO: Self = Self {
        overflow: false,
        divide_by_zero: true,
    };

    /// Returns [`Self::OVERFLOW`] if `overflow`, else [`Self::CLEAR`].
    #[inline]
    pub const fn overflow_if(overflow: bool) -> Self {
        Self {
            overflow,
            divide_by_zero: false,
        }
    }

    /// Returns true if no flags are set.
    #[inline]
    pub const fn is_clear(self) -> bool {
        !self.overflow && !self.divide_by_zero
    }

    /// Packs the flags into a byte according to `layout`.
    pub const fn pack(self, layout: &FlagLayout) -> u8 {
        ((self.overflow as u8) << layout.overflow_bit())
            | ((self.divide_by_zero as u8) << layout.divide_by_zero_bit())
    }

    /// Recovers flags from a byte packed with `layout`; other bits are ignored.
    pub const fn unpack(byte: u8, layout: &FlagLayout) -> Self {
        Self {
            overflow: (byte >> layout.overflow_bit()) & 1 == 1,
            divide_by_zero: (byte >> layout.divide_by_zero_bit()) & 1 == 1,
        }
    }
}

/// Result word together with its flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Result truncated to 64 bits and read as signed.
    pub value: Word,
    /// Status bits raised by the operation.
    pub flags: Flags,
}

impl Outcome {
    /// Outcome of a division or modulo by zero: zero with only `divide_by_zero` set.
    pub const DIVIDE_BY_ZERO: Self = Self {
        value: 0,
        flags: Flags::DIVIDE_BY_ZERO,
    };

    /// Result with clear flags.
    #[inline]
    pub const fn clear(value: Word) -> Self {
        Self {
            value,
            flags: Flags::CLEAR,
        }
    }

    /// Result with `overflow` set as given.
    #[inline]
    pub const fn overflowed(value: Word, overflow: bool) -> Self {
        Self {
            value,
            flags: Flags::overflow_if(overflow),
        }
    }

    /// Result bits reinterpreted as unsigned.
    #[inline]
    pub const fn unsigned_value(self) -> u64 {
        self.value as u64
    }

    /// Packed flag byte under `layout`.
    #[inline]
    pub const fn flag_word(self, layout: &FlagLayout) -> u8 {
        self.flags.pack(layout)
    }
}
