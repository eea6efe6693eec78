//! Word-size constants.

/// Number of bits in a machine word.
pub const WORD_BITS: u32 = 64;

/// Bit mask selecting the low 32 bits of a word (a zero-extended binary32 field).
pub const LOW_HALF_MASK: u64 = 0x0000_0000_FFFF_FFFF;
