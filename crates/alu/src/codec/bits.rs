//! MSB-first bit vectors.
//!
//! A [`BitVector`] stores its pattern in the low `width` bits of a `u64` but is
//! indexed from the most significant end: index 0 is the sign bit and index
//! `width - 1` is the least significant bit. The shift and rotate primitives
//! below follow that numbering, so "moving a bit from index `i` to `i - n`" is
//! a left shift.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Index, Not};

use super::width::Width;
use crate::common::{RangeError, Word};

/// Fixed-width, MSB-first sequence of bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitVector {
    raw: u64,
    width: Width,
}

impl BitVector {
    /// All-zero vector of the given width.
    #[inline]
    pub const fn zeros(width: Width) -> Self {
        Self { raw: 0, width }
    }

    /// All-one vector of the given width.
    #[inline]
    pub const fn ones(width: Width) -> Self {
        Self {
            raw: width.mask(),
            width,
        }
    }

    /// Builds a vector from the low `width` bits of `raw`; higher bits are dropped.
    #[inline]
    pub(crate) const fn from_raw(raw: u64, width: Width) -> Self {
        Self {
            raw: raw & width.mask(),
            width,
        }
    }

    /// Builds a vector from bits listed most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Width`] if the slice is empty or longer than 64.
    pub fn from_msb_first(bits: &[bool]) -> Result<Self, RangeError> {
        let width = Width::new(u32::try_from(bits.len()).unwrap_or(u32::MAX))?;
        let raw = bits.iter().fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
        Ok(Self::from_raw(raw, width))
    }

    /// Width of the vector.
    #[inline]
    pub const fn width(self) -> Width {
        self.width
    }

    /// Bit pattern right-aligned in a `u64`.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.raw
    }

    /// Returns the bit at MSB-first `index`, or `None` past the end.
    pub const fn bit(self, index: usize) -> Option<bool> {
        let width = self.width.bits() as usize;
        if index >= width {
            return None;
        }
        Some((self.raw >> (width - 1 - index)) & 1 == 1)
    }

    /// The most significant bit (index 0).
    #[inline]
    pub const fn sign_bit(self) -> bool {
        (self.raw >> (self.width.bits() - 1)) & 1 == 1
    }

    /// Iterates the bits from most to least significant.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator {
        let width = self.width.bits();
        (0..width).rev().map(move |shift| (self.raw >> shift) & 1 == 1)
    }

    /// Number of set bits.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.raw.count_ones()
    }

    /// Logical shift moving the bit at index `i` to index `i - n`.
    ///
    /// Positions shifted past either end are dropped and vacated positions
    /// fill with zero. A negative `n` shifts toward the least significant end.
    /// Any `|n| >= width` clears the vector.
    pub fn shifted_left(self, n: Word) -> Self {
        if n.unsigned_abs() >= u64::from(self.width.bits()) {
            return Self::zeros(self.width);
        }
        let k = n.unsigned_abs() as u32;
        let raw = if n >= 0 { self.raw << k } else { self.raw >> k };
        Self::from_raw(raw, self.width)
    }

    /// Rotation moving the bit at index `i` to index `(i + n) mod width`.
    ///
    /// No bits are lost; a negative `n` rotates toward the most significant end.
    pub fn rotated_right(self, n: Word) -> Self {
        let width = self.width.bits();
        let k = n.rem_euclid(i64::from(width)) as u32;
        if k == 0 {
            return self;
        }
        Self::from_raw((self.raw >> k) | (self.raw << (width - k)), self.width)
    }

    /// Sign-preserving shift toward the least significant end.
    ///
    /// For `0 < n < width` the vacated high bits take the sign bit's value.
    /// `n >= width` saturates to all sign bits. A negative `n` is a left shift
    /// by `|n|` with zero fill, and `n <= -width` clears the vector.
    pub fn shifted_right_arithmetic(self, n: Word) -> Self {
        let width = i64::from(self.width.bits());
        match n {
            0 => self,
            n if n >= width => {
                if self.sign_bit() {
                    Self::ones(self.width)
                } else {
                    Self::zeros(self.width)
                }
            }
            n if n > 0 => {
                let k = n as u32;
                let mask = self.width.mask();
                let fill = if self.sign_bit() { mask & !(mask >> k) } else { 0 };
                Self::from_raw((self.raw >> k) | fill, self.width)
            }
            n => self.shifted_left(n.saturating_neg()),
        }
    }
}

impl Index<usize> for BitVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        match self.bit(index) {
            Some(true) => &true,
            Some(false) => &false,
            None => panic!("bit index {index} out of range for {} vector", self.width),
        }
    }
}

impl BitAnd for BitVector {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.raw & rhs.raw, self.width)
    }
}

impl BitOr for BitVector {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw | rhs.raw, self.width)
    }
}

impl BitXor for BitVector {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self::from_raw(self.raw ^ rhs.raw, self.width)
    }
}

impl Not for BitVector {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_raw(!self.raw, self.width)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = 2 + self.width.bits().div_ceil(4) as usize;
        write!(f, "BitVector({}, {:#0digits$x})", self.width, self.raw)
    }
}
