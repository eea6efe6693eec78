//! Configuration for the ALU model.
//!
//! The arithmetic itself has nothing to configure: the word size and the
//! rounding mode are fixed. What varies between consumers is how the two
//! status flags are packed when a vector generator writes them out as a
//! single flag value. This module provides:
//! 1. **Defaults:** Baseline bit positions for each flag.
//! 2. **Structures:** `Config` and its validated `FlagLayout`.
//!
//! Configuration is supplied as JSON, or use `Config::default()`.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Bit position of the overflow flag in the packed flag byte.
    pub const OVERFLOW_BIT: u8 = 0;

    /// Bit position of the divide-by-zero flag in the packed flag byte.
    pub const DIVIDE_BY_ZERO_BIT: u8 = 1;

    /// Number of bits available in the packed flag value.
    pub const FLAG_BITS: u8 = 8;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use alu64_core::Config;
///
/// let config = Config::from_json(r#"{ "flags": { "overflow_bit": 3, "divide_by_zero_bit": 0 } }"#).unwrap();
/// assert_eq!(config.flags.overflow_bit(), 3);
/// assert_eq!(Config::default().flags.divide_by_zero_bit(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Packed flag layout.
    pub flags: FlagLayout,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, unknown fields or an
    /// invalid flag layout (the layout error's message is carried through).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(flags = ?config.flags, "loaded ALU configuration");
        Ok(config)
    }
}

/// Bit positions of the status flags within a packed flag byte.
///
/// Both positions are below 8 and distinct; deserialization enforces this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFlagLayout")]
pub struct FlagLayout {
    overflow_bit: u8,
    divide_by_zero_bit: u8,
}

impl FlagLayout {
    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Layout`] if either position is 8 or above, or if
    /// both flags share a bit.
    pub fn new(overflow_bit: u8, divide_by_zero_bit: u8) -> Result<Self, ConfigError> {
        if overflow_bit >= defaults::FLAG_BITS
            || divide_by_zero_bit >= defaults::FLAG_BITS
            || overflow_bit == divide_by_zero_bit
        {
            return Err(ConfigError::Layout {
                overflow_bit,
                divide_by_zero_bit,
            });
        }
        Ok(Self {
            overflow_bit,
            divide_by_zero_bit,
        })
    }

    /// Bit position of the overflow flag.
    #[inline]
    pub const fn overflow_bit(&self) -> u8 {
        self.overflow_bit
    }

    /// Bit position of the divide-by-zero flag.
    #[inline]
    pub const fn divide_by_zero_bit(&self) -> u8 {
        self.divide_by_zero_bit
    }
}

impl Default for FlagLayout {
    fn default() -> Self {
        Self {
            overflow_bit: defaults::OVERFLOW_BIT,
            divide_by_zero_bit: defaults::DIVIDE_BY_ZERO_BIT,
        }
    }
}

/// Unvalidated layout as it appears in JSON.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawFlagLayout {
    overflow_bit: u8,
    divide_by_zero_bit: u8,
}

impl Default for RawFlagLayout {
    fn default() -> Self {
        Self {
            overflow_bit: defaults::OVERFLOW_BIT,
            divide_by_zero_bit: defaults::DIVIDE_BY_ZERO_BIT,
        }
    }
}

impl TryFrom<RawFlagLayout> for FlagLayout {
    type Error = ConfigError;

    fn try_from(raw: RawFlagLayout) -> Result<Self, ConfigError> {
        Self::new(raw.overflow_bit, raw.divide_by_zero_bit)
    }
}
