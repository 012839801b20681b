// ============================================================================
// Decimal Configuration
// Alphabet, base, separators, and precision shared by Decimal values
// ============================================================================

mod alphabet;

pub use alphabet::{Alphabet, MAX_SYMBOLS};

use crate::numeric::{DecimalError, DecimalResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formatting and arithmetic parameters attached to a [`Decimal`].
///
/// Values are immutable once attached: a `Decimal` holds its configuration
/// behind an `Arc`, and results of an operation share the left operand's.
///
/// [`Decimal`]: crate::numeric::Decimal
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecimalConfig {
    /// Digit symbols, lowest value first
    pub alphabet: Alphabet,

    /// Integer digit grouping character (display only)
    pub group_separator: char,

    /// Character between integer and fractional digits
    pub decimal_separator: char,

    /// Radix, between 2 and the alphabet length
    pub base: u32,

    /// Fractional digits produced by division and padded to by multiplication
    /// (0 strips trailing fractional zeros instead)
    pub max_decimal: usize,
}

impl Default for DecimalConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            group_separator: ',',
            decimal_separator: '.',
            base: 10,
            max_decimal: 6,
        }
    }
}

impl DecimalConfig {
    /// Base 10, `0-9a-z` alphabet, `,` grouping, `.` separator, 6 decimals.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set digit alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Builder method: Set group separator
    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    /// Builder method: Set decimal separator
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Builder method: Set base
    pub fn with_base(mut self, base: u32) -> Self {
        self.base = base;
        self
    }

    /// Builder method: Set fractional digits kept by division
    pub fn with_max_decimal(mut self, max_decimal: usize) -> Self {
        self.max_decimal = max_decimal;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> DecimalResult<()> {
        if self.base < 2 || self.base as usize > self.alphabet.len() {
            return Err(DecimalError::InvalidBase);
        }

        for separator in [self.decimal_separator, self.group_separator] {
            if separator == '-' || self.alphabet.contains(separator) {
                return Err(DecimalError::InvalidSeparator);
            }
        }
        if self.decimal_separator == self.group_separator {
            return Err(DecimalError::InvalidSeparator);
        }

        Ok(())
    }

    /// Digit value of `symbol` if it is valid in this base.
    #[inline]
    pub(crate) fn digit_value(&self, symbol: char) -> Option<u8> {
        self.alphabet
            .value_of(symbol)
            .filter(|&value| (value as u32) < self.base)
    }

    /// Load and validate a configuration from JSON.
    ///
    /// Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> DecimalResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| DecimalError::MalformedConfiguration)?;
        config.validate()?;
        Ok(config)
    }
}
