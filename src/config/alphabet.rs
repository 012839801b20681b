// ============================================================================
// Digit Alphabet
// Ordered symbol table mapping digit values to characters and back
// ============================================================================

use crate::numeric::{DecimalError, DecimalResult};
use arrayvec::ArrayVec;
use std::fmt;

/// Largest supported alphabet, and therefore the largest base.
pub const MAX_SYMBOLS: usize = 64;

/// Symbols for digit values `0..len`, lowest value first.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    symbols: ArrayVec<char, MAX_SYMBOLS>,
}

impl Alphabet {
    /// The 36-symbol alphabet `0-9a-z`.
    pub const DEFAULT: &'static str = "0123456789abcdefghijklmnopqrstuvwxyz";

    /// Build an alphabet from the characters of `symbols`.
    ///
    /// # Errors
    /// `InvalidAlphabet` if there are fewer than 2 or more than 64 symbols,
    /// a symbol repeats, or `-` is used as a digit.
    pub fn new(symbols: &str) -> DecimalResult<Self> {
        let mut table = ArrayVec::new();
        for symbol in symbols.chars() {
            if symbol == '-' || table.contains(&symbol) {
                return Err(DecimalError::InvalidAlphabet);
            }
            table
                .try_push(symbol)
                .map_err(|_| DecimalError::InvalidAlphabet)?;
        }
        if table.len() < 2 {
            return Err(DecimalError::InvalidAlphabet);
        }
        Ok(Self { symbols: table })
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet holds at least two symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Digit value of `symbol`, if it is part of the alphabet.
    #[inline]
    pub fn value_of(&self, symbol: char) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|index| index as u8)
    }

    /// Symbol for a digit value.
    ///
    /// # Errors
    /// `DigitOutOfRange` if `value` has no symbol.
    #[inline]
    pub fn symbol(&self, value: u8) -> DecimalResult<char> {
        self.symbols
            .get(value as usize)
            .copied()
            .ok_or(DecimalError::DigitOutOfRange)
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: Self::DEFAULT.chars().collect(),
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.as_string())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = DecimalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.as_string()
    }
}
