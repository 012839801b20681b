// ============================================================================
// Decimal Errors
// Error types for digit-string arithmetic and configuration
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing, configuring, or operating on a
/// [`Decimal`](super::Decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input text is not a signed, optionally fractional digit string
    MalformedNumber,
    /// Divisor magnitude is zero
    DivisionByZero,
    /// A digit value has no symbol in the alphabet or does not fit the base
    DigitOutOfRange,
    /// Exponentiation by a negative integer
    NegativeExponent,
    /// Operands were configured with different bases
    BaseMismatch,
    /// Base is outside `2..=alphabet.len()`
    InvalidBase,
    /// Alphabet is too short, too long, or has duplicate or reserved symbols
    InvalidAlphabet,
    /// Separator collides with the alphabet, the sign, or the other separator
    InvalidSeparator,
    /// Serialized configuration could not be decoded
    MalformedConfiguration,
    /// Conversion target cannot hold the value
    Unrepresentable,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::MalformedNumber => {
                write!(f, "malformed number: could not parse digit string")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::DigitOutOfRange => {
                write!(f, "digit out of range for the configured alphabet and base")
            },
            DecimalError::NegativeExponent => {
                write!(f, "negative exponents are not supported")
            },
            DecimalError::BaseMismatch => write!(f, "base mismatch between operands"),
            DecimalError::InvalidBase => {
                write!(f, "invalid base: must be between 2 and the alphabet length")
            },
            DecimalError::InvalidAlphabet => write!(
                f,
                "invalid alphabet: expected 2 to 64 unique symbols without '-'"
            ),
            DecimalError::InvalidSeparator => write!(
                f,
                "invalid separator: must be distinct and outside the alphabet"
            ),
            DecimalError::MalformedConfiguration => {
                write!(f, "malformed configuration: could not decode settings")
            },
            DecimalError::Unrepresentable => {
                write!(f, "value cannot be represented by the target type")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
