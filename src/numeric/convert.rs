// ============================================================================
// Conversions
// Integers, rust_decimal (for API boundaries), and serde
// ============================================================================

use super::big_decimal::{default_config, Decimal};
use super::digits::{Digits, Magnitude};
use super::errors::{DecimalError, DecimalResult};

fn from_unsigned(negative: bool, mut value: u128) -> Decimal {
    let mut digits = Digits::new();
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits.reverse();
    Decimal::from_magnitude(
        negative,
        Magnitude::from_parts(digits, Digits::new()),
        default_config(),
    )
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Decimal {
                fn from(value: $ty) -> Self {
                    from_unsigned(value < 0, value.unsigned_abs() as u128)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Decimal {
                fn from(value: $ty) -> Self {
                    from_unsigned(false, value as u128)
                }
            }
        )*
    };
}

impl_from_signed!(i32, i64);
impl_from_unsigned!(u32, u64);

impl Decimal {
    /// Convert from rust_decimal::Decimal.
    ///
    /// The result uses the default base-10 configuration and keeps the
    /// source's scale (`1.50` stays `1.50`).
    pub fn from_decimal(value: rust_decimal::Decimal) -> DecimalResult<Self> {
        Self::parse(&value.to_string())
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Independent of the configured alphabet and separator; only the base
    /// must be 10.
    ///
    /// # Errors
    /// `Unrepresentable` for other bases, or when the value needs more than
    /// 28 fractional digits or 96 bits of mantissa.
    pub fn to_decimal(&self) -> DecimalResult<rust_decimal::Decimal> {
        if self.base() != 10 {
            return Err(DecimalError::Unrepresentable);
        }
        let magnitude = self.magnitude();
        let mut text = String::with_capacity(self.precision() + 2);
        if self.is_negative() {
            text.push('-');
        }
        text.extend(magnitude.int.iter().map(|&d| char::from(b'0' + d)));
        if !magnitude.frac.is_empty() {
            text.push('.');
            text.extend(magnitude.frac.iter().map(|&d| char::from(b'0' + d)));
        }
        rust_decimal::Decimal::from_str_exact(&text).map_err(|_| DecimalError::Unrepresentable)
    }
}

// ============================================================================
// Serde
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Parses with the default configuration.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
