// ============================================================================
// Arbitrary-Precision Decimal
// Signed digit-string numbers in a configurable base
// ============================================================================

use super::digits::{self, Digits, Magnitude};
use super::errors::{DecimalError, DecimalResult};
use crate::config::DecimalConfig;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Arbitrary-precision signed decimal number.
///
/// The magnitude is a sequence of digits in the configured base, split into
/// an integer and a fractional group. There is no fixed width: operands grow
/// as needed, and only division is bounded (to `max_decimal` fractional
/// digits, truncated).
///
/// Every operation returns a new value. The configuration is shared through
/// an `Arc`; results inherit the left operand's configuration.
///
/// # Example
/// ```
/// use radix_decimal::numeric::Decimal;
///
/// let a = Decimal::parse("89.0000001").unwrap();
/// let b = Decimal::parse("0.001").unwrap();
/// assert_eq!(a.plus(&b).unwrap().to_string(), "89.0010001");
///
/// let half = Decimal::parse("1").unwrap().divide(&"2".parse().unwrap()).unwrap();
/// assert_eq!(half.to_string(), "0.500000");
/// ```
#[derive(Clone)]
pub struct Decimal {
    negative: bool,
    magnitude: Magnitude,
    config: Arc<DecimalConfig>,
}

/// Shared default configuration, so plain `parse` calls don't allocate one each.
pub(super) fn default_config() -> Arc<DecimalConfig> {
    static DEFAULT: OnceLock<Arc<DecimalConfig>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(DecimalConfig::default())))
}

fn malformed(text: &str) -> DecimalError {
    tracing::trace!(input = text, "rejected malformed number");
    DecimalError::MalformedNumber
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a literal with the default configuration (base 10, `.`).
    ///
    /// Accepts an optional leading `-`, digits, and at most one separator.
    /// Leading zeros are dropped, `""` and `"."` read as zero, and `".5"`
    /// reads as `0.5`. Trailing fractional zeros are kept.
    ///
    /// # Errors
    /// `MalformedNumber` for any other character, including whitespace.
    pub fn parse(text: &str) -> DecimalResult<Self> {
        Self::parse_with_config(text, default_config())
    }

    /// Parse a literal using `config`'s alphabet, base, and separator.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - `MalformedNumber` if `text` does not match `[-][digit]*[sep][digit]*`
    pub fn parse_with_config(
        text: &str,
        config: impl Into<Arc<DecimalConfig>>,
    ) -> DecimalResult<Self> {
        let config = config.into();
        config.validate()?;

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let mut int = Digits::new();
        let mut frac = Digits::new();
        let mut in_fraction = false;
        for symbol in body.chars() {
            if symbol == config.decimal_separator {
                if in_fraction {
                    return Err(malformed(text));
                }
                in_fraction = true;
                continue;
            }
            let value = config.digit_value(symbol).ok_or_else(|| malformed(text))?;
            if in_fraction {
                frac.push(value);
            } else {
                int.push(value);
            }
        }

        Ok(Self::from_magnitude(
            negative,
            Magnitude::from_parts(int, frac),
            config,
        ))
    }

    /// Zero carries no sign.
    pub(super) fn from_magnitude(
        negative: bool,
        magnitude: Magnitude,
        config: Arc<DecimalConfig>,
    ) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
            config,
        }
    }

    /// New value sharing this value's configuration.
    fn derive(&self, negative: bool, magnitude: Magnitude) -> Self {
        Self::from_magnitude(negative, magnitude, Arc::clone(&self.config))
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    #[inline]
    pub fn config(&self) -> &DecimalConfig {
        &self.config
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.config.base
    }

    /// Replace this value's configuration.
    ///
    /// Digits are stored by value, so a new alphabet or separator only
    /// changes how the number renders. A new base reinterprets the digits.
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - `DigitOutOfRange` if a stored digit is not valid in the new base
    pub fn set_configuration(
        &mut self,
        config: impl Into<Arc<DecimalConfig>>,
    ) -> DecimalResult<()> {
        let config = config.into();
        if let Err(err) = config.validate() {
            tracing::debug!(%err, "rejected decimal configuration");
            return Err(err);
        }
        let fits = self
            .magnitude
            .int
            .iter()
            .chain(self.magnitude.frac.iter())
            .all(|&digit| (digit as u32) < config.base);
        if !fits {
            tracing::debug!(
                base = config.base,
                value = %self,
                "stored digits do not fit new base"
            );
            return Err(DecimalError::DigitOutOfRange);
        }
        self.config = config;
        Ok(())
    }

    pub(super) fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    fn ensure_same_base(&self, rhs: &Self) -> DecimalResult<()> {
        if self.config.base == rhs.config.base {
            Ok(())
        } else {
            Err(DecimalError::BaseMismatch)
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    /// `-1` for negative values, `1` otherwise (zero included).
    #[inline]
    pub fn sign(&self) -> i8 {
        if self.negative {
            -1
        } else {
            1
        }
    }

    /// True when every fractional digit is zero.
    pub fn is_integer(&self) -> bool {
        self.magnitude.is_integral()
    }

    /// Number of digits, separator excluded (`"0.50"` has 3).
    pub fn precision(&self) -> usize {
        self.magnitude.int.len() + self.magnitude.frac.len()
    }

    /// Number of digits after the separator.
    pub fn decimal_places(&self) -> usize {
        self.magnitude.frac.len()
    }

    // ========================================================================
    // Addition and Subtraction
    // ========================================================================

    /// Signed addition.
    ///
    /// # Errors
    /// `BaseMismatch` if the operands use different bases.
    pub fn plus(&self, rhs: &Self) -> DecimalResult<Self> {
        self.ensure_same_base(rhs)?;
        Ok(self.signed_sum(&rhs.magnitude, rhs.negative))
    }

    /// Signed subtraction.
    ///
    /// # Errors
    /// `BaseMismatch` if the operands use different bases.
    pub fn minus(&self, rhs: &Self) -> DecimalResult<Self> {
        self.ensure_same_base(rhs)?;
        Ok(self.signed_sum(&rhs.magnitude, !rhs.negative))
    }

    /// Add `self` to a signed magnitude: equal signs add, otherwise the
    /// smaller magnitude is taken from the larger and its sign wins.
    fn signed_sum(&self, magnitude: &Magnitude, negative: bool) -> Self {
        let base = self.config.base;
        if self.negative == negative {
            return self.derive(negative, self.magnitude.add(magnitude, base));
        }
        match self.magnitude.cmp_value(magnitude) {
            Ordering::Less => self.derive(negative, magnitude.sub(&self.magnitude, base)),
            _ => self.derive(self.negative, self.magnitude.sub(magnitude, base)),
        }
    }

    /// Sum of `self` and every value in `values`.
    ///
    /// # Errors
    /// `BaseMismatch` on the first operand in a different base.
    pub fn sum<'a, I>(&self, values: I) -> DecimalResult<Self>
    where
        I: IntoIterator<Item = &'a Decimal>,
    {
        values
            .into_iter()
            .try_fold(self.clone(), |total, value| total.plus(value))
    }

    // ========================================================================
    // Multiplication and Division
    // ========================================================================

    /// Exact product.
    ///
    /// A fractional result shorter than `max_decimal` is right-padded with
    /// zeros to `max_decimal` digits; with `max_decimal == 0` trailing
    /// fractional zeros are stripped instead. Longer fractions are kept.
    ///
    /// # Errors
    /// `BaseMismatch` if the operands use different bases.
    pub fn multiply(&self, rhs: &Self) -> DecimalResult<Self> {
        self.ensure_same_base(rhs)?;
        let product = self.magnitude.mul(&rhs.magnitude, self.config.base);
        Ok(self.derive(self.negative != rhs.negative, self.fixed_precision(product)))
    }

    fn fixed_precision(&self, mut magnitude: Magnitude) -> Magnitude {
        let max_decimal = self.config.max_decimal;
        if max_decimal == 0 {
            magnitude.trim_fraction();
        } else if !magnitude.frac.is_empty() {
            magnitude.pad_fraction(max_decimal);
        }
        magnitude
    }

    /// Quotient truncated to exactly `max_decimal` fractional digits.
    ///
    /// # Errors
    /// - `BaseMismatch` if the operands use different bases
    /// - `DivisionByZero` if `rhs` is zero
    pub fn divide(&self, rhs: &Self) -> DecimalResult<Self> {
        let (dividend, divisor, _) = self.division_operands(rhs)?;
        let max_decimal = self.config.max_decimal;
        let (quotient, _) =
            digits::long_divide(&dividend, &divisor, max_decimal, self.config.base);
        Ok(self.derive(
            self.negative != rhs.negative,
            Magnitude::from_scaled(quotient, max_decimal),
        ))
    }

    /// Integer part of the quotient, truncated toward zero.
    ///
    /// # Errors
    /// - `BaseMismatch` if the operands use different bases
    /// - `DivisionByZero` if `rhs` is zero
    pub fn divided_to_integer_by(&self, rhs: &Self) -> DecimalResult<Self> {
        let (dividend, divisor, _) = self.division_operands(rhs)?;
        let (quotient, _) = digits::long_divide(&dividend, &divisor, 0, self.config.base);
        Ok(self.derive(
            self.negative != rhs.negative,
            Magnitude::from_scaled(quotient, 0),
        ))
    }

    /// Remainder of truncated division; takes the dividend's sign.
    ///
    /// Satisfies `self == self.divided_to_integer_by(rhs) * rhs + remainder`.
    ///
    /// # Errors
    /// - `BaseMismatch` if the operands use different bases
    /// - `DivisionByZero` if `rhs` is zero
    pub fn modulus(&self, rhs: &Self) -> DecimalResult<Self> {
        let (dividend, divisor, scale) = self.division_operands(rhs)?;
        let (_, remainder) = digits::long_divide(&dividend, &divisor, 0, self.config.base);
        let mut magnitude = Magnitude::from_scaled(remainder, scale);
        magnitude.trim_fraction();
        Ok(self.derive(self.negative, magnitude))
    }

    fn division_operands(&self, rhs: &Self) -> DecimalResult<(Digits, Digits, usize)> {
        self.ensure_same_base(rhs)?;
        if rhs.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let (dividend, divisor, scale) = digits::scaled_pair(&self.magnitude, &rhs.magnitude);
        tracing::trace!(
            dividend_digits = dividend.len(),
            divisor_digits = divisor.len(),
            scale,
            "long division"
        );
        Ok((dividend, divisor, scale))
    }

    // ========================================================================
    // Derived Operations
    // ========================================================================

    pub fn absolute_value(&self) -> Self {
        self.derive(false, self.magnitude.clone())
    }

    pub fn negate(&self) -> Self {
        self.derive(!self.negative, self.magnitude.clone())
    }

    /// Drop the fractional part (truncation toward zero).
    pub fn integer_value(&self) -> Self {
        self.derive(self.negative, self.magnitude.truncated())
    }

    /// `self` multiplied by itself `exponent` times, starting from one.
    ///
    /// The product is exact; the multiplication padding policy is applied
    /// once to the final result.
    ///
    /// # Errors
    /// `NegativeExponent` if `exponent < 0`.
    pub fn exponentiated_by(&self, exponent: i64) -> DecimalResult<Self> {
        if exponent < 0 {
            return Err(DecimalError::NegativeExponent);
        }
        let base = self.config.base;
        let mut power = Magnitude::one();
        for _ in 0..exponent {
            power = power.mul(&self.magnitude, base);
        }
        let negative = self.negative && exponent % 2 == 1;
        Ok(self.derive(negative, self.fixed_precision(power)))
    }

    /// Move the separator right for positive `places`, left for negative.
    pub fn shifted_by(&self, places: i64) -> Self {
        self.derive(self.negative, self.magnitude.shifted(places))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Numeric comparison; `"1.5"` and `"1.50"` are equal.
    ///
    /// # Errors
    /// `BaseMismatch` if the operands use different bases.
    pub fn compare(&self, other: &Self) -> DecimalResult<Ordering> {
        self.ensure_same_base(other)?;
        Ok(match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp_value(&other.magnitude),
            (true, true) => other.magnitude.cmp_value(&self.magnitude),
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.compare(other) == Ok(Ordering::Equal)
    }

    pub fn is_greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Ok(Ordering::Greater)
    }

    pub fn is_greater_than_or_equal_to(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Greater | Ordering::Equal))
    }

    pub fn is_less_than(&self, other: &Self) -> bool {
        self.compare(other) == Ok(Ordering::Less)
    }

    pub fn is_less_than_or_equal_to(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Less | Ordering::Equal))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Display form with integer digits grouped in threes.
    ///
    /// `1234567.5` renders as `1,234,567.5` with the default configuration.
    /// Grouped text is not accepted by [`Decimal::parse`].
    pub fn to_grouped_string(&self) -> String {
        Grouped(self).to_string()
    }

    fn render<W: fmt::Write>(&self, out: &mut W, group: Option<char>) -> fmt::Result {
        let alphabet = &self.config.alphabet;
        let symbol = |digit: u8| alphabet.symbol(digit).map_err(|_| fmt::Error);

        if self.negative {
            out.write_char('-')?;
        }
        let int_len = self.magnitude.int.len();
        for (index, &digit) in self.magnitude.int.iter().enumerate() {
            if let Some(separator) = group {
                if index > 0 && (int_len - index) % 3 == 0 {
                    out.write_char(separator)?;
                }
            }
            out.write_char(symbol(digit)?)?;
        }
        if !self.magnitude.frac.is_empty() {
            out.write_char(self.config.decimal_separator)?;
            for &digit in &self.magnitude.frac {
                out.write_char(symbol(digit)?)?;
            }
        }
        Ok(())
    }
}

struct Grouped<'a>(&'a Decimal);

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f, Some(self.0.config.group_separator))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    fn default() -> Self {
        Self::from_magnitude(false, Magnitude::zero(), default_config())
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Decimal {}

/// Values in different bases are unordered.
impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let frac = &self.magnitude.frac;
        let significant = frac.len() - frac.iter().rev().take_while(|&&d| d == 0).count();
        self.config.base.hash(state);
        self.negative.hash(state);
        self.magnitude.int.as_slice().hash(state);
        frac[..significant].hash(state);
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Infallible operators for ergonomics (panic on base mismatch - use the
// checked methods when operands may come from different configurations)
macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $checked:ident, $message:literal) => {
        impl $op<&Decimal> for &Decimal {
            type Output = Decimal;

            fn $method(self, rhs: &Decimal) -> Decimal {
                self.$checked(rhs).expect($message)
            }
        }

        impl $op for Decimal {
            type Output = Decimal;

            fn $method(self, rhs: Decimal) -> Decimal {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, plus, "Decimal addition base mismatch");
impl_binary_op!(Sub, sub, minus, "Decimal subtraction base mismatch");
impl_binary_op!(Mul, mul, multiply, "Decimal multiplication base mismatch");

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, None)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({}, base={})", self, self.config.base)
    }
}

// ============================================================================
// Tests
// ============================================================================
