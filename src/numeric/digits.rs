// ============================================================================
// Digit Primitives
// Magnitude arithmetic over buffers of digit values in an arbitrary base
// ============================================================================
//
// Digits are stored as values (0..base), most significant first. Symbols
// from the alphabet only appear at the parse/display boundary, so none of
// the routines here need the configuration beyond the base itself.

use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;

/// Inline digit buffer. Operands up to 32 digits per part never allocate.
pub(crate) type Digits = SmallVec<[u8; 32]>;

/// Unsigned value split into integer and fractional digit groups.
///
/// `int` is never empty and has no leading zeros unless it is exactly `[0]`.
/// `frac` may carry trailing zeros; they are part of the displayed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Magnitude {
    pub(crate) int: Digits,
    pub(crate) frac: Digits,
}

impl Magnitude {
    pub(crate) fn zero() -> Self {
        Self {
            int: smallvec![0],
            frac: Digits::new(),
        }
    }

    pub(crate) fn one() -> Self {
        Self {
            int: smallvec![1],
            frac: Digits::new(),
        }
    }

    /// Build from raw parts, restoring the integer-part invariant.
    pub(crate) fn from_parts(mut int: Digits, frac: Digits) -> Self {
        strip_leading_zeros(&mut int);
        if int.is_empty() {
            int.push(0);
        }
        Self { int, frac }
    }

    /// Interpret `digits` as an integer scaled by `base^frac_len`.
    pub(crate) fn from_scaled(digits: Digits, frac_len: usize) -> Self {
        if frac_len == 0 {
            return Self::from_parts(digits, Digits::new());
        }
        if digits.len() <= frac_len {
            let mut frac: Digits = smallvec![0; frac_len - digits.len()];
            frac.extend_from_slice(&digits);
            return Self::from_parts(Digits::new(), frac);
        }
        let split = digits.len() - frac_len;
        Self::from_parts(
            Digits::from_slice(&digits[..split]),
            Digits::from_slice(&digits[split..]),
        )
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.int.iter().chain(self.frac.iter()).all(|&d| d == 0)
    }

    /// True when no fractional digit is significant.
    pub(crate) fn is_integral(&self) -> bool {
        self.frac.iter().all(|&d| d == 0)
    }

    /// Digits with the separator removed, fraction padded to `frac_len`.
    pub(crate) fn scaled(&self, frac_len: usize) -> Digits {
        let mut out = Digits::with_capacity(self.int.len() + frac_len);
        out.extend_from_slice(&self.int);
        out.extend_from_slice(&self.frac);
        out.extend(std::iter::repeat(0).take(frac_len.saturating_sub(self.frac.len())));
        out
    }

    pub(crate) fn trim_fraction(&mut self) {
        while self.frac.last() == Some(&0) {
            self.frac.pop();
        }
    }

    pub(crate) fn pad_fraction(&mut self, len: usize) {
        if self.frac.len() < len {
            self.frac.resize(len, 0);
        }
    }

    /// Drop the fractional part.
    pub(crate) fn truncated(&self) -> Self {
        Self {
            int: self.int.clone(),
            frac: Digits::new(),
        }
    }

    /// Numeric comparison. Missing fractional positions count as zero.
    pub(crate) fn cmp_value(&self, other: &Self) -> Ordering {
        let by_int = self
            .int
            .len()
            .cmp(&other.int.len())
            .then_with(|| self.int.cmp(&other.int));
        if by_int != Ordering::Equal {
            return by_int;
        }
        let width = self.frac.len().max(other.frac.len());
        (0..width)
            .map(|i| {
                let lhs = self.frac.get(i).copied().unwrap_or(0);
                let rhs = other.frac.get(i).copied().unwrap_or(0);
                lhs.cmp(&rhs)
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Digit-wise addition with carry. Trailing fractional zeros survive.
    pub(crate) fn add(&self, other: &Self, base: u32) -> Self {
        let frac_len = self.frac.len().max(other.frac.len());
        let sum = add_int(&self.scaled(frac_len), &other.scaled(frac_len), base);
        Self::from_scaled(sum, frac_len)
    }

    /// Digit-wise subtraction with borrow. Caller guarantees `self >= other`.
    ///
    /// Trailing fractional zeros are stripped from the result.
    pub(crate) fn sub(&self, other: &Self, base: u32) -> Self {
        debug_assert!(self.cmp_value(other) != Ordering::Less);
        let frac_len = self.frac.len().max(other.frac.len());
        let mut diff = self.scaled(frac_len);
        let rhs = other.scaled(frac_len);
        sub_int_in_place(&mut diff, significant(&rhs), base);
        let mut result = Self::from_scaled(diff, frac_len);
        result.trim_fraction();
        result
    }

    /// Exact grade-school product; fractional length is the sum of both.
    pub(crate) fn mul(&self, other: &Self, base: u32) -> Self {
        let lhs = self.scaled(self.frac.len());
        let rhs = other.scaled(other.frac.len());
        Self::from_scaled(mul_int(&lhs, &rhs, base), self.frac.len() + other.frac.len())
    }

    /// Move the separator `places` positions right (positive) or left.
    pub(crate) fn shifted(&self, places: i64) -> Self {
        let mut digits = self.scaled(self.frac.len());
        let frac_len = self.frac.len() as i64 - places;
        if frac_len < 0 {
            digits.extend(std::iter::repeat(0).take(frac_len.unsigned_abs() as usize));
            Self::from_scaled(digits, 0)
        } else {
            Self::from_scaled(digits, frac_len as usize)
        }
    }
}

/// Scale a dividend/divisor pair to integers with the same implied exponent.
///
/// Returns both digit strings and the shared fractional scale.
pub(crate) fn scaled_pair(dividend: &Magnitude, divisor: &Magnitude) -> (Digits, Digits, usize) {
    let scale = dividend.frac.len().max(divisor.frac.len());
    (dividend.scaled(scale), divisor.scaled(scale), scale)
}

/// Leading-zero-free view of an integer digit string. Zero is empty.
pub(crate) fn significant(digits: &[u8]) -> &[u8] {
    let lead = digits.iter().take_while(|&&d| d == 0).count();
    &digits[lead..]
}

fn strip_leading_zeros(digits: &mut Digits) {
    let lead = digits.iter().take_while(|&&d| d == 0).count();
    if lead > 0 {
        digits.drain(..lead);
    }
}

/// Compare integer digit strings of arbitrary leading-zero padding.
fn cmp_int(lhs: &[u8], rhs: &[u8]) -> Ordering {
    let (lhs, rhs) = (significant(lhs), significant(rhs));
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

fn add_int(lhs: &[u8], rhs: &[u8], base: u32) -> Digits {
    let len = lhs.len().max(rhs.len());
    let mut out: Digits = smallvec![0; len + 1];
    let mut carry = 0u32;
    for k in 0..len {
        let a = lhs.len().checked_sub(k + 1).map_or(0, |i| lhs[i] as u32);
        let b = rhs.len().checked_sub(k + 1).map_or(0, |i| rhs[i] as u32);
        let sum = a + b + carry;
        out[len - k] = (sum % base) as u8;
        carry = sum / base;
    }
    out[0] = carry as u8;
    out
}

/// `lhs -= rhs` for integers with `lhs >= rhs`; leading zeros are removed,
/// leaving an empty buffer for zero.
fn sub_int_in_place(lhs: &mut Digits, rhs: &[u8], base: u32) {
    let base = base as i32;
    let mut borrow = 0i32;
    let offset = lhs.len() - rhs.len();
    for i in (0..lhs.len()).rev() {
        let subtrahend = if i >= offset { rhs[i - offset] as i32 } else { 0 };
        let mut digit = lhs[i] as i32 - subtrahend - borrow;
        if digit < 0 {
            digit += base;
            borrow = 1;
        } else {
            borrow = 0;
        }
        lhs[i] = digit as u8;
    }
    strip_leading_zeros(lhs);
}

fn mul_int(lhs: &[u8], rhs: &[u8], base: u32) -> Digits {
    let base = base as u64;
    let mut acc = vec![0u64; lhs.len() + rhs.len()];
    for i in (0..lhs.len()).rev() {
        for j in (0..rhs.len()).rev() {
            let product = lhs[i] as u64 * rhs[j] as u64 + acc[i + j + 1];
            acc[i + j + 1] = product % base;
            acc[i + j] += product / base;
        }
    }
    acc.into_iter().map(|d| d as u8).collect()
}

/// Long division of integer digit strings.
///
/// Brings down every dividend digit and then `extra` zeros, so the quotient
/// has `dividend.len() + extra` digits (with leading zeros). Each quotient
/// digit is found by subtracting the full divisor until the running
/// remainder drops below it. Returns `(quotient, remainder)`; a zero
/// remainder is empty. `divisor` must be non-zero.
pub(crate) fn long_divide(
    dividend: &[u8],
    divisor: &[u8],
    extra: usize,
    base: u32,
) -> (Digits, Digits) {
    let divisor = significant(divisor);
    debug_assert!(!divisor.is_empty(), "divisor must be non-zero");

    let steps = dividend.len() + extra;
    let mut quotient = Digits::with_capacity(steps);
    let mut remainder = Digits::new();
    for step in 0..steps {
        let next = dividend.get(step).copied().unwrap_or(0);
        if !(remainder.is_empty() && next == 0) {
            remainder.push(next);
        }
        let mut digit = 0u8;
        while cmp_int(&remainder, divisor) != Ordering::Less {
            sub_int_in_place(&mut remainder, divisor, base);
            digit += 1;
        }
        quotient.push(digit);
    }
    (quotient, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mag(int: &[u8], frac: &[u8]) -> Magnitude {
        Magnitude::from_parts(Digits::from_slice(int), Digits::from_slice(frac))
    }

    fn from_u64(mut value: u64) -> Magnitude {
        let mut digits = Digits::new();
        while value > 0 {
            digits.insert(0, (value % 10) as u8);
            value /= 10;
        }
        Magnitude::from_parts(digits, Digits::new())
    }

    fn to_u64(m: &Magnitude) -> u64 {
        m.int.iter().fold(0, |acc, &d| acc * 10 + d as u64)
    }

    #[test]
    fn test_from_parts_strips_leading_zeros() {
        let m = mag(&[0, 0, 4, 2], &[5]);
        assert_eq!(m.int.as_slice(), &[4, 2]);
        assert_eq!(m.frac.as_slice(), &[5]);

        let z = mag(&[0, 0], &[]);
        assert_eq!(z.int.as_slice(), &[0]);
        assert!(z.is_zero());
    }

    #[test]
    fn test_from_scaled_pads_fraction() {
        let m = Magnitude::from_scaled(smallvec![2], 4);
        assert_eq!(m.int.as_slice(), &[0]);
        assert_eq!(m.frac.as_slice(), &[0, 0, 0, 2]);

        let n = Magnitude::from_scaled(smallvec![1, 2, 3], 1);
        assert_eq!(n.int.as_slice(), &[1, 2]);
        assert_eq!(n.frac.as_slice(), &[3]);
    }

    #[test]
    fn test_cmp_value() {
        assert_eq!(mag(&[1, 0], &[]).cmp_value(&mag(&[9], &[9])), Ordering::Greater);
        assert_eq!(mag(&[1], &[5, 0]).cmp_value(&mag(&[1], &[5])), Ordering::Equal);
        assert_eq!(mag(&[1], &[0, 1]).cmp_value(&mag(&[1], &[1])), Ordering::Less);
    }

    #[test]
    fn test_add_with_carry() {
        let sum = mag(&[9, 9], &[5]).add(&mag(&[1], &[5]), 10);
        assert_eq!(sum, mag(&[1, 0, 1], &[0]));
    }

    #[test]
    fn test_add_binary() {
        // 0b11 + 0b1 = 0b100
        let sum = mag(&[1, 1], &[]).add(&mag(&[1], &[]), 2);
        assert_eq!(sum, mag(&[1, 0, 0], &[]));
    }

    #[test]
    fn test_sub_with_borrow() {
        let diff = mag(&[1, 0, 0], &[]).sub(&mag(&[1], &[]), 10);
        assert_eq!(diff, mag(&[9, 9], &[]));

        // 1.25 - 0.05 = 1.2 (trailing zero dropped)
        let frac = mag(&[1], &[2, 5]).sub(&mag(&[0], &[0, 5]), 10);
        assert_eq!(frac, mag(&[1], &[2]));

        let zero = mag(&[7], &[5]).sub(&mag(&[7], &[5]), 10);
        assert!(zero.is_zero());
        assert!(zero.frac.is_empty());
    }

    #[test]
    fn test_mul() {
        let product = mag(&[1, 2], &[]).mul(&mag(&[1, 2], &[]), 10);
        assert_eq!(product, mag(&[1, 4, 4], &[]));

        // 0.02 * 0.01 = 0.0002
        let small = mag(&[0], &[0, 2]).mul(&mag(&[0], &[0, 1]), 10);
        assert_eq!(small, mag(&[0], &[0, 0, 0, 2]));

        // ff * ff = fe01 in base 16
        let hex = mag(&[15, 15], &[]).mul(&mag(&[15, 15], &[]), 16);
        assert_eq!(hex, mag(&[15, 14, 0, 1], &[]));
    }

    #[test]
    fn test_shifted() {
        assert_eq!(mag(&[1], &[5]).shifted(2), mag(&[1, 5, 0], &[]));
        assert_eq!(mag(&[1, 5], &[]).shifted(-3), mag(&[0], &[0, 1, 5]));
        assert_eq!(mag(&[0], &[0, 5]).shifted(1), mag(&[0], &[5]));
    }

    #[test]
    fn test_long_divide_multi_digit_divisor() {
        // 1000 / 27 = 37 r 1
        let (q, r) = long_divide(&[1, 0, 0, 0], &[2, 7], 0, 10);
        assert_eq!(significant(&q), &[3, 7]);
        assert_eq!(r.as_slice(), &[1]);

        // 99 / 19 = 5 r 4; leading-digit estimation alone would give 9
        let (q, r) = long_divide(&[9, 9], &[1, 9], 0, 10);
        assert_eq!(significant(&q), &[5]);
        assert_eq!(r.as_slice(), &[4]);
    }

    #[test]
    fn test_long_divide_extra_digits() {
        // 1 / 8 with three extra steps: 0.125
        let (q, r) = long_divide(&[1], &[8], 3, 10);
        assert_eq!(q.as_slice(), &[0, 1, 2, 5]);
        assert!(r.is_empty());
    }

    #[test]
    fn test_add_matches_u64() {
        fn prop(a: u32, b: u32) -> bool {
            let sum = from_u64(a as u64).add(&from_u64(b as u64), 10);
            to_u64(&sum) == a as u64 + b as u64
        }
        quickcheck::QuickCheck::new()
            .tests(200)
            .quickcheck(prop as fn(u32, u32) -> bool);
    }
}
