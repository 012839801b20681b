// ============================================================================
// Radix Decimal Library
// Arbitrary-precision decimal arithmetic over digit strings
// ============================================================================

//! # Radix Decimal
//!
//! Arbitrary-precision signed decimal numbers stored as digit strings in a
//! configurable base.
//!
//! ## Features
//!
//! - **No fixed width**: integer and fractional parts grow as needed
//! - **Any base from 2 to 64** with a custom digit alphabet and separators
//! - **Exact add, subtract, multiply**; division truncated to a fixed number
//!   of fractional digits
//! - **Explicit errors** for malformed input, division by zero, and
//!   mismatched bases instead of panics
//!
//! ## Example
//!
//! ```rust
//! use radix_decimal::prelude::*;
//!
//! let a = Decimal::parse("0.02")?;
//! let b = Decimal::parse("0.01")?;
//! assert_eq!(a.multiply(&b)?.to_string(), "0.000200");
//!
//! let eight = Decimal::parse("8")?;
//! assert_eq!(eight.minus(&Decimal::parse("9")?)?.to_string(), "-1");
//!
//! // Base 16 with two fractional digits of precision
//! let config = DecimalConfig::new().with_base(16).with_max_decimal(2);
//! let x = Decimal::parse_with_config("ff", config.clone())?;
//! let y = Decimal::parse_with_config("10", config)?;
//! assert_eq!(x.divide(&y)?.to_string(), "f.f0");
//! # Ok::<(), DecimalError>(())
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{Alphabet, DecimalConfig};
    pub use crate::numeric::{Decimal, DecimalError, DecimalResult};
}

#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    fn literal() -> impl Strategy<Value = String> {
        "-?[0-9]{1,12}(\\.[0-9]{1,8})?"
    }

    fn decimal() -> impl Strategy<Value = Decimal> {
        literal().prop_map(|s| Decimal::parse(&s).unwrap())
    }

    /// Strip leading zeros, keep at least one integer digit.
    fn normalize(text: &str) -> String {
        let (sign, body) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text),
        };
        let (int, frac) = body.split_once('.').unwrap_or((body, ""));
        let int = int.trim_start_matches('0');
        let int = if int.is_empty() { "0" } else { int };
        let is_zero = int == "0" && frac.chars().all(|c| c == '0');
        let sign = if is_zero { "" } else { sign };
        if frac.is_empty() {
            format!("{sign}{int}")
        } else {
            format!("{sign}{int}.{frac}")
        }
    }

    proptest! {
        #[test]
        fn round_trip(s in literal()) {
            prop_assert_eq!(Decimal::parse(&s).unwrap().to_string(), normalize(&s));
        }

        #[test]
        fn plus_commutes(a in decimal(), b in decimal()) {
            prop_assert_eq!(a.plus(&b).unwrap(), b.plus(&a).unwrap());
        }

        #[test]
        fn multiply_commutes(a in decimal(), b in decimal()) {
            let ab = a.multiply(&b).unwrap();
            let ba = b.multiply(&a).unwrap();
            prop_assert_eq!(ab.to_string(), ba.to_string());
        }

        #[test]
        fn additive_inverse(a in decimal()) {
            let zero = a.plus(&a.negate()).unwrap();
            prop_assert!(zero.is_zero());
            prop_assert_eq!(&zero, &Decimal::default());
            if !a.is_zero() {
                prop_assert_eq!(zero.to_string(), "0");
            }
        }

        #[test]
        fn minus_undoes_plus(a in decimal(), b in decimal()) {
            prop_assert_eq!(a.plus(&b).unwrap().minus(&b).unwrap(), a);
        }

        #[test]
        fn sign_rule(a in decimal(), b in decimal()) {
            prop_assume!(!a.is_zero() && !b.is_zero());
            let product = a.multiply(&b).unwrap();
            prop_assert_eq!(product.sign(), a.sign() * b.sign());
        }

        #[test]
        fn divide_inverts_multiply(a in decimal(), b in decimal()) {
            prop_assume!(!b.is_zero());
            let quotient = a.multiply(&b).unwrap().divide(&b).unwrap();
            let error = quotient.minus(&a).unwrap().absolute_value();
            let ulp = Decimal::parse("0.000001").unwrap();
            prop_assert!(error.is_less_than_or_equal_to(&ulp), "{} vs {}", quotient, a);
        }

        #[test]
        fn compare_is_total_and_antisymmetric(a in decimal(), b in decimal()) {
            let forward = a.compare(&b).unwrap();
            let backward = b.compare(&a).unwrap();
            prop_assert_eq!(forward, backward.reverse());
            prop_assert_eq!(forward == Ordering::Equal, a == b);
        }

        #[test]
        fn compare_matches_difference_sign(a in decimal(), b in decimal()) {
            let diff = a.minus(&b).unwrap();
            let expected = if diff.is_zero() {
                Ordering::Equal
            } else if diff.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
            prop_assert_eq!(a.compare(&b).unwrap(), expected);
        }

        #[test]
        fn modulus_identity(a in decimal(), b in decimal()) {
            prop_assume!(!b.is_zero());
            let q = a.divided_to_integer_by(&b).unwrap();
            let r = a.modulus(&b).unwrap();
            prop_assert_eq!(q.multiply(&b).unwrap().plus(&r).unwrap(), a.clone());
            prop_assert!(r.absolute_value().is_less_than(&b.absolute_value()));
        }

        #[test]
        fn integer_arithmetic_matches_i128(a in -1_000_000_000i64..1_000_000_000, b in -1_000_000_000i64..1_000_000_000) {
            let (x, y) = (Decimal::from(a), Decimal::from(b));
            let (a, b) = (a as i128, b as i128);
            prop_assert_eq!(x.plus(&y).unwrap().to_string(), (a + b).to_string());
            prop_assert_eq!(x.minus(&y).unwrap().to_string(), (a - b).to_string());
            prop_assert_eq!(x.multiply(&y).unwrap().to_string(), (a * b).to_string());
        }
    }

    #[test]
    fn test_documented_scenarios() {
        let d = |s: &str| Decimal::parse(s).unwrap();
        assert_eq!(d("12").plus(&d("12")).unwrap().to_string(), "24");
        assert_eq!(d("89.0000001").plus(&d("0.001")).unwrap().to_string(), "89.0010001");
        assert_eq!(d("0.02").multiply(&d("0.01")).unwrap().to_string(), "0.000200");
        assert_eq!(d("8").minus(&d("9")).unwrap().to_string(), "-1");
        assert_eq!(d("1").divide(&d("2")).unwrap().to_string(), "0.500000");
        assert_eq!(d("-12").absolute_value().to_string(), "12");
        assert_eq!(d("42").divide(&d("0")), Err(DecimalError::DivisionByZero));
    }

    #[test]
    fn test_decimal_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Decimal>();
        assert_send_sync::<DecimalConfig>();
    }
}
