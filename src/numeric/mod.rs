// ============================================================================
// Numeric Module
// Arbitrary-precision decimal arithmetic over digit strings
// ============================================================================
//
// This module provides:
// - Decimal: signed digit-string number in a configurable base
// - DecimalError: Error types for parsing and arithmetic
// - Conversions to and from integers and rust_decimal
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (operator traits excepted)
// - Digits held as values in inline buffers, symbols only at the edges
// - Every operation returns a new value; operands are never mutated

mod big_decimal;
mod convert;
mod digits;
mod errors;

pub use big_decimal::Decimal;
pub use errors::{DecimalError, DecimalResult};
