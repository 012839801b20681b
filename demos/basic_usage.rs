// ============================================================================
// Basic Usage Example
// ============================================================================

use radix_decimal::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), DecimalError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Radix Decimal Example ===\n");

    // Base-10 arithmetic with the default configuration
    let price = Decimal::parse("1234567.891")?;
    let quantity = Decimal::parse("0.25")?;

    println!("price     = {}", price.to_grouped_string());
    println!("quantity  = {}", quantity);
    println!("sum       = {}", price.plus(&quantity)?);
    println!("diff      = {}", quantity.minus(&price)?);
    println!("product   = {}", price.multiply(&quantity)?);
    println!("quotient  = {}", price.divide(&quantity)?);
    println!("remainder = {}", price.modulus(&Decimal::parse("7")?)?);
    println!("2^100     = {}", Decimal::from(2i64).exponentiated_by(100)?);

    // Comparison
    let a = Decimal::parse("1.50")?;
    let b = Decimal::parse("1.5")?;
    println!("\n{} == {} -> {}", a, b, a.is_equal_to(&b));
    println!("{} > -{} -> {}", a, b, a.is_greater_than(&b.negate()));

    // Hexadecimal with four fractional digits, shared between operands
    println!("\n=== Base 16 ===");
    let hex = Arc::new(DecimalConfig::new().with_base(16).with_max_decimal(4));
    let x = Decimal::parse_with_config("ff.8", Arc::clone(&hex))?;
    let y = Decimal::parse_with_config("3", hex)?;
    println!("{} / {} = {}", x, y, x.divide(&y)?);
    println!("{} * {} = {}", x, y, x.multiply(&y)?);

    // Errors are values, not panics
    println!("\n=== Errors ===");
    match price.divide(&Decimal::parse("0.000")?) {
        Ok(q) => println!("unexpected quotient {}", q),
        Err(err) => println!("divide by zero: {}", err),
    }
    match Decimal::parse("12.3.4") {
        Ok(v) => println!("unexpected value {}", v),
        Err(err) => println!("parse \"12.3.4\": {}", err),
    }
    match price.plus(&x) {
        Ok(v) => println!("unexpected sum {}", v),
        Err(err) => println!("base 10 + base 16: {}", err),
    }

    Ok(())
}
