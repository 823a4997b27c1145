//! Half-up rounding through exact decimals

use crate::error::NumericError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for percentages, statistics and p-values
pub(crate) const SCALE: u32 = 6;

/// Round half-up (ties away from zero) to `scale` decimal places
pub(crate) fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

/// 2^53. Every float at or above this magnitude is a whole number.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// The exact binary value of `value` as a decimal
pub(crate) fn exact_decimal(value: f64) -> Result<Decimal, NumericError> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| rust_decimal::Error::ConversionTo("Decimal".to_string()).into())
}

/// Round a float to `scale` decimal places through an exact decimal.
///
/// Only non-finite values fail.
pub(crate) fn round_f64(value: f64, scale: u32) -> Result<f64, NumericError> {
    if value.is_finite() && value.abs() >= EXACT_INTEGER_LIMIT {
        return Ok(value);
    }
    let exact = exact_decimal(value)?;
    let rounded = round_half_up(exact, scale);
    rounded.to_f64().ok_or(NumericError::NotRepresentable(rounded))
}
