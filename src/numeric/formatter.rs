// ============================================================================
// Numeric Formatter
// Fixed-precision rounding that strips binary floating-point noise
// ============================================================================

use super::errors::{CalcError, CalcResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept by [`format_number`].
pub const PRECISION: u32 = 8;

/// Compute 10^n at compile time
const fn pow10(n: u32) -> f64 {
    let mut result = 1.0;
    let mut i = 0;
    while i < n {
        result *= 10.0;
        i += 1;
    }
    result
}

/// The scale factor (10^PRECISION)
const SCALE: f64 = pow10(PRECISION);

/// Round `x` to [`PRECISION`] decimal places.
///
/// Multiplies by 10^8, rounds half away from zero, divides back. This
/// removes noise below the eighth decimal place, so `0.1 + 0.2` formats
/// to exactly `0.3`.
///
/// The range is not clamped. For magnitudes close to `f64::MAX` the
/// intermediate product overflows and the result is whatever IEEE-754
/// arithmetic yields.
///
/// # Example
/// ```
/// use calculator_engine::numeric::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), 0.3);
/// assert_eq!(format_number(1.0 / 3.0), 0.33333333);
/// ```
#[inline]
pub fn format_number(x: f64) -> f64 {
    (x * SCALE).round() / SCALE
}

/// Convert a formatted value to `rust_decimal::Decimal`.
///
/// Intended for display at API boundaries. The value is rounded to
/// [`PRECISION`] places with the same half-away-from-zero rule and
/// normalized (no trailing zeros).
///
/// # Errors
/// Returns `InvalidInput` if `x` is not finite or is outside the range
/// `Decimal` can represent.
pub fn to_decimal(x: f64) -> CalcResult<Decimal> {
    if !x.is_finite() {
        return Err(CalcError::InvalidInput);
    }

    let d = Decimal::from_f64(x).ok_or(CalcError::InvalidInput)?;
    Ok(d
        .round_dp_with_strategy(PRECISION, RoundingStrategy::MidpointAwayFromZero)
        .normalize())
}

/// Render a value the way a calculator display shows it: formatted, with
/// no trailing zeros and no decimal point for whole numbers.
pub fn display_number(x: f64) -> String {
    let formatted = format_number(x);
    if formatted == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    formatted.to_string()
}

/// Parse display text into a finite number.
///
/// # Errors
/// Returns `InvalidInput` for empty or unparsable text and for `NaN`/`inf`.
pub fn parse_number(s: &str) -> CalcResult<f64> {
    let value: f64 = s.trim().parse().map_err(|_| CalcError::InvalidInput)?;
    ensure_finite(value)
}

/// Reject NaN and infinities.
#[inline]
pub fn ensure_finite(x: f64) -> CalcResult<f64> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(CalcError::InvalidInput)
    }
}

/// Format a computed result, failing with `Overflow` if finite inputs
/// produced a non-finite value.
#[inline]
pub(crate) fn finish(x: f64) -> CalcResult<f64> {
    let formatted = format_number(x);
    if formatted.is_finite() {
        Ok(formatted)
    } else {
        Err(CalcError::Overflow)
    }
}

// ============================================================================
// Tests
// ============================================================================
