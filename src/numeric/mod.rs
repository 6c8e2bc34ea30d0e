// ============================================================================
// Numeric Module
// Error taxonomy and fixed-precision formatting for calculator results
// ============================================================================
//
// This module provides:
// - CalcError: Error type for every calculation in the crate
// - format_number: 8-decimal rounding applied to every real result
// - Display/parse helpers for calculator display text
//
// Design principles:
// - All operations return Result (no panics)
// - NaN and infinities never escape as values

mod errors;
mod formatter;

pub use errors::{CalcError, CalcResult};
pub(crate) use formatter::finish;
pub use formatter::{
    display_number, ensure_finite, format_number, parse_number, to_decimal, PRECISION,
};
