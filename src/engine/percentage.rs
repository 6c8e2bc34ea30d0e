// ============================================================================
// Percentage Formulas
// Stateless two-operand percentage calculations
// ============================================================================
//
// Every formula rejects non-finite operands, fails with DivisionByZero when
// its denominator term is zero, and rounds its result with format_number.

use crate::numeric::{ensure_finite, finish, CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `part` as a percentage of `whole`: `(part / whole) * 100`.
///
/// # Errors
/// Returns `DivisionByZero` if `whole == 0`.
///
/// # Example
/// ```
/// use calculator_engine::engine::percentage::what_percent_of;
///
/// assert_eq!(what_percent_of(25.0, 100.0), Ok(25.0));
/// ```
pub fn what_percent_of(part: f64, whole: f64) -> CalcResult<f64> {
    let part = ensure_finite(part)?;
    let whole = ensure_finite(whole)?;
    if whole == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish((part / whole) * 100.0)
}

/// `percentage` percent of `whole`: `(percentage / 100) * whole`.
pub fn find_percentage(percentage: f64, whole: f64) -> CalcResult<f64> {
    let percentage = ensure_finite(percentage)?;
    let whole = ensure_finite(whole)?;
    finish((percentage / 100.0) * whole)
}

/// Relative change from `original` to `new`: `((new - original) / original) * 100`.
///
/// # Errors
/// Returns `DivisionByZero` if `original == 0`.
pub fn percentage_increase(original: f64, new: f64) -> CalcResult<f64> {
    let original = ensure_finite(original)?;
    let new = ensure_finite(new)?;
    if original == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish(((new - original) / original) * 100.0)
}

/// Relative drop from `original` to `new`: `((original - new) / original) * 100`.
///
/// # Errors
/// Returns `DivisionByZero` if `original == 0`.
pub fn percentage_decrease(original: f64, new: f64) -> CalcResult<f64> {
    let original = ensure_finite(original)?;
    let new = ensure_finite(new)?;
    if original == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish(((original - new) / original) * 100.0)
}

/// Difference relative to the mean: `|(a - b) / ((a + b) / 2)| * 100`.
///
/// Symmetric in its arguments and never negative, including for negative
/// means.
///
/// # Errors
/// Returns `DivisionByZero` if the mean is zero.
pub fn percentage_difference(a: f64, b: f64) -> CalcResult<f64> {
    let a = ensure_finite(a)?;
    let b = ensure_finite(b)?;
    let average = (a + b) / 2.0;
    if average == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish(((a - b) / average).abs() * 100.0)
}

/// `value` raised by `percentage` percent: `value + value * percentage / 100`.
pub fn increase_by(value: f64, percentage: f64) -> CalcResult<f64> {
    let value = ensure_finite(value)?;
    let percentage = ensure_finite(percentage)?;
    finish(value + (value * percentage) / 100.0)
}

/// `value` lowered by `percentage` percent: `value - value * percentage / 100`.
pub fn decrease_by(value: f64, percentage: f64) -> CalcResult<f64> {
    let value = ensure_finite(value)?;
    let percentage = ensure_finite(percentage)?;
    finish(value - (value * percentage) / 100.0)
}

// ============================================================================
// Formula Selection
// ============================================================================

/// Formula selected on a percentage calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PercentageFormula {
    WhatPercentOf,
    FindPercentage,
    Increase,
    Decrease,
    Difference,
    IncreaseBy,
    DecreaseBy,
}

impl PercentageFormula {
    pub const ALL: [PercentageFormula; 7] = [
        PercentageFormula::WhatPercentOf,
        PercentageFormula::FindPercentage,
        PercentageFormula::Increase,
        PercentageFormula::Decrease,
        PercentageFormula::Difference,
        PercentageFormula::IncreaseBy,
        PercentageFormula::DecreaseBy,
    ];

    pub fn evaluate(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            PercentageFormula::WhatPercentOf => what_percent_of(a, b),
            PercentageFormula::FindPercentage => find_percentage(a, b),
            PercentageFormula::Increase => percentage_increase(a, b),
            PercentageFormula::Decrease => percentage_decrease(a, b),
            PercentageFormula::Difference => percentage_difference(a, b),
            PercentageFormula::IncreaseBy => increase_by(a, b),
            PercentageFormula::DecreaseBy => decrease_by(a, b),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PercentageFormula::WhatPercentOf => "What percent of",
            PercentageFormula::FindPercentage => "Find percentage of",
            PercentageFormula::Increase => "Percentage increase",
            PercentageFormula::Decrease => "Percentage decrease",
            PercentageFormula::Difference => "Percentage difference",
            PercentageFormula::IncreaseBy => "Increase by percentage",
            PercentageFormula::DecreaseBy => "Decrease by percentage",
        }
    }
}
