// ============================================================================
// Basic Arithmetic
// Four operations plus modulo and percent, each rounded by the formatter
// ============================================================================

use crate::numeric::{ensure_finite, finish, CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operator on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    /// x^y, scientific keypad only
    Power,
}

impl Operator {
    /// Evaluate `lhs op rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => add(lhs, rhs),
            Operator::Subtract => subtract(lhs, rhs),
            Operator::Multiply => multiply(lhs, rhs),
            Operator::Divide => divide(lhs, rhs),
            Operator::Modulo => modulo(lhs, rhs),
            Operator::Power => super::scientific::power(lhs, rhs),
        }
    }

    /// Symbol shown in history expressions
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "%",
            Operator::Power => "^",
        }
    }

    pub fn is_scientific(self) -> bool {
        matches!(self, Operator::Power)
    }
}

#[inline]
fn operands(a: f64, b: f64) -> CalcResult<(f64, f64)> {
    Ok((ensure_finite(a)?, ensure_finite(b)?))
}

/// `a + b`, formatted.
pub fn add(a: f64, b: f64) -> CalcResult<f64> {
    let (a, b) = operands(a, b)?;
    finish(a + b)
}

/// `a - b`, formatted.
pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    let (a, b) = operands(a, b)?;
    finish(a - b)
}

/// `a * b`, formatted.
pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    let (a, b) = operands(a, b)?;
    finish(a * b)
}

/// `a / b`, formatted.
///
/// # Errors
/// Returns `DivisionByZero` if `b == 0`.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    let (a, b) = operands(a, b)?;
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish(a / b)
}

/// Remainder of `a / b` with the sign of `a`, formatted.
///
/// # Errors
/// Returns `DivisionByZero` if `b == 0`.
pub fn modulo(a: f64, b: f64) -> CalcResult<f64> {
    let (a, b) = operands(a, b)?;
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    finish(a % b)
}

/// `x / 100`, formatted (the keypad's % key).
pub fn percent(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(x / 100.0)
}
