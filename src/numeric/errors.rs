// ============================================================================
// Calculation Errors
// Error types shared by every numeric operation in the crate
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while evaluating a calculation.
///
/// All variants are permanent for the given input: the operations are pure,
/// so retrying with the same operands yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Divisor (or the denominator term of a formula) evaluated to zero
    DivisionByZero,
    /// Fraction has a zero denominator or a non-integral term
    InvalidFraction,
    /// Operand is not a finite number, or text could not be parsed
    InvalidInput,
    /// Argument lies outside the domain of a scientific function
    Domain,
    /// Result cannot be represented (integer terms leave i64, or a finite
    /// input produced an infinite result)
    Overflow,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::InvalidFraction => {
                write!(f, "invalid fraction: denominator must be a non-zero integer")
            },
            CalcError::InvalidInput => write!(f, "invalid input: value is not a finite number"),
            CalcError::Domain => write!(f, "argument outside the function's domain"),
            CalcError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
