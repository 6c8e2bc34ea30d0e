// ============================================================================
// Scientific Functions
// Unary functions, power and constants for the scientific keypad
// ============================================================================

use crate::domain::AngleMode;
use crate::numeric::{display_number, ensure_finite, finish, CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest n for which n! is finite in f64
pub const MAX_FACTORIAL: u32 = 170;

// ============================================================================
// Trigonometry
// ============================================================================

pub fn sin(x: f64, mode: AngleMode) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(mode.to_radians(x).sin())
}

pub fn cos(x: f64, mode: AngleMode) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(mode.to_radians(x).cos())
}

pub fn tan(x: f64, mode: AngleMode) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(mode.to_radians(x).tan())
}

/// Inverse sine, result in `mode` units.
///
/// # Errors
/// Returns `Domain` if `x` is outside [-1, 1].
pub fn asin(x: f64, mode: AngleMode) -> CalcResult<f64> {
    let x = unit_interval(x)?;
    finish(mode.from_radians(x.asin()))
}

/// Inverse cosine, result in `mode` units.
///
/// # Errors
/// Returns `Domain` if `x` is outside [-1, 1].
pub fn acos(x: f64, mode: AngleMode) -> CalcResult<f64> {
    let x = unit_interval(x)?;
    finish(mode.from_radians(x.acos()))
}

pub fn atan(x: f64, mode: AngleMode) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(mode.from_radians(x.atan()))
}

fn unit_interval(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    if !(-1.0..=1.0).contains(&x) {
        return Err(CalcError::Domain);
    }
    Ok(x)
}

// ============================================================================
// Logarithms, Powers and Roots
// ============================================================================

/// Base-10 logarithm.
///
/// # Errors
/// Returns `Domain` if `x <= 0`.
pub fn log10(x: f64) -> CalcResult<f64> {
    let x = positive(x)?;
    finish(x.log10())
}

/// Natural logarithm.
///
/// # Errors
/// Returns `Domain` if `x <= 0`.
pub fn ln(x: f64) -> CalcResult<f64> {
    let x = positive(x)?;
    finish(x.ln())
}

fn positive(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    if x <= 0.0 {
        return Err(CalcError::Domain);
    }
    Ok(x)
}

pub fn exp(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(x.exp())
}

pub fn square(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(x * x)
}

pub fn cube(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(x * x * x)
}

/// `base` raised to `exponent`.
///
/// # Errors
/// - `DivisionByZero` for a zero base with a negative exponent
/// - `Domain` for a negative base with a non-integral exponent
/// - `Overflow` if the result is infinite
pub fn power(base: f64, exponent: f64) -> CalcResult<f64> {
    let base = ensure_finite(base)?;
    let exponent = ensure_finite(exponent)?;
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let result = base.powf(exponent);
    if result.is_nan() {
        return Err(CalcError::Domain);
    }
    finish(result)
}

/// Square root.
///
/// # Errors
/// Returns `Domain` if `x < 0`.
pub fn sqrt(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    if x < 0.0 {
        return Err(CalcError::Domain);
    }
    finish(x.sqrt())
}

pub fn cbrt(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(x.cbrt())
}

/// `n!` for a non-negative integer `n`.
///
/// # Errors
/// - `Domain` if `n` is negative or has a fractional part
/// - `Overflow` if `n > 170`
pub fn factorial(n: f64) -> CalcResult<f64> {
    let n = ensure_finite(n)?;
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::Domain);
    }
    if n > f64::from(MAX_FACTORIAL) {
        return Err(CalcError::Overflow);
    }

    let result = (2..=n as u32).fold(1.0_f64, |acc, i| acc * f64::from(i));
    finish(result)
}

pub fn abs(x: f64) -> CalcResult<f64> {
    let x = ensure_finite(x)?;
    finish(x.abs())
}

// ============================================================================
// Function and Constant Keys
// ============================================================================

/// Unary function key on the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log10,
    Ln,
    Exp,
    Square,
    Cube,
    Sqrt,
    Cbrt,
    Factorial,
    Abs,
}

impl ScientificFunction {
    pub fn apply(self, x: f64, mode: AngleMode) -> CalcResult<f64> {
        match self {
            ScientificFunction::Sin => sin(x, mode),
            ScientificFunction::Cos => cos(x, mode),
            ScientificFunction::Tan => tan(x, mode),
            ScientificFunction::Asin => asin(x, mode),
            ScientificFunction::Acos => acos(x, mode),
            ScientificFunction::Atan => atan(x, mode),
            ScientificFunction::Log10 => log10(x),
            ScientificFunction::Ln => ln(x),
            ScientificFunction::Exp => exp(x),
            ScientificFunction::Square => square(x),
            ScientificFunction::Cube => cube(x),
            ScientificFunction::Sqrt => sqrt(x),
            ScientificFunction::Cbrt => cbrt(x),
            ScientificFunction::Factorial => factorial(x),
            ScientificFunction::Abs => abs(x),
        }
    }

    /// History expression for applying this function to `x`,
    /// e.g. `sin(30°)` or `√16`
    pub fn expression(self, x: f64, mode: AngleMode) -> String {
        let x = display_number(x);
        let degrees = mode == AngleMode::Degrees;

        match self {
            ScientificFunction::Sin | ScientificFunction::Cos | ScientificFunction::Tan => {
                if degrees {
                    format!("{}({}°)", self.name(), x)
                } else {
                    format!("{}({} rad)", self.name(), x)
                }
            },
            ScientificFunction::Asin | ScientificFunction::Acos | ScientificFunction::Atan => {
                if degrees {
                    format!("{}({})°", self.name(), x)
                } else {
                    format!("{}({}) rad", self.name(), x)
                }
            },
            ScientificFunction::Log10 | ScientificFunction::Ln => {
                format!("{}({})", self.name(), x)
            },
            ScientificFunction::Exp => format!("e^({})", x),
            ScientificFunction::Square => format!("{}²", x),
            ScientificFunction::Cube => format!("{}³", x),
            ScientificFunction::Sqrt => format!("√{}", x),
            ScientificFunction::Cbrt => format!("∛{}", x),
            ScientificFunction::Factorial => format!("{}!", x),
            ScientificFunction::Abs => format!("|{}|", x),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ScientificFunction::Sin => "sin",
            ScientificFunction::Cos => "cos",
            ScientificFunction::Tan => "tan",
            ScientificFunction::Asin => "asin",
            ScientificFunction::Acos => "acos",
            ScientificFunction::Atan => "atan",
            ScientificFunction::Log10 => "log",
            ScientificFunction::Ln => "ln",
            ScientificFunction::Exp => "exp",
            ScientificFunction::Square => "sqr",
            ScientificFunction::Cube => "cube",
            ScientificFunction::Sqrt => "sqrt",
            ScientificFunction::Cbrt => "cbrt",
            ScientificFunction::Factorial => "fact",
            ScientificFunction::Abs => "abs",
        }
    }
}

/// Constant key on the scientific keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
        }
    }
}
