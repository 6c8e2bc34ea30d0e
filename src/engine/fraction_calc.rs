// ============================================================================
// Fraction Calculator
// Binary fraction operations with a step-by-step explanation
// ============================================================================

use crate::domain::Fraction;
use crate::numeric::{CalcError, CalcResult};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Steps rarely exceed six lines, keep them inline
pub type Steps = SmallVec<[String; 6]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FractionOperator {
    /// Apply the operation, returning the simplified result.
    pub fn apply(self, left: Fraction, right: Fraction) -> CalcResult<Fraction> {
        match self {
            FractionOperator::Add => left.checked_add(right),
            FractionOperator::Subtract => left.checked_sub(right),
            FractionOperator::Multiply => left.checked_mul(right),
            FractionOperator::Divide => left.checked_div(right),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FractionOperator::Add => "+",
            FractionOperator::Subtract => "-",
            FractionOperator::Multiply => "×",
            FractionOperator::Divide => "÷",
        }
    }
}

/// A completed fraction operation and how it was worked out
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FractionCalculation {
    pub left: Fraction,
    pub operator: FractionOperator,
    pub right: Fraction,
    pub result: Fraction,
    pub steps: Steps,
}

impl FractionCalculation {
    /// `"1/2 + 1/3"`
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.left, self.operator.symbol(), self.right)
    }
}

impl fmt::Display for FractionCalculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// Evaluate `left op right` and record the working.
///
/// # Errors
/// Propagates the fraction operation's error (`DivisionByZero`,
/// `InvalidFraction` or `Overflow`); no steps are produced on failure.
///
/// # Example
/// ```
/// use calculator_engine::domain::Fraction;
/// use calculator_engine::engine::fraction_calc::{calculate, FractionOperator};
///
/// let calc = calculate(Fraction::new(1, 2), FractionOperator::Add, Fraction::new(1, 3))?;
/// assert_eq!(calc.to_string(), "1/2 + 1/3 = 5/6");
/// assert_eq!(calc.steps[0], "Find LCD: 2 × 3 = 6");
/// # Ok::<(), calculator_engine::numeric::CalcError>(())
/// ```
pub fn calculate(
    left: Fraction,
    operator: FractionOperator,
    right: Fraction,
) -> CalcResult<FractionCalculation> {
    let result = operator.apply(left, right)?;

    let (n1, d1) = terms(left);
    let (n2, d2) = terms(right);
    let mut steps = Steps::new();

    let (numerator, denominator) = match operator {
        FractionOperator::Add | FractionOperator::Subtract => {
            let lcd = d1 * d2;
            let a = n1 * d2;
            let b = n2 * d1;
            // Raw terms are not reduced, so the combined numerator can leave i128
            let (verb, sign, combined) = if operator == FractionOperator::Add {
                ("Add", "+", a.checked_add(b))
            } else {
                ("Subtract", "-", a.checked_sub(b))
            };
            let combined = combined.ok_or(CalcError::Overflow)?;

            steps.push(format!("Find LCD: {} × {} = {}", d1, d2, lcd));
            steps.push(format!("Convert fractions: {}/{} = {}/{}", n1, d1, a, lcd));
            steps.push(format!("Convert fractions: {}/{} = {}/{}", n2, d2, b, lcd));
            steps.push(format!(
                "{} numerators: {} {} {} = {}",
                verb, a, sign, b, combined
            ));
            (combined, lcd)
        },
        FractionOperator::Multiply => {
            steps.push(format!(
                "Multiply numerators: {} × {} = {}",
                n1,
                n2,
                n1 * n2
            ));
            steps.push(format!(
                "Multiply denominators: {} × {} = {}",
                d1,
                d2,
                d1 * d2
            ));
            (n1 * n2, d1 * d2)
        },
        FractionOperator::Divide => {
            steps.push(format!(
                "Find reciprocal of {}/{} = {}/{}",
                n2, d2, d2, n2
            ));
            steps.push(format!("Multiply: {}/{} × {}/{}", n1, d1, d2, n2));
            steps.push(format!(
                "Multiply numerators: {} × {} = {}",
                n1,
                d2,
                n1 * d2
            ));
            steps.push(format!(
                "Multiply denominators: {} × {} = {}",
                d1,
                n2,
                d1 * n2
            ));
            (n1 * d2, d1 * n2)
        },
    };

    steps.push(format!("Result: {}/{}", numerator, denominator));
    if numerator != i128::from(result.numerator())
        || denominator != i128::from(result.denominator())
    {
        steps.push(format!("Simplify: {}", result));
    }

    Ok(FractionCalculation {
        left,
        operator,
        right,
        result,
        steps,
    })
}

#[inline]
fn terms(f: Fraction) -> (i128, i128) {
    (i128::from(f.numerator()), i128::from(f.denominator()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d)
    }

    #[test]
    fn test_addition_steps() {
        let calc = calculate(frac(1, 2), FractionOperator::Add, frac(1, 3)).unwrap();

        assert_eq!(calc.result, frac(5, 6));
        assert_eq!(
            calc.steps.as_slice(),
            &[
                "Find LCD: 2 × 3 = 6",
                "Convert fractions: 1/2 = 3/6",
                "Convert fractions: 1/3 = 2/6",
                "Add numerators: 3 + 2 = 5",
                "Result: 5/6",
            ]
        );
    }

    #[test]
    fn test_subtraction_simplifies() {
        let calc = calculate(frac(3, 4), FractionOperator::Subtract, frac(1, 4)).unwrap();

        assert_eq!(calc.result, frac(1, 2));
        assert_eq!(calc.steps[3], "Subtract numerators: 12 - 4 = 8");
        assert_eq!(calc.steps[4], "Result: 8/16");
        assert_eq!(calc.steps.last().unwrap(), "Simplify: 1/2");
    }

    #[test]
    fn test_multiplication_steps() {
        let calc = calculate(frac(2, 3), FractionOperator::Multiply, frac(3, 4)).unwrap();

        assert_eq!(calc.result, frac(1, 2));
        assert_eq!(calc.steps[0], "Multiply numerators: 2 × 3 = 6");
        assert_eq!(calc.steps[1], "Multiply denominators: 3 × 4 = 12");
        assert_eq!(calc.steps.len(), 4);
    }

    #[test]
    fn test_division_steps() {
        let calc = calculate(frac(3, 4), FractionOperator::Divide, frac(2, 3)).unwrap();

        assert_eq!(calc.result, frac(9, 8));
        assert_eq!(calc.steps[0], "Find reciprocal of 2/3 = 3/2");
        assert_eq!(calc.steps[1], "Multiply: 3/4 × 3/2");
        assert_eq!(calc.steps.last().unwrap(), "Result: 9/8");
        assert_eq!(calc.to_string(), "3/4 ÷ 2/3 = 9/8");
    }

    #[test]
    fn test_division_by_zero_fraction() {
        assert_eq!(
            calculate(frac(5, 1), FractionOperator::Divide, frac(0, 1)),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(
            calculate(frac(1, 0), FractionOperator::Add, frac(1, 2)),
            Err(CalcError::InvalidFraction)
        );
    }

    #[test]
    fn test_extreme_unreduced_operands() {
        let one = frac(i64::MIN, i64::MIN);
        assert_eq!(
            calculate(one, FractionOperator::Add, one),
            Err(CalcError::Overflow)
        );

        let calc = calculate(one, FractionOperator::Multiply, one).unwrap();
        assert_eq!(calc.result, Fraction::ONE);
    }

    #[test]
    fn test_whole_result_display() {
        let calc = calculate(frac(1, 2), FractionOperator::Divide, frac(1, 4)).unwrap();
        assert_eq!(calc.to_string(), "1/2 ÷ 1/4 = 2");
    }
}
