// ============================================================================
// Calculator Engine Library
// Numeric kernel for calculator front-ends
// ============================================================================

//! # Calculator Engine
//!
//! The arithmetic core behind a set of calculator pages: fixed-precision
//! rounding, exact fractions, percentage formulas and a keypad state machine.
//!
//! ## Features
//!
//! - **Numeric formatter** rounding every real result to 8 decimal places
//! - **Fraction engine** with overflow-checked arithmetic and step-by-step working
//! - **Percentage formulas** (what percent, increase, decrease, difference)
//! - **Scientific functions** honouring degrees or radians
//! - **Pure reducer** for keypad input, wrapped by a session with history and events
//!
//! ## Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//! use std::sync::Arc;
//!
//! // Keypad session
//! let calc = Calculator::new(CalculatorConfig::basic(), Arc::new(NoOpEventHandler)).unwrap();
//! calc.press_keys("0.1+0.2=").unwrap();
//! assert_eq!(calc.display(), "0.3");
//!
//! // Fractions
//! let sum = Fraction::new(1, 3).checked_add(Fraction::new(1, 6)).unwrap();
//! assert_eq!(sum, Fraction::new(1, 2));
//!
//! // Percentages
//! assert_eq!(percentage::percentage_increase(100.0, 125.0), Ok(25.0));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AngleMode, CalculatorConfig, CalculatorMode, Fraction, History, HistoryEntry, MixedNumber,
    };
    pub use crate::engine::{
        arithmetic, percentage, scientific, Calculator, CalculatorState, Constant,
        FractionCalculation, FractionOperator, Key, MemoryKey, Operator, PercentageFormula, Phase,
        ScientificFunction,
    };
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{display_number, format_number, CalcError, CalcResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::engine::fraction_calc;
    use std::sync::Arc;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d)
    }

    #[test]
    fn test_fraction_scenarios() {
        assert_eq!(frac(1, 3).checked_add(frac(1, 6)), Ok(frac(1, 2)));
        assert_eq!(frac(11, 4).to_mixed().unwrap().to_string(), "2 3/4");
        assert_eq!(
            frac(5, 1).checked_div(frac(0, 1)),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_percentage_scenarios() {
        assert_eq!(percentage::what_percent_of(25.0, 100.0), Ok(25.0));
        assert_eq!(percentage::percentage_increase(100.0, 125.0), Ok(25.0));
        assert_eq!(percentage::percentage_difference(80.0, 120.0), Ok(40.0));
        assert_eq!(
            percentage::percentage_difference(0.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_formatter_removes_residue() {
        assert_eq!(format_number(0.1 + 0.2), 0.3);
        assert_eq!(arithmetic::add(0.1, 0.2), Ok(0.3));
    }

    #[test]
    fn test_percentage_results_as_decimal() {
        use crate::numeric::to_decimal;
        use rust_decimal::Decimal;

        let result = PercentageFormula::WhatPercentOf
            .evaluate(1.0, 3.0)
            .and_then(to_decimal)
            .unwrap();
        assert_eq!(result, Decimal::new(3_333_333_333, 8));
        assert_eq!(result.to_string(), "33.33333333");
    }

    #[test]
    fn test_fraction_page_flow() {
        let left: Fraction = "1 1/2".parse().unwrap();
        let right: Fraction = "3/4".parse().unwrap();

        let calc = fraction_calc::calculate(left, FractionOperator::Multiply, right).unwrap();
        assert_eq!(calc.to_string(), "3/2 × 3/4 = 9/8");
        assert_eq!(calc.result.to_mixed().unwrap().to_string(), "1 1/8");
    }

    #[test]
    fn test_end_to_end_session() {
        let calc = Calculator::new(CalculatorConfig::scientific(), Arc::new(LoggingEventHandler))
            .unwrap();

        let events = calc.press_keys("12+3=").unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, CalculationEvent::CalculationCompleted { .. })));
        assert_eq!(calc.display(), "15");

        // Continue from the result with a scientific function
        calc.press(Key::Function(ScientificFunction::Square)).unwrap();
        assert_eq!(calc.display(), "225");

        calc.press(Key::Memory(MemoryKey::Store)).unwrap();
        calc.press_keys("1/3=").unwrap();
        assert_eq!(calc.display(), "0.33333333");

        calc.press(Key::Memory(MemoryKey::Recall)).unwrap();
        assert_eq!(calc.display(), "225");

        let history = calc.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].to_string(), "1 ÷ 3 = 0.33333333");
        assert_eq!(history[1].to_string(), "15² = 225");
        assert_eq!(history[2].to_string(), "12 + 3 = 15");
    }

    #[test]
    fn test_basic_keypad_rejects_scientific_keys() {
        let calc = Calculator::new(CalculatorConfig::basic(), Arc::new(NoOpEventHandler)).unwrap();
        calc.press_keys("4").unwrap();

        assert_eq!(
            calc.press(Key::Function(ScientificFunction::Sqrt)),
            Err(CalcError::InvalidInput)
        );
        assert_eq!(calc.display(), "4");
    }
}
