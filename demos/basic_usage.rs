// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator_engine::engine::fraction_calc;
use calculator_engine::numeric::to_decimal;
use calculator_engine::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    calculator_engine::utils::init_logging(true);

    println!("=== Calculator Engine Example ===\n");

    // Keypad session on the scientific layout
    let calc = Calculator::new(CalculatorConfig::scientific(), Arc::new(LoggingEventHandler))
        .expect("valid config");

    println!("Typing 0.1 + 0.2 =");
    calc.press_keys("0.1+0.2=").expect("valid keys");
    println!("  Display: {}", calc.display());

    println!("Taking the square root of 2");
    calc.press_keys("2").expect("valid keys");
    calc.press(Key::Function(ScientificFunction::Sqrt))
        .expect("sqrt of a positive number");
    println!("  Display: {}", calc.display());

    println!("Dividing by zero");
    if let Err(error) = calc.press_keys("5/0=") {
        println!("  Rejected: {} (display still {})", error, calc.display());
    }

    println!("\n=== History ===");
    for entry in calc.history() {
        println!("  {}", entry);
    }

    // Fractions with step-by-step working
    println!("\n=== Fractions ===");
    let left: Fraction = "1 1/2".parse().expect("mixed number");
    let right: Fraction = "2/3".parse().expect("fraction");

    for operator in [
        FractionOperator::Add,
        FractionOperator::Subtract,
        FractionOperator::Multiply,
        FractionOperator::Divide,
    ] {
        match fraction_calc::calculate(left, operator, right) {
            Ok(calculation) => {
                println!("\n{}", calculation);
                for step in &calculation.steps {
                    println!("  {}", step);
                }
                if let Ok(mixed) = calculation.result.to_mixed() {
                    println!("  Mixed: {}", mixed);
                }
            },
            Err(error) => println!("\n{} failed: {}", operator.symbol(), error),
        }
    }

    // Percentage formulas
    println!("\n=== Percentages (a = 80, b = 120) ===");
    for formula in PercentageFormula::ALL {
        match formula.evaluate(80.0, 120.0).and_then(to_decimal) {
            Ok(value) => println!("  {:<24} {}", formula.label(), value),
            Err(error) => println!("  {:<24} error: {}", formula.label(), error),
        }
    }
}
