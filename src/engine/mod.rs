// ============================================================================
// Engine Module
// Contains the calculator business logic
// ============================================================================

pub mod arithmetic;
pub mod calculator;
pub mod fraction_calc;
pub mod keypad;
pub mod percentage;
pub mod scientific;
pub mod state;

pub use arithmetic::Operator;
pub use calculator::Calculator;
pub use fraction_calc::{calculate, FractionCalculation, FractionOperator};
pub use keypad::{Key, MemoryKey};
pub use percentage::PercentageFormula;
pub use scientific::{Constant, ScientificFunction};
pub use state::{CalculatorState, Completed, Phase, Transition};
