// ============================================================================
// Calculator State Machine
// Pure reducer from (state, key) to the next state
// ============================================================================
//
// Phases:
//   Idle -> OperandEntered -> OperatorChosen -> ResultShown
//
// The reducer never mutates its input. On error the caller keeps the
// previous state, so a rejected key has no effect.

use super::arithmetic::{self, Operator};
use super::keypad::{Key, MemoryKey};
use crate::domain::CalculatorConfig;
use crate::numeric::{display_number, parse_number, CalcError, CalcResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Fresh display showing "0"
    #[default]
    Idle,
    /// User is typing an operand
    OperandEntered,
    /// Operator pressed, waiting for the next operand
    OperatorChosen,
    /// Result of `=` or a function is on the display
    ResultShown,
}

impl Phase {
    /// Next digit starts a new operand instead of extending the display
    fn awaits_operand(self) -> bool {
        matches!(self, Phase::OperatorChosen | Phase::ResultShown)
    }
}

/// A calculation finished by this transition, for history
#[derive(Debug, Clone, PartialEq)]
pub struct Completed {
    pub expression: String,
    pub result: String,
}

/// Output of [`CalculatorState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    pub completed: Option<Completed>,
    /// Memory register value when the key changed it
    pub memory_changed: Option<f64>,
}

impl Transition {
    fn to(state: CalculatorState) -> Self {
        Self {
            state,
            completed: None,
            memory_changed: None,
        }
    }

    fn with_completed(mut self, expression: String, result: String) -> Self {
        self.completed = Some(Completed { expression, result });
        self
    }

    fn with_memory(mut self) -> Self {
        self.memory_changed = Some(self.state.memory);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorState {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    memory: f64,
    phase: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            memory: 0.0,
            phase: Phase::Idle,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Current display parsed as a number
    pub fn value(&self) -> CalcResult<f64> {
        parse_number(&self.display)
    }

    /// Put `value` on the display as the current operand (memory recall,
    /// constants, history recall).
    pub fn load(&self, value: f64) -> CalculatorState {
        let mut next = self.clone();
        next.display = display_number(value);
        next.phase = Phase::OperandEntered;
        next
    }

    // ========================================================================
    // Reducer
    // ========================================================================

    /// Apply a key press.
    ///
    /// # Errors
    /// - `InvalidInput` for a scientific key on a basic keypad, a digit above 9,
    ///   or an unparsable display
    /// - any error of the evaluated operation (`DivisionByZero`, `Domain`, ...)
    pub fn apply(&self, key: Key, config: &CalculatorConfig) -> CalcResult<Transition> {
        if key.is_scientific() && !config.is_scientific() {
            return Err(CalcError::InvalidInput);
        }

        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::DecimalPoint => Ok(Transition::to(self.input_decimal())),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => Ok(Transition::to(CalculatorState {
                memory: self.memory,
                ..CalculatorState::new()
            })),
            Key::ClearEntry => Ok(Transition::to(self.clear_entry())),
            Key::ToggleSign => Ok(Transition::to(self.toggle_sign())),
            Key::Percent => {
                let value = arithmetic::percent(self.value()?)?;
                let mut next = self.clone();
                next.display = display_number(value);
                if next.phase == Phase::Idle {
                    next.phase = Phase::OperandEntered;
                }
                Ok(Transition::to(next))
            },
            Key::Memory(memory_key) => self.memory_key(memory_key),
            Key::Function(function) => {
                let operand = self.value()?;
                let result = function.apply(operand, config.angle_mode)?;
                let result_text = display_number(result);

                let mut next = self.clone();
                next.display = result_text.clone();
                next.phase = self.after_immediate();
                Ok(Transition::to(next)
                    .with_completed(function.expression(operand, config.angle_mode), result_text))
            },
            Key::Constant(constant) => {
                let next = self.load(constant.value());
                let result_text = next.display.clone();
                Ok(Transition::to(next).with_completed(constant.symbol().to_string(), result_text))
            },
        }
    }

    fn input_digit(&self, digit: u8) -> CalcResult<Transition> {
        if digit > 9 {
            return Err(CalcError::InvalidInput);
        }

        let mut next = self.clone();
        let digit = char::from(b'0' + digit);
        if self.phase.awaits_operand() || self.display == "0" {
            next.display = digit.to_string();
        } else if self.display == "-0" {
            next.display = format!("-{}", digit);
        } else {
            next.display.push(digit);
        }
        next.phase = Phase::OperandEntered;
        Ok(Transition::to(next))
    }

    fn input_decimal(&self) -> CalculatorState {
        let mut next = self.clone();
        if self.phase.awaits_operand() {
            next.display = "0.".to_string();
        } else if !self.display.contains('.') {
            next.display.push('.');
        }
        next.phase = Phase::OperandEntered;
        next
    }

    fn choose_operator(&self, op: Operator) -> CalcResult<Transition> {
        let mut next = self.clone();
        next.pending = Some(op);
        next.phase = Phase::OperatorChosen;

        // Pressing a second operator replaces the first
        if self.phase == Phase::OperatorChosen {
            return Ok(Transition::to(next));
        }

        let value = self.value()?;
        match (self.accumulator, self.pending) {
            (Some(acc), Some(pending)) => {
                let result = pending.apply(acc, value)?;
                next.display = display_number(result);
                next.accumulator = Some(result);
            },
            _ => next.accumulator = Some(value),
        }
        Ok(Transition::to(next))
    }

    fn equals(&self) -> CalcResult<Transition> {
        let (acc, pending) = match (self.accumulator, self.pending) {
            (Some(acc), Some(pending)) => (acc, pending),
            _ => return Ok(Transition::to(self.clone())),
        };

        let rhs = self.value()?;
        let result = pending.apply(acc, rhs)?;
        let result_text = display_number(result);
        let expression = format!(
            "{} {} {}",
            display_number(acc),
            pending.symbol(),
            display_number(rhs)
        );

        let next = CalculatorState {
            display: result_text.clone(),
            accumulator: None,
            pending: None,
            memory: self.memory,
            phase: Phase::ResultShown,
        };
        Ok(Transition::to(next).with_completed(expression, result_text))
    }

    fn clear_entry(&self) -> CalculatorState {
        let mut next = self.clone();
        next.display = "0".to_string();
        if self.phase == Phase::ResultShown {
            next.phase = Phase::Idle;
        }
        next
    }

    fn toggle_sign(&self) -> CalculatorState {
        let mut next = self.clone();
        if let Some(rest) = self.display.strip_prefix('-') {
            next.display = rest.to_string();
        } else if self.display != "0" {
            next.display = format!("-{}", self.display);
        }
        next
    }

    fn memory_key(&self, key: MemoryKey) -> CalcResult<Transition> {
        let mut next = self.clone();
        match key {
            MemoryKey::Recall => return Ok(Transition::to(self.load(self.memory))),
            MemoryKey::Clear => next.memory = 0.0,
            MemoryKey::Store => next.memory = self.value()?,
            MemoryKey::Add => next.memory = arithmetic::add(self.memory, self.value()?)?,
            MemoryKey::Subtract => {
                next.memory = arithmetic::subtract(self.memory, self.value()?)?
            },
        }
        Ok(Transition::to(next).with_memory())
    }

    /// Phase after a function replaces the display: the result is the
    /// right operand when an operator is pending, otherwise a final result.
    fn after_immediate(&self) -> Phase {
        if self.pending.is_some() {
            Phase::OperandEntered
        } else {
            Phase::ResultShown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scientific::{Constant, ScientificFunction};

    fn basic() -> CalculatorConfig {
        CalculatorConfig::basic()
    }

    fn scientific() -> CalculatorConfig {
        CalculatorConfig::scientific()
    }

    fn run(keys: &[Key], config: &CalculatorConfig) -> CalculatorState {
        keys.iter().fold(CalculatorState::new(), |state, key| {
            state.apply(*key, config).unwrap().state
        })
    }

    fn digits(n: &str) -> Vec<Key> {
        n.chars()
            .map(|c| match c {
                '.' => Key::DecimalPoint,
                c => Key::Digit(c.to_digit(10).unwrap() as u8),
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.pending(), None);
        assert_eq!(state.memory(), 0.0);
    }

    #[test]
    fn test_digit_entry() {
        let state = run(&digits("0012.5"), &basic());
        assert_eq!(state.display(), "12.5");
        assert_eq!(state.phase(), Phase::OperandEntered);
    }

    #[test]
    fn test_single_decimal_point() {
        let state = run(&digits("1.2.3"), &basic());
        assert_eq!(state.display(), "1.23");
    }

    #[test]
    fn test_phase_progression() {
        let config = basic();
        let s0 = CalculatorState::new();
        let s1 = s0.apply(Key::Digit(5), &config).unwrap().state;
        assert_eq!(s1.phase(), Phase::OperandEntered);

        let s2 = s1.apply(Key::Operator(Operator::Add), &config).unwrap().state;
        assert_eq!(s2.phase(), Phase::OperatorChosen);
        assert_eq!(s2.accumulator(), Some(5.0));

        let s3 = s2.apply(Key::Digit(3), &config).unwrap().state;
        assert_eq!(s3.phase(), Phase::OperandEntered);
        assert_eq!(s3.display(), "3");

        let t = s3.apply(Key::Equals, &config).unwrap();
        assert_eq!(t.state.phase(), Phase::ResultShown);
        assert_eq!(t.state.display(), "8");
        assert_eq!(
            t.completed,
            Some(Completed {
                expression: "5 + 3".to_string(),
                result: "8".to_string(),
            })
        );
    }

    #[test]
    fn test_chained_operators_evaluate_left_to_right() {
        let mut keys = digits("2");
        keys.push(Key::Operator(Operator::Add));
        keys.extend(digits("3"));
        keys.push(Key::Operator(Operator::Multiply));
        let state = run(&keys, &basic());

        assert_eq!(state.display(), "5");
        assert_eq!(state.accumulator(), Some(5.0));
        assert_eq!(state.pending(), Some(Operator::Multiply));
    }

    #[test]
    fn test_repeated_operator_replaces_pending() {
        let mut keys = digits("5");
        keys.push(Key::Operator(Operator::Add));
        keys.push(Key::Operator(Operator::Subtract));
        keys.extend(digits("2"));
        keys.push(Key::Equals);
        let state = run(&keys, &basic());

        assert_eq!(state.display(), "3");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let state = run(&digits("42"), &basic());
        let t = state.apply(Key::Equals, &basic()).unwrap();
        assert_eq!(t.state, state);
        assert!(t.completed.is_none());
    }

    #[test]
    fn test_digit_after_result_starts_new_operand() {
        let mut keys = digits("2");
        keys.push(Key::Operator(Operator::Multiply));
        keys.extend(digits("4"));
        keys.push(Key::Equals);
        keys.extend(digits("7"));
        let state = run(&keys, &basic());

        assert_eq!(state.display(), "7");
        assert_eq!(state.accumulator(), None);
    }

    #[test]
    fn test_operator_after_result_continues() {
        let mut keys = digits("2");
        keys.push(Key::Operator(Operator::Multiply));
        keys.extend(digits("4"));
        keys.push(Key::Equals);
        keys.push(Key::Operator(Operator::Subtract));
        keys.extend(digits("3"));
        keys.push(Key::Equals);
        let state = run(&keys, &basic());

        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_float_noise_removed() {
        let mut keys = digits("0.1");
        keys.push(Key::Operator(Operator::Add));
        keys.extend(digits("0.2"));
        keys.push(Key::Equals);
        let state = run(&keys, &basic());

        assert_eq!(state.display(), "0.3");
    }

    #[test]
    fn test_division_by_zero_leaves_state() {
        let mut keys = digits("5");
        keys.push(Key::Operator(Operator::Divide));
        keys.extend(digits("0"));
        let state = run(&keys, &basic());

        assert_eq!(
            state.apply(Key::Equals, &basic()),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(state.display(), "0");
        assert_eq!(state.pending(), Some(Operator::Divide));
    }

    #[test]
    fn test_clear_keeps_memory() {
        let config = scientific();
        let mut keys = digits("9");
        keys.push(Key::Memory(MemoryKey::Store));
        keys.push(Key::Operator(Operator::Add));
        keys.push(Key::Clear);
        let state = run(&keys, &config);

        assert_eq!(state.display(), "0");
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.pending(), None);
        assert_eq!(state.memory(), 9.0);
    }

    #[test]
    fn test_clear_entry() {
        let mut keys = digits("7");
        keys.push(Key::Operator(Operator::Add));
        keys.extend(digits("12"));
        keys.push(Key::ClearEntry);
        keys.extend(digits("3"));
        keys.push(Key::Equals);
        let state = run(&keys, &basic());

        assert_eq!(state.display(), "10");
    }

    #[test]
    fn test_toggle_sign() {
        let mut keys = digits("12");
        keys.push(Key::ToggleSign);
        let state = run(&keys, &basic());
        assert_eq!(state.display(), "-12");

        let back = state.apply(Key::ToggleSign, &basic()).unwrap().state;
        assert_eq!(back.display(), "12");

        let zero = CalculatorState::new()
            .apply(Key::ToggleSign, &basic())
            .unwrap()
            .state;
        assert_eq!(zero.display(), "0");
    }

    #[test]
    fn test_percent_key() {
        let mut keys = digits("50");
        keys.push(Key::Percent);
        let state = run(&keys, &basic());
        assert_eq!(state.display(), "0.5");
    }

    #[test]
    fn test_modulo_operator() {
        let mut keys = digits("10");
        keys.push(Key::Operator(Operator::Modulo));
        keys.extend(digits("4"));
        keys.push(Key::Equals);
        let state = run(&keys, &basic());
        assert_eq!(state.display(), "2");
    }

    #[test]
    fn test_scientific_keys_rejected_on_basic_keypad() {
        let state = CalculatorState::new();
        assert_eq!(
            state.apply(Key::Function(ScientificFunction::Sqrt), &basic()),
            Err(CalcError::InvalidInput)
        );
        assert_eq!(
            state.apply(Key::Operator(Operator::Power), &basic()),
            Err(CalcError::InvalidInput)
        );
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            CalculatorState::new().apply(Key::Digit(10), &basic()),
            Err(CalcError::InvalidInput)
        );
    }

    #[test]
    fn test_function_key() {
        let config = scientific();
        let state = run(&digits("16"), &config);
        let t = state
            .apply(Key::Function(ScientificFunction::Sqrt), &config)
            .unwrap();

        assert_eq!(t.state.display(), "4");
        assert_eq!(t.state.phase(), Phase::ResultShown);
        assert_eq!(t.completed.unwrap().expression, "√16");
    }

    #[test]
    fn test_function_on_right_operand() {
        let config = scientific();
        let mut keys = digits("2");
        keys.push(Key::Operator(Operator::Add));
        keys.extend(digits("9"));
        keys.push(Key::Function(ScientificFunction::Sqrt));
        keys.push(Key::Equals);
        let state = run(&keys, &config);

        assert_eq!(state.display(), "5");
    }

    #[test]
    fn test_function_domain_error() {
        let config = scientific();
        let state = run(&[Key::Digit(5), Key::ToggleSign], &config);
        assert_eq!(
            state.apply(Key::Function(ScientificFunction::Ln), &config),
            Err(CalcError::Domain)
        );
    }

    #[test]
    fn test_power_operator() {
        let config = scientific();
        let mut keys = digits("2");
        keys.push(Key::Operator(Operator::Power));
        keys.extend(digits("8"));
        keys.push(Key::Equals);
        let state = run(&keys, &config);
        assert_eq!(state.display(), "256");
    }

    #[test]
    fn test_memory_keys() {
        let config = scientific();
        let s = run(&digits("5"), &config);

        let t = s.apply(Key::Memory(MemoryKey::Add), &config).unwrap();
        assert_eq!(t.memory_changed, Some(5.0));

        let t = t
            .state
            .apply(Key::Memory(MemoryKey::Add), &config)
            .unwrap();
        assert_eq!(t.state.memory(), 10.0);

        let t = t
            .state
            .apply(Key::Memory(MemoryKey::Subtract), &config)
            .unwrap();
        assert_eq!(t.state.memory(), 5.0);

        let cleared = t.state.apply(Key::Clear, &config).unwrap().state;
        let recalled = cleared
            .apply(Key::Memory(MemoryKey::Recall), &config)
            .unwrap();
        assert_eq!(recalled.state.display(), "5");
        assert_eq!(recalled.memory_changed, None);

        let t = recalled
            .state
            .apply(Key::Memory(MemoryKey::Clear), &config)
            .unwrap();
        assert_eq!(t.state.memory(), 0.0);
    }

    #[test]
    fn test_constant_key() {
        let config = scientific();
        let t = CalculatorState::new()
            .apply(Key::Constant(Constant::Pi), &config)
            .unwrap();

        assert_eq!(t.state.display(), "3.14159265");
        assert_eq!(t.state.phase(), Phase::OperandEntered);
        assert_eq!(t.completed.unwrap().expression, "π");
    }
}
