// ============================================================================
// Keypad
// Key presses understood by the calculator state machine
// ============================================================================

use super::arithmetic::Operator;
use super::scientific::{Constant, ScientificFunction};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemoryKey {
    /// MC
    Clear,
    /// MR
    Recall,
    /// MS
    Store,
    /// M+
    Add,
    /// M-
    Subtract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    /// C: reset everything but memory
    Clear,
    /// CE: reset the display only
    ClearEntry,
    ToggleSign,
    Percent,
    Memory(MemoryKey),
    Function(ScientificFunction),
    Constant(Constant),
}

impl Key {
    /// Map a keyboard key name to a calculator key.
    ///
    /// Digits, `.`, `+ - * /` (and `× ÷ ^`), `%`, `Enter`/`=`,
    /// `Escape`/`c`/`C`, `Backspace` and `±` are recognised.
    pub fn from_keyboard(key: &str) -> Option<Key> {
        let key = match key {
            "." => Key::DecimalPoint,
            "+" => Key::Operator(Operator::Add),
            "-" => Key::Operator(Operator::Subtract),
            "*" | "×" => Key::Operator(Operator::Multiply),
            "/" | "÷" => Key::Operator(Operator::Divide),
            "^" => Key::Operator(Operator::Power),
            "%" => Key::Percent,
            "Enter" | "=" => Key::Equals,
            "Escape" | "c" | "C" => Key::Clear,
            "Backspace" => Key::ClearEntry,
            "±" => Key::ToggleSign,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Digit(c.to_digit(10)? as u8),
                    _ => return None,
                }
            },
        };
        Some(key)
    }

    /// Keys only available on the scientific keypad
    pub fn is_scientific(&self) -> bool {
        match self {
            Key::Operator(op) => op.is_scientific(),
            Key::Memory(_) | Key::Function(_) | Key::Constant(_) => true,
            _ => false,
        }
    }
}
