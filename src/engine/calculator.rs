// ============================================================================
// Calculator Session
// Drives the state machine, records history and emits events
// ============================================================================

use super::keypad::Key;
use super::state::{CalculatorState, Transition};
use crate::domain::{AngleMode, CalculatorConfig, History, HistoryEntry};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{parse_number, CalcError, CalcResult};
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::Arc;

/// A single calculator session: one display, one memory register, one history
pub struct Calculator {
    /// Keypad layout and angle unit
    config: RwLock<CalculatorConfig>,

    /// Display, pending operation and memory
    state: RwLock<CalculatorState>,

    /// Completed calculations, newest first
    history: RwLock<History>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new session
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            history: RwLock::new(History::with_capacity(config.history_capacity)),
            config: RwLock::new(config),
            state: RwLock::new(CalculatorState::new()),
            event_handler,
        })
    }

    /// Press a single key.
    ///
    /// Returns the events produced by the key (possibly none). A rejected key
    /// leaves the session unchanged and emits `CalculationFailed`.
    pub fn press(&self, key: Key) -> CalcResult<Vec<CalculationEvent>> {
        let config = *self.config.read();
        let mut state = self.state.write();

        let applied = state.apply(key, &config);
        let transition = match applied {
            Ok(transition) => transition,
            Err(error) => {
                // Handlers may read the session back
                drop(state);
                tracing::warn!(?key, %error, "Key rejected");
                self.event_handler.on_event(CalculationEvent::CalculationFailed {
                    error,
                    timestamp: Utc::now(),
                });
                return Err(error);
            },
        };

        let Transition {
            state: next,
            completed,
            memory_changed,
        } = transition;
        *state = next;
        drop(state);

        let mut events = Vec::new();

        if let Some(completed) = completed {
            tracing::debug!(
                expression = %completed.expression,
                result = %completed.result,
                "Calculation completed"
            );
            self.history.write().push(HistoryEntry::new(
                completed.expression.clone(),
                completed.result.clone(),
            ));
            events.push(CalculationEvent::CalculationCompleted {
                expression: completed.expression,
                result: completed.result,
                timestamp: Utc::now(),
            });
        }

        if let Some(value) = memory_changed {
            events.push(CalculationEvent::MemoryChanged {
                value,
                timestamp: Utc::now(),
            });
        }

        if !events.is_empty() {
            self.event_handler.on_events(events.clone());
        }
        Ok(events)
    }

    /// Press a sequence of keyboard keys, e.g. `"12+3="`.
    ///
    /// Whitespace is skipped. Stops at the first rejected key; keys before it
    /// stay applied.
    ///
    /// # Errors
    /// `InvalidInput` for a character with no key mapping, or the error of the
    /// first rejected key.
    pub fn press_keys(&self, keys: &str) -> CalcResult<Vec<CalculationEvent>> {
        let mut events = Vec::new();
        let mut buf = [0u8; 4];

        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            let key = Key::from_keyboard(c.encode_utf8(&mut buf)).ok_or(CalcError::InvalidInput)?;
            events.extend(self.press(key)?);
        }

        Ok(events)
    }

    /// Load the result of a history entry (0 = newest) into the display.
    pub fn recall_history(&self, index: usize) -> CalcResult<()> {
        let value = {
            let history = self.history.read();
            let text = history.recall(index).ok_or(CalcError::InvalidInput)?;
            parse_number(text)?
        };

        let mut state = self.state.write();
        *state = state.load(value);
        Ok(())
    }

    /// Empty the history list
    pub fn clear_history(&self) {
        self.history.write().clear();
        self.event_handler.on_event(CalculationEvent::HistoryCleared {
            timestamp: Utc::now(),
        });
    }

    /// Switch between degrees and radians
    pub fn set_angle_mode(&self, angle_mode: AngleMode) {
        self.config.write().angle_mode = angle_mode;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current display text
    pub fn display(&self) -> String {
        self.state.read().display().to_string()
    }

    /// Snapshot of the state machine
    pub fn state(&self) -> CalculatorState {
        self.state.read().clone()
    }

    /// Snapshot of the history, newest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history.read().iter().cloned().collect()
    }

    pub fn config(&self) -> CalculatorConfig {
        *self.config.read()
    }
}
