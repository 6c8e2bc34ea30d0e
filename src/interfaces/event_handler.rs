// ============================================================================
// Event Handler Interface
// Defines the contract for handling calculator session events
// ============================================================================

use crate::numeric::CalcError;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// A calculation finished and was added to history
    CalculationCompleted {
        expression: String,
        result: String,
        timestamp: DateTime<Utc>,
    },

    /// A key press was rejected; the session state is unchanged
    CalculationFailed {
        error: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// Memory register was stored, cleared or adjusted
    MemoryChanged {
        value: f64,
        timestamp: DateTime<Utc>,
    },

    /// History list was emptied
    HistoryCleared { timestamp: DateTime<Utc> },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, audit trails, UI notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::CalculationFailed { error, .. } => {
                tracing::warn!(%error, "Calculation rejected");
            },
            _ => tracing::debug!("Calculator event: {:?}", event),
        }
    }
}
