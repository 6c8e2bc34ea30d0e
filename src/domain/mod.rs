// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod fraction;
pub mod history;

pub use config::{AngleMode, CalculatorConfig, CalculatorMode, DEFAULT_HISTORY_CAPACITY};
pub use fraction::{gcd, Fraction, MixedNumber};
pub use history::{EntryId, History, HistoryEntry};
