// ============================================================================
// Calculator Configuration
// Keypad mode, angle unit and history size for a calculator session
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of history entries kept when no capacity is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

// ============================================================================
// Calculator Mode
// ============================================================================

/// Which keypad the session exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorMode {
    /// Four operations, modulo, percent and sign toggle
    #[default]
    Basic,

    /// Basic keys plus power, memory, constants and scientific functions
    Scientific,
}

// ============================================================================
// Angle Mode
// ============================================================================

/// Unit used by trigonometric functions for their argument (sin, cos, tan)
/// or their result (asin, acos, atan)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Convert an angle in this unit to radians
    #[inline]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle.to_radians(),
            AngleMode::Radians => angle,
        }
    }

    /// Convert an angle in radians to this unit
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleMode::Degrees => radians.to_degrees(),
            AngleMode::Radians => radians,
        }
    }

    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Keypad exposed to the user
    pub mode: CalculatorMode,

    /// Unit for trigonometric functions
    pub angle_mode: AngleMode,

    /// Maximum number of completed calculations kept, newest first
    pub history_capacity: usize,
}

impl CalculatorConfig {
    /// Create a new configuration with defaults for everything but the mode
    pub fn new(mode: CalculatorMode) -> Self {
        Self {
            mode,
            angle_mode: AngleMode::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Builder method: Set angle unit
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Builder method: Set history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn is_scientific(&self) -> bool {
        self.mode == CalculatorMode::Scientific
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.history_capacity == 0 {
            return Err("History capacity must be positive".to_string());
        }

        Ok(())
    }

    /// Four-function calculator
    pub fn basic() -> Self {
        Self::new(CalculatorMode::Basic)
    }

    /// Scientific calculator, angles in degrees
    pub fn scientific() -> Self {
        Self::new(CalculatorMode::Scientific)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::basic()
    }
}
