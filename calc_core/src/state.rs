//! # Calculator State
//!
//! The single entity the engine owns. Adapters only ever read it (for
//! rendering or a JSON snapshot); every mutation goes through a transition on
//! [`Calculator`](crate::engine::Calculator).
//!
//! ## Structure
//!
//! ```text
//! CalculatorState
//! ├── current_entry: String           (operand being typed)
//! ├── pending_entry: String           (left operand of a pending operator)
//! ├── pending_operator: PendingOperator
//! ├── angle_mode: AngleMode
//! ├── pending_trig: Option<TrigFunction>
//! └── display_text: String            (what the display shows)
//! ```

use serde::{Deserialize, Serialize};

use crate::operations::{BinaryOperator, TrigFunction};

/// Display text of the idle calculator.
pub const IDLE_DISPLAY: &str = "0";

/// How trig arguments are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    Radians,
    Degrees,
}

impl AngleMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        }
    }

    /// Convert an angle typed in this mode to radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle * (std::f64::consts::PI / 180.0),
        }
    }

    /// Short label for the mode indicator
    pub fn label(self) -> &'static str {
        match self {
            AngleMode::Radians => "rad",
            AngleMode::Degrees => "deg",
        }
    }
}

impl std::fmt::Display for AngleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Operator slot of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "operator")]
pub enum PendingOperator {
    /// Nothing chosen
    #[default]
    None,
    /// A binary operator awaiting its right operand
    Pending(BinaryOperator),
    /// A result was just produced; the next digit starts over
    JustComputed,
}

impl PendingOperator {
    /// The binary operator awaiting its right operand, if any
    pub fn operator(self) -> Option<BinaryOperator> {
        match self {
            PendingOperator::Pending(op) => Some(op),
            _ => None,
        }
    }
}

/// Complete mutable state of one calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_entry: String,
    pub pending_entry: String,
    pub pending_operator: PendingOperator,
    pub angle_mode: AngleMode,
    pub pending_trig: Option<TrigFunction>,
    pub display_text: String,
}

impl CalculatorState {
    /// Zero state in the given angle mode.
    pub fn new(angle_mode: AngleMode) -> Self {
        CalculatorState {
            current_entry: String::new(),
            pending_entry: String::new(),
            pending_operator: PendingOperator::None,
            angle_mode,
            pending_trig: None,
            display_text: IDLE_DISPLAY.to_string(),
        }
    }

    /// Return to the zero state. The angle mode is a setting, not an entry, so it survives.
    pub fn reset(&mut self) {
        *self = CalculatorState::new(self.angle_mode);
    }

    /// True when nothing has been entered since the last reset
    pub fn is_idle(&self) -> bool {
        *self == CalculatorState::new(self.angle_mode)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::new(AngleMode::default())
    }
}
