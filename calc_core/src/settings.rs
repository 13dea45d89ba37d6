//! # Calculator Settings
//!
//! Startup configuration for a [`Calculator`](crate::engine::Calculator).
//! Adapters build one from their own configuration surface (command-line
//! flags, UI toggles) and hand it to
//! [`Calculator::with_settings`](crate::engine::Calculator::with_settings).

use serde::{Deserialize, Serialize};

use crate::state::AngleMode;

/// Settings applied when a calculator is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Angle mode for trig arguments at startup
    pub angle_mode: AngleMode,
}

impl CalculatorSettings {
    /// Settings with the given angle mode
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }
}
