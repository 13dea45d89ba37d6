//! # Operations
//!
//! The math behind every transition, as pure functions over operand text.
//! Each follows the pattern:
//!
//! - takes the entry text exactly as it sits in the state
//! - returns `CalcResult<f64>`; the engine decides what an error does to the display
//!
//! ## Available Operations
//!
//! - [`arithmetic`] - binary operators, square root, `base^exponent`
//! - [`trig`] - sin, cos, tan with angle-mode conversion

pub mod arithmetic;
pub mod trig;

use serde::{Deserialize, Serialize};

// Re-export commonly used functions
pub use arithmetic::{apply_binary, exponentiate, square_root};
pub use trig::evaluate_trig;

/// Binary operators, evaluated strictly left-to-right one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// All operators, in keypad order
    pub const ALL: [BinaryOperator; 5] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Power,
    ];

    /// Symbol shown on the display and typed on the keyboard
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        }
    }

    /// Look up an operator by its symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BinaryOperator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Trigonometric functions taking a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    pub const ALL: [TrigFunction; 3] = [TrigFunction::Sin, TrigFunction::Cos, TrigFunction::Tan];

    /// Function name as shown on its button and the display
    pub fn name(self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
        }
    }

    /// Look up a function by name
    pub fn from_name(name: &str) -> Option<Self> {
        TrigFunction::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Apply to an angle already in radians
    pub fn apply(self, radians: f64) -> f64 {
        match self {
            TrigFunction::Sin => radians.sin(),
            TrigFunction::Cos => radians.cos(),
            TrigFunction::Tan => radians.tan(),
        }
    }
}

impl std::fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        for op in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(BinaryOperator::from_symbol("="), None);
        assert_eq!(BinaryOperator::Divide.to_string(), "/");
    }

    #[test]
    fn test_trig_names() {
        assert_eq!(TrigFunction::from_name("tan"), Some(TrigFunction::Tan));
        assert_eq!(TrigFunction::from_name("sec"), None);
        assert_eq!(TrigFunction::Cos.apply(0.0), 1.0);
    }
}
