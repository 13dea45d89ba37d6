//! # Input Intents
//!
//! The vocabulary an adapter speaks to the engine. Button presses, key
//! presses and command-line tokens are all translated into [`Intent`]s and
//! handed to [`Calculator::apply`](crate::engine::Calculator::apply).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Calculator;
//! use calc_core::input::parse_tokens;
//!
//! let mut calc = Calculator::new();
//! for intent in parse_tokens("12 + 30 =").unwrap() {
//!     calc.apply(intent);
//! }
//! assert_eq!(calc.display(), "42");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operations::{BinaryOperator, TrigFunction};

/// Named constants with their own buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

/// One discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Digit(char),
    DecimalPoint,
    Operator(BinaryOperator),
    Equals,
    Clear,
    Backspace,
    Sqrt,
    Exp,
    Trig(TrigFunction),
    ToggleMode,
    Constant(Constant),
}

impl Intent {
    /// Map a keyboard key name to an intent.
    ///
    /// Only digits, `.`, `+ - * /`, `Enter` and `Backspace` are bound.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Intent::Equals),
            "Backspace" => Some(Intent::Backspace),
            "." => Some(Intent::DecimalPoint),
            "+" | "-" | "*" | "/" => BinaryOperator::from_symbol(key).map(Intent::Operator),
            _ => single_digit(key).map(Intent::Digit),
        }
    }

    /// Map a button label to an intent.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "=" | "Enter" => Some(Intent::Equals),
            "c" => Some(Intent::Clear),
            "Backspace" => Some(Intent::Backspace),
            "." => Some(Intent::DecimalPoint),
            "sqrt" => Some(Intent::Sqrt),
            "exp" => Some(Intent::Exp),
            "rad/deg" => Some(Intent::ToggleMode),
            "pi" => Some(Intent::Constant(Constant::Pi)),
            "e" => Some(Intent::Constant(Constant::E)),
            _ => BinaryOperator::from_symbol(label)
                .map(Intent::Operator)
                .or_else(|| TrigFunction::from_name(label).map(Intent::Trig))
                .or_else(|| single_digit(label).map(Intent::Digit)),
        }
    }

    /// Button label for this intent
    pub fn label(self) -> String {
        match self {
            Intent::Digit(d) => d.to_string(),
            Intent::DecimalPoint => ".".to_string(),
            Intent::Operator(op) => op.symbol().to_string(),
            Intent::Equals => "=".to_string(),
            Intent::Clear => "c".to_string(),
            Intent::Backspace => "Backspace".to_string(),
            Intent::Sqrt => "sqrt".to_string(),
            Intent::Exp => "exp".to_string(),
            Intent::Trig(func) => func.name().to_string(),
            Intent::ToggleMode => "rad/deg".to_string(),
            Intent::Constant(c) => c.label().to_string(),
        }
    }
}

fn single_digit(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}

/// Parse a whitespace-separated line of button labels.
///
/// A run of digits and `.` (e.g. `12.5`) expands into one intent per character.
pub fn parse_tokens(line: &str) -> CalcResult<Vec<Intent>> {
    let mut intents = Vec::new();
    for token in line.split_whitespace() {
        if let Some(intent) = Intent::from_label(token) {
            intents.push(intent);
        } else if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            intents.extend(token.chars().map(|c| {
                if c == '.' {
                    Intent::DecimalPoint
                } else {
                    Intent::Digit(c)
                }
            }));
        } else {
            return Err(CalcError::unknown_token(token));
        }
    }
    Ok(intents)
}
