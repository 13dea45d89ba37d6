//! # Number Formatting
//!
//! Conversions between display text and `f64`.
//!
//! Results are rendered the way a browser renders a number: whole values have
//! no fractional part, decimals use the shortest text that round-trips, and
//! very large or very small magnitudes switch to exponent notation with an
//! explicit sign (`1e+21`, `1.5e-7`).
//!
//! ```rust
//! use calc_core::format::{format_number, parse_operand};
//!
//! assert_eq!(format_number(8.0), "8");
//! assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
//! assert_eq!(format_number(f64::INFINITY), "Infinity");
//! assert!(parse_operand(".").is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Magnitudes below this switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Format a computed value for the display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// Parse an operand typed into (or computed onto) the display.
///
/// The whole text must be a float literal and the value must be finite.
pub fn parse_operand(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::parse_error(text)),
    }
}
