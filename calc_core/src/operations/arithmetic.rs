//! # Arithmetic
//!
//! Binary operators, square root, and `base^exponent` evaluation.
//!
//! ## Division by zero
//!
//! Division fails only when the divisor's *text* is exactly `"0"`. A divisor
//! typed as `"0.0"` or `"00"` parses to zero but passes the check, giving the
//! IEEE result (`inf`, `-inf` or `NaN`). Tests rely on this distinction.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operations::{apply_binary, BinaryOperator};
//!
//! assert_eq!(apply_binary(BinaryOperator::Add, "5", "3").unwrap(), 8.0);
//! assert!(apply_binary(BinaryOperator::Divide, "8", "0").is_err());
//! assert_eq!(apply_binary(BinaryOperator::Divide, "8", "0.0").unwrap(), f64::INFINITY);
//! ```

use crate::errors::{CalcError, CalcResult};
use crate::format::parse_operand;

use super::BinaryOperator;

/// Separator between base and exponent in an `exp` entry.
pub const EXPONENT_SEPARATOR: char = '^';

/// Divisor text that is reported as division by zero.
const ZERO_DIVISOR: &str = "0";

/// Apply a binary operator to the pending and current entries.
pub fn apply_binary(op: BinaryOperator, lhs: &str, rhs: &str) -> CalcResult<f64> {
    let left = parse_operand(lhs)?;
    let right = parse_operand(rhs)?;

    let result = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Subtract => left - right,
        BinaryOperator::Multiply => left * right,
        BinaryOperator::Divide => {
            if rhs == ZERO_DIVISOR {
                return Err(CalcError::domain_error("divide", rhs, "Division by zero"));
            }
            left / right
        }
        BinaryOperator::Power => left.powf(right),
    };
    Ok(result)
}

/// Non-negative square root of the entry.
pub fn square_root(entry: &str) -> CalcResult<f64> {
    let value = parse_operand(entry)?;
    if value < 0.0 {
        return Err(CalcError::domain_error(
            "sqrt",
            entry,
            "Square root of a negative number",
        ));
    }
    Ok(value.sqrt())
}

/// Evaluate an entry of the form `base^exponent`.
pub fn exponentiate(entry: &str) -> CalcResult<f64> {
    let parts: Vec<&str> = entry.split(EXPONENT_SEPARATOR).collect();
    let [base, exponent] = parts.as_slice() else {
        return Err(CalcError::format_error(
            "exp",
            entry,
            format!(
                "Expected exactly one '{}' between base and exponent",
                EXPONENT_SEPARATOR
            ),
        ));
    };

    let base = parse_operand(base)?;
    let exponent = parse_operand(exponent)?;
    Ok(base.powf(exponent))
}
