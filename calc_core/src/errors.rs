//! # Error Types
//!
//! Structured error types for calc_core. The engine never lets these escape a
//! transition: a failed operation shows [`ERROR_DISPLAY`] and keeps the error
//! around as [`Calculator::last_error`](crate::engine::Calculator::last_error)
//! so adapters can inspect what went wrong.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_sqrt(value: f64) -> CalcResult<f64> {
//!     if value < 0.0 {
//!         return Err(CalcError::domain_error(
//!             "sqrt",
//!             value.to_string(),
//!             "Square root of a negative number",
//!         ));
//!     }
//!     Ok(value.sqrt())
//! }
//!
//! assert_eq!(checked_sqrt(-1.0).unwrap_err().error_code(), "DOMAIN_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text shown on the display whenever an operation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An operand is not a finite number
    #[error("Not a number: '{input}'")]
    ParseError { input: String },

    /// The operand is a number, but outside the operation's domain
    #[error("Domain error in {operation}: {value} - {reason}")]
    DomainError {
        operation: String,
        value: String,
        reason: String,
    },

    /// The entry does not have the shape the operation expects
    #[error("Malformed input for {operation}: '{input}' - {reason}")]
    FormatError {
        operation: String,
        input: String,
        reason: String,
    },

    /// Adapter token that maps to no intent
    #[error("Unknown input token: '{token}'")]
    UnknownToken { token: String },
}

impl CalcError {
    /// Create a ParseError
    pub fn parse_error(input: impl Into<String>) -> Self {
        CalcError::ParseError {
            input: input.into(),
        }
    }

    /// Create a DomainError
    pub fn domain_error(operation: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            operation: operation.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FormatError
    pub fn format_error(operation: impl Into<String>, input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FormatError {
            operation: operation.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownToken error
    pub fn unknown_token(token: impl Into<String>) -> Self {
        CalcError::UnknownToken {
            token: token.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::FormatError { .. } => "FORMAT_ERROR",
            CalcError::UnknownToken { .. } => "UNKNOWN_TOKEN",
        }
    }
}
