//! # calc_core - Calculator Engine
//!
//! `calc_core` is the computational heart of the calculator: an input-state
//! machine behind a single numeric display. Adapters (the `calc_gui` and
//! `calc_cli` crates) translate button and key events into [`Intent`]s, hand
//! them to a [`Calculator`], and render the display text it returns.
//!
//! ## Design Philosophy
//!
//! - **Owned state**: one [`Calculator`] per display, no globals
//! - **Total transitions**: operations never fail outward; bad input shows `"Error"`
//! - **Left-to-right**: at most one pending binary operation, no precedence
//! - **JSON-First**: state, settings and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{Calculator, Intent};
//! use calc_core::operations::BinaryOperator;
//!
//! let mut calc = Calculator::new();
//! calc.apply(Intent::Digit('5'));
//! calc.apply(Intent::Operator(BinaryOperator::Add));
//! calc.apply(Intent::Digit('3'));
//! assert_eq!(calc.apply(Intent::Equals), "8");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The state machine and its transitions
//! - [`state`] - State snapshot, operator slot, angle mode
//! - [`operations`] - Pure arithmetic and trig functions
//! - [`format`] - Display text <-> number conversion
//! - [`input`] - Adapter intents, key and label bindings
//! - [`settings`] - Startup settings
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod format;
pub mod input;
pub mod operations;
pub mod settings;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use engine::Calculator;
pub use errors::{CalcError, CalcResult, ERROR_DISPLAY};
pub use input::{Constant, Intent};
pub use settings::CalculatorSettings;
pub use state::{AngleMode, CalculatorState, PendingOperator};
