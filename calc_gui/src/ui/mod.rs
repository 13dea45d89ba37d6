//! UI module for the calculator GUI
//!
//! # Panel Structure
//! - `display` - Mode indicator and the engine's display text
//! - `keypad` - Button grid; every button sends one `Intent`
//! - `status_bar` - Angle mode, last error code, theme toggle

pub mod display;
pub mod keypad;
pub mod status_bar;
