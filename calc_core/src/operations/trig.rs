//! # Trigonometry
//!
//! Single-argument trig evaluation. The argument is read in the current
//! [`AngleMode`] and converted to radians before the function is applied.

use crate::errors::CalcResult;
use crate::format::parse_operand;
use crate::state::AngleMode;

use super::TrigFunction;

/// Evaluate `func(entry)` with the entry interpreted in `mode`.
pub fn evaluate_trig(func: TrigFunction, entry: &str, mode: AngleMode) -> CalcResult<f64> {
    let angle = parse_operand(entry)?;
    Ok(func.apply(mode.to_radians(angle)))
}
