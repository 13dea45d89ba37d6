//! # Calculator Engine
//!
//! [`Calculator`] owns one [`CalculatorState`] and exposes the transitions an
//! adapter drives it with. Every transition returns the new display text.
//!
//! ## States
//!
//! ```text
//! Idle ──digit──▶ Entering ──operator──▶ OperatorPending ──digit──▶ Entering
//!   ▲                │                                              │
//!   │                └──sin/cos/tan──▶ TrigPending                  = (calculate)
//!   │                                                               ▼
//!   └──────────── clear / digit after result ◀──────────────────── Result
//! ```
//!
//! Transitions never fail outward. A failed operation sets the display to
//! `"Error"` and leaves the entries untouched; the error itself is available
//! from [`Calculator::last_error`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Calculator;
//! use calc_core::operations::BinaryOperator;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('5');
//! calc.set_operator(BinaryOperator::Add);
//! calc.append_digit('3');
//! assert_eq!(calc.calculate(), "8");
//! ```

use std::mem;

use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult, ERROR_DISPLAY};
use crate::format::format_number;
use crate::input::{Constant, Intent};
use crate::operations::{
    apply_binary, evaluate_trig, exponentiate, square_root, BinaryOperator, TrigFunction,
};
use crate::settings::CalculatorSettings;
use crate::state::{AngleMode, CalculatorState, PendingOperator, IDLE_DISPLAY};

/// Input-state machine behind a single numeric display.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    last_error: Option<CalcError>,
}

impl Calculator {
    /// Create an idle calculator with default settings (radians).
    pub fn new() -> Self {
        Calculator::with_settings(CalculatorSettings::default())
    }

    /// Create an idle calculator from startup settings.
    pub fn with_settings(settings: CalculatorSettings) -> Self {
        Calculator {
            state: CalculatorState::new(settings.angle_mode),
            last_error: None,
        }
    }

    /// Resume from a state snapshot.
    ///
    /// ```rust
    /// use calc_core::engine::Calculator;
    /// use calc_core::state::CalculatorState;
    ///
    /// let mut state = CalculatorState::default();
    /// state.current_entry = "2^10".to_string();
    /// state.display_text = "2^10".to_string();
    ///
    /// let mut calc = Calculator::from_state(state);
    /// assert_eq!(calc.exp(), "1024");
    /// ```
    pub fn from_state(state: CalculatorState) -> Self {
        Calculator {
            state,
            last_error: None,
        }
    }

    /// Read-only view of the state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current display text
    pub fn display(&self) -> &str {
        &self.state.display_text
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode
    }

    /// The most recent failure, until the next `clear`
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// True while the display shows the error text
    pub fn is_error(&self) -> bool {
        self.state.display_text == ERROR_DISPLAY
    }

    // ========================================================================
    // Entry
    // ========================================================================

    /// Type one character of the current entry: `'0'..='9'` or `'.'`.
    ///
    /// Any other character is ignored. A second `'.'` in the same entry is ignored.
    pub fn append_digit(&mut self, ch: char) -> &str {
        if !(ch.is_ascii_digit() || ch == '.') {
            debug!(%ch, "ignoring non-digit input");
            return self.display();
        }
        let mut buf = [0u8; 4];
        self.append_text(ch.encode_utf8(&mut buf))
    }

    /// Type a named constant's value as if it were digits.
    pub fn append_constant(&mut self, constant: Constant) -> &str {
        let text = format_number(constant.value());
        self.append_text(&text)
    }

    fn append_text(&mut self, text: &str) -> &str {
        self.reset_after_calculation(false);

        // Typing over an error replaces the entry; any pending operation survives
        if self.is_error() {
            self.last_error = None;
        }

        if self.is_fresh_start() {
            self.state.current_entry = text.to_string();
            self.state.display_text = text.to_string();
        } else if text.contains('.') && self.state.current_entry.contains('.') {
            debug!(entry = %self.state.current_entry, "entry already has a decimal point");
        } else {
            self.state.current_entry.push_str(text);
            self.state.display_text.push_str(text);
        }
        self.display()
    }

    /// Whether the next typed character replaces the display instead of extending it.
    fn is_fresh_start(&self) -> bool {
        let state = &self.state;
        state.display_text == IDLE_DISPLAY
            || state.display_text == ERROR_DISPLAY
            || state.pending_operator == PendingOperator::JustComputed
            || (state.pending_trig.is_some() && state.current_entry.is_empty())
    }

    /// A result on the display is stale once something other than an
    /// operator arrives.
    fn reset_after_calculation(&mut self, incoming_is_operator: bool) {
        let stale = self.state.pending_operator == PendingOperator::JustComputed;
        if stale && !incoming_is_operator {
            debug!(display = %self.state.display_text, "clearing stale result");
            self.reset();
        }
    }

    /// Remove the last character of the current entry.
    pub fn backspace(&mut self) -> &str {
        self.state.current_entry.pop();
        self.state.display_text = if self.state.current_entry.is_empty() {
            IDLE_DISPLAY.to_string()
        } else {
            self.state.current_entry.clone()
        };
        self.display()
    }

    /// Return to the idle zero state. The angle mode is kept.
    pub fn clear(&mut self) -> &str {
        self.reset();
        debug!("cleared");
        self.display()
    }

    fn reset(&mut self) {
        self.state.reset();
        self.last_error = None;
    }

    // ========================================================================
    // Binary operations
    // ========================================================================

    /// Choose a binary operator for the current entry.
    ///
    /// Ignored while another operator is already pending: the first operator wins.
    pub fn set_operator(&mut self, op: BinaryOperator) -> &str {
        self.reset_after_calculation(true);

        if let Some(pending) = self.state.pending_operator.operator() {
            debug!(%pending, ignored = %op, "operator already pending");
            return self.display();
        }

        if !self.state.pending_entry.is_empty() && !self.state.current_entry.is_empty() {
            self.calculate();
            if self.is_error() {
                return self.display();
            }
        }

        // Rebuild the display when it shows something other than the entry
        let abandoned_trig = self.state.pending_trig.take().is_some();
        if abandoned_trig || self.is_error() {
            self.state.display_text = if self.state.current_entry.is_empty() {
                IDLE_DISPLAY.to_string()
            } else {
                self.state.current_entry.clone()
            };
        }

        self.state.pending_operator = PendingOperator::Pending(op);
        self.state.pending_entry = mem::take(&mut self.state.current_entry);
        self.state.display_text.push_str(&format!(" {} ", op));
        debug!(%op, lhs = %self.state.pending_entry, "operator set");
        self.display()
    }

    /// Fold the pending binary operation into a result.
    ///
    /// Does nothing when no operator is pending or the right operand is empty.
    pub fn calculate(&mut self) -> &str {
        let Some(op) = self.state.pending_operator.operator() else {
            return self.display();
        };
        if self.state.current_entry.is_empty() {
            return self.display();
        }

        let result = apply_binary(op, &self.state.pending_entry, &self.state.current_entry);
        if self.commit(result) {
            self.state.pending_entry.clear();
            self.state.pending_operator = PendingOperator::JustComputed;
        }
        self.display()
    }

    /// Dispatch for the `=` key: finish a trig argument, then any pending operator.
    pub fn equals(&mut self) -> &str {
        if let Some(func) = self.state.pending_trig {
            self.eval_trig(func);
            if self.is_error() {
                return self.display();
            }
        }
        self.calculate()
    }

    // ========================================================================
    // Unary operations
    // ========================================================================

    /// Square root of the current entry.
    pub fn sqrt(&mut self) -> &str {
        let result = square_root(&self.state.current_entry);
        self.commit(result);
        self.display()
    }

    /// Evaluate a current entry of the form `base^exponent`.
    pub fn exp(&mut self) -> &str {
        let result = exponentiate(&self.state.current_entry);
        self.commit(result);
        self.display()
    }

    /// Start typing the argument of a trig function.
    pub fn set_trig(&mut self, func: TrigFunction) -> &str {
        if self.state.pending_operator == PendingOperator::JustComputed {
            self.state.pending_operator = PendingOperator::None;
        }
        self.state.pending_trig = Some(func);
        self.state.display_text = format!("{}(", func);
        self.state.current_entry.clear();
        debug!(%func, "trig argument started");
        self.display()
    }

    /// Evaluate `func` on the current entry in the current angle mode.
    pub fn eval_trig(&mut self, func: TrigFunction) -> &str {
        let result = evaluate_trig(func, &self.state.current_entry, self.state.angle_mode);
        if self.commit(result) {
            self.state.pending_trig = None;
        }
        self.display()
    }

    /// Flip between radians and degrees.
    pub fn toggle_mode(&mut self) -> &str {
        self.state.angle_mode = self.state.angle_mode.toggled();
        debug!(mode = %self.state.angle_mode, "angle mode toggled");
        self.display()
    }

    // ========================================================================
    // Adapter entry point
    // ========================================================================

    /// Apply one adapter intent.
    pub fn apply(&mut self, intent: Intent) -> &str {
        match intent {
            Intent::Digit(d) => self.append_digit(d),
            Intent::DecimalPoint => self.append_digit('.'),
            Intent::Operator(op) => self.set_operator(op),
            Intent::Equals => self.equals(),
            Intent::Clear => self.clear(),
            Intent::Backspace => self.backspace(),
            Intent::Sqrt => self.sqrt(),
            Intent::Exp => self.exp(),
            Intent::Trig(func) => self.set_trig(func),
            Intent::ToggleMode => self.toggle_mode(),
            Intent::Constant(constant) => self.append_constant(constant),
        }
    }

    /// Write a computed value as the new entry, or show the error.
    ///
    /// Returns true on success.
    fn commit(&mut self, result: CalcResult<f64>) -> bool {
        match result {
            Ok(value) => {
                let text = format_number(value);
                debug!(result = %text, "computed");
                self.state.current_entry = text.clone();
                self.state.display_text = text;
                true
            }
            Err(err) => {
                warn!(code = err.error_code(), error = %err, "operation failed");
                self.state.display_text = ERROR_DISPLAY.to_string();
                self.last_error = Some(err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_tokens;

    /// Feed a line of button labels and return the final display.
    fn press(calc: &mut Calculator, line: &str) -> String {
        for intent in parse_tokens(line).unwrap() {
            calc.apply(intent);
        }
        calc.display().to_string()
    }

    fn with_entry(entry: &str) -> Calculator {
        let mut state = CalculatorState::default();
        state.current_entry = entry.to_string();
        state.display_text = entry.to_string();
        Calculator::from_state(state)
    }

    fn display_value(calc: &Calculator) -> f64 {
        calc.display().parse().unwrap()
    }

    #[test]
    fn test_digits_concatenate() {
        let mut calc = Calculator::new();
        for (i, d) in "12.05".chars().enumerate() {
            calc.append_digit(d);
            assert_eq!(calc.state().current_entry, &"12.05"[..=i]);
        }
        assert_eq!(calc.state().current_entry, "12.05");
        assert_eq!(calc.display(), "12.05");
    }

    /// Every entry of up to four characters drawn from `0`, `1`, `7`, `.`
    /// with at most one decimal point.
    fn digit_sequences() -> Vec<String> {
        let alphabet = ['0', '1', '7', '.'];
        let mut sequences = Vec::new();
        let mut frontier = vec![String::new()];
        for _ in 0..4 {
            let mut next = Vec::new();
            for prefix in &frontier {
                for c in alphabet {
                    if c == '.' && prefix.contains('.') {
                        continue;
                    }
                    let mut sequence = prefix.clone();
                    sequence.push(c);
                    next.push(sequence);
                }
            }
            sequences.extend(next.iter().cloned());
            frontier = next;
        }
        sequences
    }

    #[test]
    fn test_digit_sequences_concatenate() {
        for sequence in digit_sequences() {
            let mut calc = Calculator::new();
            for d in sequence.chars() {
                calc.append_digit(d);
            }

            // While the display shows the "0" placeholder the next character replaces it
            let expected = match sequence.trim_start_matches('0') {
                "" => "0",
                rest => rest,
            };
            assert_eq!(calc.state().current_entry, expected, "{sequence}");
            assert_eq!(calc.display(), expected, "{sequence}");

            if !sequence.starts_with('0') {
                assert_eq!(calc.display(), sequence);
            }
        }
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "0 0 7"), "7");
        assert_eq!(calc.state().current_entry, "7");
    }

    #[test]
    fn test_second_decimal_point_ignored() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "1 . 2 . 3"), "1.23");
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut calc = Calculator::new();
        calc.append_digit('4');
        assert_eq!(calc.append_digit('^'), "4");
        assert_eq!(calc.append_digit('x'), "4");
        assert_eq!(calc.state().current_entry, "4");
    }

    #[test]
    fn test_calculate_noop_without_operator() {
        let mut calc = Calculator::new();
        press(&mut calc, "4 2");
        let before = calc.state().clone();
        assert_eq!(calc.calculate(), "42");
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn test_calculate_noop_without_right_operand() {
        let mut calc = Calculator::new();
        press(&mut calc, "4 +");
        let before = calc.state().clone();
        assert_eq!(calc.calculate(), "4 + ");
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn test_operator_display() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "5 +"), "5 + ");
        assert_eq!(calc.state().pending_entry, "5");
        assert_eq!(calc.state().current_entry, "");
        assert_eq!(press(&mut calc, "3"), "5 + 3");
        assert_eq!(calc.state().current_entry, "3");
    }

    #[test]
    fn test_chained_calculation() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "5 + 3 ="), "8");
        assert_eq!(calc.state().pending_operator, PendingOperator::JustComputed);
        assert_eq!(press(&mut calc, "+ 2 ="), "10");
    }

    #[test]
    fn test_all_operators() {
        let cases = [
            ("9 - 12 =", "-3"),
            ("2.5 * 4 =", "10"),
            ("9 / 4 =", "2.25"),
            ("2 ^ 10 =", "1024"),
            ("0.1 + 0.2 =", "0.30000000000000004"),
        ];
        for (line, expected) in cases {
            let mut calc = Calculator::new();
            assert_eq!(press(&mut calc, line), expected, "{line}");
        }
    }

    #[test]
    fn test_first_operator_wins() {
        let mut calc = Calculator::new();
        press(&mut calc, "5 + -");
        assert_eq!(
            calc.state().pending_operator,
            PendingOperator::Pending(BinaryOperator::Add)
        );
        assert_eq!(press(&mut calc, "3 ="), "8");
    }

    #[test]
    fn test_divide_by_literal_zero() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "8 / 0 ="), "Error");
        assert_eq!(calc.last_error().map(CalcError::error_code), Some("DOMAIN_ERROR"));

        // The entries survive the failure
        assert_eq!(calc.state().current_entry, "0");
        assert_eq!(calc.state().pending_entry, "8");
        assert_eq!(
            calc.state().pending_operator,
            PendingOperator::Pending(BinaryOperator::Divide)
        );
    }

    #[test]
    fn test_divide_by_zero_spelled_differently() {
        // Only the text "0" is rejected; "0.0" divides to infinity.
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "8 / 0.0 ="), "Infinity");
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_result_is_not_reused_when_infinite() {
        let mut calc = Calculator::new();
        press(&mut calc, "8 / 0.0 =");
        assert_eq!(press(&mut calc, "+ 1 ="), "Error");
        assert_eq!(calc.last_error().map(CalcError::error_code), Some("PARSE_ERROR"));
    }

    #[test]
    fn test_sqrt() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 6");
        assert_eq!(calc.sqrt(), "4");
        assert_eq!(calc.state().current_entry, "4");

        let mut calc = with_entry("-1");
        assert_eq!(calc.sqrt(), "Error");
        assert_eq!(calc.state().current_entry, "-1");
    }

    #[test]
    fn test_sqrt_of_negative_result() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "0 - 1 ="), "-1");
        assert_eq!(press(&mut calc, "sqrt"), "Error");
    }

    #[test]
    fn test_sqrt_keeps_pending_operator() {
        let mut calc = Calculator::new();
        press(&mut calc, "2 + 9");
        assert_eq!(calc.sqrt(), "3");
        assert_eq!(calc.state().pending_entry, "2");
        assert_eq!(press(&mut calc, "="), "5");
    }

    #[test]
    fn test_exp() {
        assert_eq!(with_entry("2^10").exp(), "1024");
        assert_eq!(with_entry("2^3^4").exp(), "Error");
        assert_eq!(with_entry("210").exp(), "Error");

        let mut calc = with_entry("a^2");
        calc.exp();
        assert_eq!(calc.last_error().map(CalcError::error_code), Some("PARSE_ERROR"));
    }

    #[test]
    fn test_trig_degrees() {
        let mut calc = Calculator::with_settings(
            CalculatorSettings::default().with_angle_mode(AngleMode::Degrees),
        );
        assert_eq!(calc.set_trig(TrigFunction::Sin), "sin(");
        press(&mut calc, "9 0");
        assert_eq!(calc.state().current_entry, "90");
        calc.eval_trig(TrigFunction::Sin);
        assert!((display_value(&calc) - 1.0).abs() < 1e-12);
        assert_eq!(calc.state().pending_trig, None);
    }

    #[test]
    fn test_trig_radians() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "sin 9 0 ="), format_number(90f64.sin()));
        assert!((display_value(&calc) - 1.0).abs() > 0.1);
    }

    #[test]
    fn test_trig_error_keeps_function() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "cos ="), "Error");
        assert_eq!(calc.state().pending_trig, Some(TrigFunction::Cos));
    }

    #[test]
    fn test_trig_feeds_pending_operator() {
        let mut calc = Calculator::new();
        calc.toggle_mode();
        assert_eq!(press(&mut calc, "5 + sin 90 ="), "6");
        assert_eq!(calc.state().pending_operator, PendingOperator::JustComputed);
    }

    #[test]
    fn test_trig_after_result() {
        let mut calc = Calculator::new();
        press(&mut calc, "5 + 3 =");
        assert_eq!(press(&mut calc, "cos 0 ="), "1");
    }

    #[test]
    fn test_operator_cancels_trig() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "tan 4 +"), "4 + ");
        assert_eq!(calc.state().pending_trig, None);
        assert_eq!(press(&mut calc, "1 ="), "5");
    }

    #[test]
    fn test_toggle_mode_has_no_numeric_effect() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2");
        let entry = calc.state().current_entry.clone();
        assert_eq!(calc.toggle_mode(), "12");
        assert_eq!(calc.angle_mode(), AngleMode::Degrees);
        assert_eq!(calc.state().current_entry, entry);
        calc.toggle_mode();
        assert_eq!(calc.angle_mode(), AngleMode::Radians);
    }

    #[test]
    fn test_clear_from_any_state() {
        let lines = ["", "1 2 3", "5 +", "5 + 3 =", "8 / 0 =", "sin 3", "tan ="];
        for line in lines {
            let mut calc = Calculator::new();
            press(&mut calc, line);
            assert_eq!(calc.clear(), "0");
            assert!(calc.state().is_idle(), "{line}");
            assert!(calc.last_error().is_none());
        }
    }

    #[test]
    fn test_clear_keeps_angle_mode() {
        let mut calc = Calculator::new();
        press(&mut calc, "rad/deg 7 c");
        assert_eq!(calc.angle_mode(), AngleMode::Degrees);
    }

    #[test]
    fn test_backspace() {
        let mut calc = Calculator::new();
        press(&mut calc, "1 2 3");
        assert_eq!(calc.backspace(), "12");
        assert_eq!(calc.backspace(), "1");
        assert_eq!(calc.backspace(), "0");
        assert_eq!(calc.state().current_entry, "");

        // Idempotent at the floor
        assert_eq!(calc.backspace(), "0");
        assert_eq!(calc.state().current_entry, "");
    }

    #[test]
    fn test_digit_after_result_starts_over() {
        let mut calc = Calculator::new();
        press(&mut calc, "5 + 3 =");
        assert_eq!(press(&mut calc, "7"), "7");
        assert_eq!(calc.state().pending_operator, PendingOperator::None);
        assert_eq!(calc.state().pending_entry, "");
    }

    #[test]
    fn test_digit_recovers_from_error() {
        let mut calc = with_entry("-1");
        assert_eq!(calc.sqrt(), "Error");
        assert_eq!(press(&mut calc, "9"), "9");
        assert_eq!(calc.state().current_entry, "9");
        assert_eq!(calc.state().pending_operator, PendingOperator::None);
        assert!(calc.last_error().is_none());
    }

    #[test]
    fn test_error_keeps_pending_division() {
        let mut calc = Calculator::new();
        press(&mut calc, "8 / 0 =");
        assert_eq!(press(&mut calc, "4"), "4");
        assert_eq!(calc.state().pending_entry, "8");
        assert_eq!(
            calc.state().pending_operator,
            PendingOperator::Pending(BinaryOperator::Divide)
        );
        assert!(calc.last_error().is_none());
        assert_eq!(press(&mut calc, "="), "2");
    }

    #[test]
    fn test_error_keeps_pending_addition() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "2 + sqrt"), "Error");
        assert_eq!(press(&mut calc, "9 ="), "11");
    }

    #[test]
    fn test_operator_after_unary_error() {
        let mut calc = with_entry("-4");
        calc.sqrt();
        assert_eq!(calc.set_operator(BinaryOperator::Add), "-4 + ");
        assert_eq!(press(&mut calc, "6 ="), "2");
    }

    #[test]
    fn test_constants() {
        let mut calc = Calculator::new();
        assert_eq!(press(&mut calc, "pi"), "3.141592653589793");
        assert_eq!(press(&mut calc, "c 2 * pi ="), "6.283185307179586");
        assert_eq!(press(&mut calc, "c e"), "2.718281828459045");
    }

    #[test]
    fn test_resume_from_snapshot() {
        let mut calc = Calculator::new();
        press(&mut calc, "7 *");
        let json = serde_json::to_string(calc.state()).unwrap();

        let state: CalculatorState = serde_json::from_str(&json).unwrap();
        let mut resumed = Calculator::from_state(state);
        assert_eq!(press(&mut resumed, "6 ="), "42");
    }
}
