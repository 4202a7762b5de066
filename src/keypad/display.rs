//! Display model rendered above the keypad.

use super::button::{ClearLabel, clear_label};
use crate::calculator::{CalculatorState, Operator};

/// Everything the presentation layer needs to draw the display.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayItem {
    /// Text shown verbatim on the display.
    pub text: String,
    /// Label the clear button currently carries.
    pub clear_label: ClearLabel,
    /// The display shows an overflow token (`∞`, `-∞` or `NaN`).
    pub is_error: bool,
    /// Operator waiting for its second operand, if any.
    /// `=` is not reported since nothing is pending after it.
    pub pending_operator: Option<Operator>,
}

impl DisplayItem {
    pub fn from_state(state: &CalculatorState) -> Self {
        Self {
            text: state.display_value.clone(),
            clear_label: clear_label(state),
            is_error: state.is_overflow(),
            pending_operator: state.operator.filter(|op| *op != Operator::Equals),
        }
    }

    /// One-line rendering: the display text, prefixed by the pending operator.
    pub fn render_line(&self) -> String {
        match self.pending_operator {
            Some(op) => format!("{} {}", op.glyph(), self.text),
            None => self.text.clone(),
        }
    }
}
