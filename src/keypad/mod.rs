//! The calculator keypad as data.
//!
//! Describes the button grid, what each button is labelled and which
//! action it dispatches, so any front-end can draw it and feed presses
//! into the reducer.

mod button;
mod display;

pub use button::{ButtonKind, ClearLabel, KeypadButton, clear_label};
pub use display::DisplayItem;

use crate::calculator::{Action, CalculatorState, Operator, tokenize};
use crate::error::CalcError;
use tracing::debug;

/// A grid of keypad buttons, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// The standard layout:
    ///
    /// ```text
    /// AC  ±  %  ÷
    ///  7  8  9  x
    ///  4  5  6  -
    ///  1  2  3  +
    ///   0    ●  =
    /// ```
    pub fn standard() -> Self {
        use KeypadButton::{Clear, Digit, Dot, Percent, ToggleSign};
        let op = KeypadButton::Operator;

        Self {
            rows: vec![
                vec![Clear, ToggleSign, Percent, op(Operator::Divide)],
                vec![Digit(7), Digit(8), Digit(9), op(Operator::Multiply)],
                vec![Digit(4), Digit(5), Digit(6), op(Operator::Subtract)],
                vec![Digit(1), Digit(2), Digit(3), op(Operator::Add)],
                vec![Digit(0), Dot, op(Operator::Equals)],
            ],
        }
    }

    pub fn rows(&self) -> &[Vec<KeypadButton>] {
        &self.rows
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Find the button currently showing `label`.
    ///
    /// Operator buttons also answer to their alternate symbols, so `×`
    /// and `*` both find the multiply key.
    pub fn find(&self, state: &CalculatorState, label: &str) -> Option<KeypadButton> {
        if let Some(button) = self.buttons().find(|b| b.label(state) == label) {
            return Some(*button);
        }

        let op = Operator::from_symbol(label)?;
        self.buttons()
            .find(|b| **b == KeypadButton::Operator(op))
            .copied()
    }

    /// Press the button labelled `label` and return the resulting state.
    pub fn press(
        &self,
        state: &CalculatorState,
        label: &str,
    ) -> Result<CalculatorState, CalcError> {
        let button = self
            .find(state, label)
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        Ok(self.press_button(state, button))
    }

    fn press_button(&self, state: &CalculatorState, button: KeypadButton) -> CalculatorState {
        let action = button.action(state);
        debug!(button = %button.id(), ?action, "button pressed");
        state.reduce(action)
    }

    /// Handle one typed key.
    ///
    /// `C` and `AC` both press the clear button, which clears the entry or
    /// everything depending on the display. Other keypad labels press their
    /// button; keys without a button (`Backspace`, `Escape`, `.`) go straight
    /// to the reducer.
    pub fn press_key(
        &self,
        state: &CalculatorState,
        key: &str,
    ) -> Result<CalculatorState, CalcError> {
        let button = match key {
            "C" | "AC" => self
                .buttons()
                .find(|b| **b == KeypadButton::Clear)
                .copied(),
            _ => self.find(state, key),
        };

        match button {
            Some(button) => Ok(self.press_button(state, button)),
            None => Ok(state.reduce(Action::from_key(key)?)),
        }
    }

    /// Handle a typed line such as `10+5-3x2=`.
    ///
    /// Every key is checked before any is applied, so an unknown key leaves
    /// the state untouched.
    pub fn press_line(
        &self,
        state: &CalculatorState,
        line: &str,
    ) -> Result<CalculatorState, CalcError> {
        let keys = tokenize(line);
        for key in &keys {
            if self.find(state, key).is_none() && !matches!(*key, "C" | "AC") {
                Action::from_key(key)?;
            }
        }

        keys.into_iter()
            .try_fold(state.clone(), |state, key| self.press_key(&state, key))
    }

    /// Press a sequence of buttons, starting from `state`.
    pub fn press_all<'a, I>(
        &self,
        state: &CalculatorState,
        labels: I,
    ) -> Result<CalculatorState, CalcError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .try_fold(state.clone(), |state, label| self.press(&state, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(labels: &[&str]) -> CalculatorState {
        Keypad::standard()
            .press_all(&CalculatorState::initial(), labels.iter().copied())
            .unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.rows().len(), 5);
        assert_eq!(keypad.buttons().count(), 19);
        for d in 0..=9 {
            assert!(keypad.buttons().any(|b| *b == KeypadButton::Digit(d)));
        }
        for op in Operator::ALL {
            assert!(keypad.buttons().any(|b| *b == KeypadButton::Operator(op)));
        }
    }

    #[test]
    fn test_sum() {
        assert_eq!(run(&["6", "+", "2", "="]).display_value, "8");
    }

    #[test]
    fn test_subtract() {
        assert_eq!(run(&["6", "-", "2", "="]).display_value, "4");
    }

    #[test]
    fn test_divide() {
        assert_eq!(run(&["6", "÷", "2", "="]).display_value, "3");
        assert_eq!(run(&["6", "÷", "0", "="]).display_value, "∞");
    }

    #[test]
    fn test_multiply() {
        assert_eq!(run(&["6", "x", "2", "="]).display_value, "12");
        assert_eq!(run(&["6", "×", "2", "="]).display_value, "12");
    }

    #[test]
    fn test_chain_without_equals_is_left_to_right() {
        let state = run(&["1", "0", "+", "5", "-", "3", "×", "2", "="]);
        assert_eq!(state.display_value, "24");
    }

    #[test]
    fn test_chain_after_equals() {
        let state = run(&["5", "+", "3", "="]);
        assert_eq!(state.display_value, "8");

        let state = Keypad::standard()
            .press_all(&state, ["x", "2", "="])
            .unwrap();
        assert_eq!(state.display_value, "16");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(run(&["●", "2"]).display_value, "0.2");
    }

    #[test]
    fn test_invert_sign() {
        assert_eq!(run(&["2", "±"]).display_value, "-2");
    }

    #[test]
    fn test_percent() {
        assert_eq!(run(&["2", "%"]).display_value, "0.02");
        assert_eq!(run(&["5", "0", "%"]).display_value, "0.50");
    }

    #[test]
    fn test_clear_display() {
        assert_eq!(run(&["1", "2", "3", "C"]).display_value, "0");
    }

    #[test]
    fn test_clear_entry_then_all_clear() {
        let keypad = Keypad::standard();
        let state = run(&["5", "+", "3"]);
        assert_eq!(state.display_value, "3");
        assert_eq!(clear_label(&state), ClearLabel::ClearEntry);
        assert!(keypad.find(&state, "AC").is_none());

        let state = keypad.press(&state, "C").unwrap();
        assert_eq!(state.display_value, "0");
        assert_eq!(state.value, Some(5.0));
        assert_eq!(clear_label(&state), ClearLabel::AllClear);

        let state = keypad.press(&state, "AC").unwrap();
        assert_eq!(state, CalculatorState::initial());

        let state = keypad.press_all(&state, ["2", "="]).unwrap();
        assert_eq!(state.display_value, "2");
    }

    #[test]
    fn test_unknown_button() {
        let err = Keypad::standard()
            .press(&CalculatorState::initial(), "√")
            .unwrap_err();
        assert!(matches!(err, CalcError::UnknownButton(ref l) if l == "√"));
    }

    #[test]
    fn test_typed_clear_follows_clear_button() {
        let keypad = Keypad::standard();
        let state = keypad
            .press_line(&CalculatorState::initial(), "5+3 C")
            .unwrap();
        assert_eq!(state.display_value, "0");
        assert_eq!(state.value, Some(5.0));
        assert_eq!(state.operator, Some(Operator::Add));

        let state = keypad.press_line(&state, "C").unwrap();
        assert_eq!(state, CalculatorState::initial());

        // AC typed while the button reads C still only clears the entry.
        let state = keypad.press_line(&state, "9+4 AC").unwrap();
        assert_eq!(state.value, Some(9.0));
        assert_eq!(state.display_value, "0");
    }

    #[test]
    fn test_press_line() {
        let keypad = Keypad::standard();
        let state = keypad
            .press_line(&CalculatorState::initial(), "10+5-3x2=")
            .unwrap();
        assert_eq!(state.display_value, "24");

        let state = keypad
            .press_line(&CalculatorState::initial(), "1.5 Backspace Backspace 7 * 2 Enter")
            .unwrap();
        assert_eq!(state.display_value, "34");

        let state = keypad.press_line(&state, "Escape").unwrap();
        assert_eq!(state, CalculatorState::initial());
    }

    #[test]
    fn test_press_line_rejects_unknown_key() {
        let keypad = Keypad::standard();
        let start = keypad.press_line(&CalculatorState::initial(), "6").unwrap();
        let err = keypad.press_line(&start, "+ two").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey(ref k) if k == "two"));
    }

    #[test]
    fn test_display_always_numeric() {
        let sequences: &[&[&str]] = &[
            &["●", "●", "5", "±", "%", "±"],
            &["9", "÷", "0", "=", "±", "+", "1", "="],
            &["0", "÷", "0", "=", "%", "±"],
            &["1", "●", "5", "x", "=", "-", "●", "="],
        ];
        for labels in sequences {
            let mut state = CalculatorState::initial();
            for label in labels.iter() {
                state = Keypad::standard().press(&state, label).unwrap();
                let text = &state.display_value;
                assert!(
                    text.parse::<f64>().is_ok() || crate::calculator::is_overflow_token(text),
                    "display {:?} after {:?}",
                    text,
                    labels
                );
            }
        }
    }
}
