//! Keypad buttons.

use crate::calculator::{Action, CalculatorState, Operator};

/// Label of the clear button, derived from the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearLabel {
    /// Display reads `"0"`: the button resets everything.
    AllClear,
    /// Something has been entered: the button clears only the entry.
    ClearEntry,
}

impl ClearLabel {
    pub fn text(self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::ClearEntry => "C",
        }
    }

    /// The action the clear button dispatches while showing this label.
    pub fn action(self) -> Action {
        match self {
            Self::AllClear => Action::ClearAll,
            Self::ClearEntry => Action::ClearDisplay,
        }
    }
}

/// Which clear label the keypad shows for `state`.
pub fn clear_label(state: &CalculatorState) -> ClearLabel {
    if state.display_value == "0" {
        ClearLabel::AllClear
    } else {
        ClearLabel::ClearEntry
    }
}

/// Visual group a button belongs to, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point.
    Input,
    /// Arithmetic operators and `=`.
    Operator,
    /// Clear, sign and percent keys along the top row.
    Function,
}

/// A button on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypadButton {
    Digit(u8),
    Dot,
    Operator(Operator),
    Clear,
    ToggleSign,
    Percent,
}

impl KeypadButton {
    /// Stable identifier for this button.
    pub fn id(&self) -> String {
        match self {
            Self::Digit(d) => format!("key-{}", d),
            Self::Dot => "key-dot".to_string(),
            Self::Operator(op) => format!("key-{:?}", op).to_lowercase(),
            Self::Clear => "key-clear".to_string(),
            Self::ToggleSign => "key-sign".to_string(),
            Self::Percent => "key-percent".to_string(),
        }
    }

    /// The label shown on the button. Only the clear button depends on state.
    pub fn label(&self, state: &CalculatorState) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => "●".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Clear => clear_label(state).text().to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// The action dispatched when the button is pressed in `state`.
    pub fn action(&self, state: &CalculatorState) -> Action {
        match self {
            Self::Digit(d) => Action::InputDigit(char::from(b'0' + d)),
            Self::Dot => Action::InputDot,
            Self::Operator(op) => Action::PerformOperation(*op),
            Self::Clear => clear_label(state).action(),
            Self::ToggleSign => Action::ToggleSign,
            Self::Percent => Action::InputPercent,
        }
    }

    pub fn kind(&self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Dot => ButtonKind::Input,
            Self::Operator(_) => ButtonKind::Operator,
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonKind::Function,
        }
    }

    /// Check if this is the wide `0` key spanning two columns.
    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Digit(0))
    }
}

impl From<Operator> for KeypadButton {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
