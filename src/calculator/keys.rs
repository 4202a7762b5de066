//! Key input for the calculator.
//!
//! Translates keypad labels and keyboard keys into reducer actions, and
//! splits a typed line such as `10+5-3x2=` into individual key tokens.

use super::operations::Operator;
use super::reducer::Action;
use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches one key token. Named keys come first so `AC` is not read
    /// as `A` followed by `C`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i:backspace|escape|enter|clear|AC|CE)|[0-9]|[.,●%±⌫+\-−*×/÷=xXC]|\S+"
    ).unwrap();
}

impl Action {
    /// Map a single key token to an action.
    ///
    /// Tokens are keypad labels (`7`, `●`, `÷`, `AC`) or keyboard key names
    /// (`Backspace`, `Enter`, `Escape`). Named keys are case-insensitive.
    pub fn from_key(key: &str) -> Result<Self, CalcError> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_ascii_digit()
        {
            return Ok(Self::InputDigit(c));
        }

        let action = match key {
            "." | "," | "●" => Self::InputDot,
            "%" => Self::InputPercent,
            "±" => Self::ToggleSign,
            "⌫" => Self::ClearLastChar,
            "C" => Self::ClearDisplay,
            _ => {
                if let Some(op) = Operator::from_symbol(key) {
                    Self::PerformOperation(op)
                } else {
                    match key.to_ascii_lowercase().as_str() {
                        "backspace" => Self::ClearLastChar,
                        "ce" => Self::ClearDisplay,
                        "ac" | "escape" | "clear" => Self::ClearAll,
                        "enter" => Self::PerformOperation(Operator::Equals),
                        _ => return Err(CalcError::UnknownKey(key.to_string())),
                    }
                }
            }
        };

        Ok(action)
    }
}

/// Split a typed line into key tokens.
///
/// Whitespace separates tokens and is otherwise ignored. Unrecognised runs
/// of characters come back as a single token so the caller can report them.
pub fn tokenize(line: &str) -> Vec<&str> {
    KEY_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}
