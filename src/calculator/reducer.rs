//! Calculator state and the reducer that drives it.
//!
//! Every key press becomes an [`Action`]; [`reduce`] maps the current
//! [`CalculatorState`] and one action to the next state without mutating
//! the input.

use super::operations::{
    Operator, format_input_value, format_value, is_overflow_token, parse_display,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The complete state of the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Operand stored by the first operator press. `None` until then.
    #[serde(default, with = "operand")]
    pub value: Option<f64>,
    /// Exact text on the display, including in-progress forms like `"5."`.
    pub display_value: String,
    /// Pending operation.
    pub operator: Option<Operator>,
    /// Set right after an operator press: the next digit starts a new number.
    pub waiting_for_operand: bool,
}

/// Stores the operand as display text so infinities and NaN survive
/// formats like JSON that have no literal for them.
mod operand {
    use super::{format_value, parse_display};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&format_value(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        Ok(text.as_deref().map(parse_display))
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            value: None,
            display_value: "0".to_string(),
            operator: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    /// The fixed initial state.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Produce the state that follows `action`.
    pub fn reduce(&self, action: Action) -> Self {
        reduce(self, action)
    }

    /// Apply a sequence of actions in order.
    pub fn apply_all<I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| reduce(&state, action))
    }

    /// Numeric value of the display.
    pub fn display_number(&self) -> f64 {
        parse_display(&self.display_value)
    }

    /// Whether the display shows an overflow token (infinity or NaN).
    pub fn is_overflow(&self) -> bool {
        is_overflow_token(&self.display_value)
    }

    fn with_display(&self, display_value: String) -> Self {
        Self {
            display_value,
            ..self.clone()
        }
    }
}

/// A user action dispatched into the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    /// A digit key `0`-`9`.
    InputDigit(char),
    InputDot,
    InputPercent,
    ToggleSign,
    /// Backspace.
    ClearLastChar,
    /// Clear the entry, keeping the pending operation.
    ClearDisplay,
    /// Reset to the initial state.
    ClearAll,
    PerformOperation(Operator),
}

/// The calculator state machine.
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    let next = match action {
        Action::InputDigit(digit) => input_digit(state, digit),
        Action::InputDot => input_dot(state),
        Action::InputPercent => input_percent(state),
        Action::ToggleSign => toggle_sign(state),
        Action::ClearLastChar => clear_last_char(state),
        Action::ClearDisplay => state.with_display("0".to_string()),
        Action::ClearAll => CalculatorState::initial(),
        Action::PerformOperation(op) => perform_operation(state, op),
    };

    trace!(?action, display = %next.display_value, "reduced");
    next
}

fn input_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    let digit = digit.to_string();

    if state.waiting_for_operand {
        CalculatorState {
            display_value: format_input_value(&digit),
            waiting_for_operand: false,
            ..state.clone()
        }
    } else if state.display_value == "0" || state.is_overflow() {
        state.with_display(format_input_value(&digit))
    } else if state.display_value == "-0" {
        state.with_display(format_input_value(&format!("-{}", digit)))
    } else {
        state.with_display(format_input_value(&format!(
            "{}{}",
            state.display_value, digit
        )))
    }
}

fn input_dot(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_operand || state.is_overflow() {
        CalculatorState {
            display_value: "0.".to_string(),
            waiting_for_operand: false,
            ..state.clone()
        }
    } else if !state.display_value.contains('.') {
        state.with_display(format!("{}.", state.display_value))
    } else {
        state.clone()
    }
}

fn input_percent(state: &CalculatorState) -> CalculatorState {
    let current = state.display_number();
    if current == 0.0 {
        return state.clone();
    }

    let percent = current / 100.0;
    if !percent.is_finite() {
        return state.with_display(format_value(percent));
    }

    // Keep the decimal shape of the input: "50" -> "0.50", "12.5" -> "0.125".
    let fraction_digits = state
        .display_value
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len());

    state.with_display(format!("{:.*}", fraction_digits + 2, percent))
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    if let Some(positive) = state.display_value.strip_prefix('-') {
        return state.with_display(positive.to_string());
    }

    let current = state.display_number();
    if current == 0.0 || current.is_nan() {
        state.clone()
    } else {
        state.with_display(format!("-{}", state.display_value))
    }
}

fn clear_last_char(state: &CalculatorState) -> CalculatorState {
    if state.is_overflow() {
        return state.with_display("0".to_string());
    }

    let mut display = state.display_value.clone();
    if display.chars().count() > 1 {
        display.pop();
    } else {
        display = "0".to_string();
    }

    if display == "-" {
        display = "0".to_string();
    }

    state.with_display(display)
}

fn perform_operation(state: &CalculatorState, next_operator: Operator) -> CalculatorState {
    let input = state.display_number();

    let (value, display_value) = match (state.value, state.operator) {
        (Some(current), Some(pending)) => {
            let result = pending.evaluate(current, input);
            debug!(
                %pending,
                left = current,
                right = input,
                result,
                "folded pending operation"
            );
            (result, pending.format(result))
        }
        _ => (input, state.display_value.clone()),
    };

    CalculatorState {
        value: Some(value),
        display_value,
        operator: Some(next_operator),
        waiting_for_operand: next_operator != Operator::Equals,
    }
}
