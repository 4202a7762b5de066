//! Operation table for the calculator.
//!
//! Maps each operator to its binary function and the formatter used to
//! render its result on the display.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display token for positive infinity.
pub const INFINITY_GLYPH: &str = "∞";
/// Display token for negative infinity.
pub const NEG_INFINITY_GLYPH: &str = "-∞";
/// Display token for not-a-number results (`0 / 0`).
pub const NAN_TOKEN: &str = "NaN";

/// An operator the calculator can hold as its pending operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    /// Pseudo-operator that evaluates to its right operand.
    #[serde(rename = "=")]
    Equals,
}

/// A binary function paired with the formatter for its result.
pub struct Operation {
    pub func: fn(f64, f64) -> f64,
    pub format: fn(f64) -> String,
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    a / b
}

fn right(_: f64, b: f64) -> f64 {
    b
}

static ADD: Operation = Operation {
    func: add,
    format: format_value,
};
static SUBTRACT: Operation = Operation {
    func: subtract,
    format: format_value,
};
static MULTIPLY: Operation = Operation {
    func: multiply,
    format: format_value,
};
static DIVIDE: Operation = Operation {
    func: divide,
    format: format_value,
};
static EQUALS: Operation = Operation {
    func: right,
    format: format_value,
};

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
        Operator::Equals,
    ];

    /// Parse an operator from its symbol.
    ///
    /// Accepts the ASCII symbols as well as the keypad glyphs
    /// (`×`, `x`, `X` for multiply and `÷` for divide).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" | "x" | "X" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            "=" => Some(Self::Equals),
            _ => None,
        }
    }

    /// The canonical ASCII symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equals => "=",
        }
    }

    /// The label shown on the keypad button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Multiply => "x",
            Self::Divide => "÷",
            other => other.symbol(),
        }
    }

    pub fn operation(self) -> &'static Operation {
        match self {
            Self::Add => &ADD,
            Self::Subtract => &SUBTRACT,
            Self::Multiply => &MULTIPLY,
            Self::Divide => &DIVIDE,
            Self::Equals => &EQUALS,
        }
    }

    /// Apply this operator to two operands.
    ///
    /// Division by zero follows IEEE semantics: `x / 0` is signed infinity
    /// and `0 / 0` is NaN. Neither is treated as an error.
    pub fn evaluate(self, left: f64, right: f64) -> f64 {
        (self.operation().func)(left, right)
    }

    /// Render a result of this operator for the display.
    pub fn format(self, value: f64) -> String {
        (self.operation().format)(value)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Format a number for the display.
///
/// Whole numbers drop the fractional part, other values use the shortest
/// representation that round-trips. Infinities and NaN render as their
/// display tokens.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        NAN_TOKEN.to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            INFINITY_GLYPH.to_string()
        } else {
            NEG_INFINITY_GLYPH.to_string()
        }
    } else if value == 0.0 {
        // Also catches -0.0, which would otherwise print as "-0".
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Formatter for in-progress literals. Currently the identity.
pub fn format_input_value(raw: &str) -> String {
    raw.to_string()
}

/// Parse display text back into a number.
///
/// Understands everything [`format_value`] produces plus in-progress
/// literals such as `"5."`. Text that is not a number parses as zero.
pub fn parse_display(text: &str) -> f64 {
    match text {
        INFINITY_GLYPH => f64::INFINITY,
        NEG_INFINITY_GLYPH => f64::NEG_INFINITY,
        NAN_TOKEN | "-NaN" => f64::NAN,
        _ => text.parse().unwrap_or(0.0),
    }
}

/// Check whether display text is one of the overflow tokens.
pub fn is_overflow_token(text: &str) -> bool {
    matches!(text, INFINITY_GLYPH | NEG_INFINITY_GLYPH | NAN_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Operator::Divide.evaluate(6.0, 2.0), 3.0);
        assert_eq!(Operator::Multiply.evaluate(6.0, 2.0), 12.0);
        assert_eq!(Operator::Subtract.evaluate(6.0, 2.0), 4.0);
        assert_eq!(Operator::Add.evaluate(6.0, 2.0), 8.0);
    }

    #[test]
    fn test_equals_returns_right_operand() {
        assert_eq!(Operator::Equals.evaluate(6.0, 2.0), 2.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Operator::Divide.evaluate(6.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.evaluate(-6.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.evaluate(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(8.0), "8");
        assert_eq!(format_value(-4.0), "-4");
        assert_eq!(format_value(0.125), "0.125");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_value(f64::INFINITY), "∞");
        assert_eq!(format_value(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(Operator::Divide.format(Operator::Divide.evaluate(5.0, 0.0)), "∞");
    }

    #[test]
    fn test_format_input_value_is_identity() {
        assert_eq!(format_input_value("5.7"), "5.7");
        assert_eq!(format_input_value("0."), "0.");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12"), 12.0);
        assert_eq!(parse_display("5."), 5.0);
        assert_eq!(parse_display("-0.5"), -0.5);
        assert_eq!(parse_display("∞"), f64::INFINITY);
        assert_eq!(parse_display("-∞"), f64::NEG_INFINITY);
        assert!(parse_display("NaN").is_nan());
        assert_eq!(parse_display(""), 0.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("%"), None);
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operator::from_symbol(op.glyph()), Some(op));
        }
    }
}
