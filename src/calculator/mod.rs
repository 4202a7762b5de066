//! Calculator core.
//!
//! This module provides:
//! - The operation table mapping operators to functions and formatters
//! - The state reducer driving digit entry and chained operations
//! - Translation of key tokens into reducer actions

mod keys;
mod operations;
mod reducer;

pub use keys::tokenize;
pub use operations::{
    INFINITY_GLYPH, NAN_TOKEN, NEG_INFINITY_GLYPH, Operation, Operator, format_input_value,
    format_value, is_overflow_token, parse_display,
};
pub use reducer::{Action, CalculatorState, reduce};
