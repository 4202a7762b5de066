//! A four-function pocket calculator.
//!
//! The core is a pure reducer over [`calculator::CalculatorState`]; the
//! [`keypad`] module describes the buttons that feed it.

pub mod calculator;
pub mod config;
pub mod error;
pub mod keypad;

pub use calculator::{Action, CalculatorState, Operator, reduce};
pub use error::CalcError;
pub use keypad::{DisplayItem, Keypad};
