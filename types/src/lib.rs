//! Core domain types for Reckon.
//!
//! This crate contains the calculator state machine and the pure data types
//! around it. No IO, no terminal, minimal dependencies; everything here can
//! be used from any layer of the application.

mod action;
mod calculator;
mod number;
pub mod ui;

pub use action::{Action, Digit, GlyphStyle, InvalidDigit, Operator};
pub use calculator::{CalcError, Calculator, MAX_OPERAND_LEN, Readout};
pub use number::{MAX_FRACTION_DIGITS, format_number, parse_operand};
