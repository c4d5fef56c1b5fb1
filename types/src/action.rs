//! Calculator input vocabulary: digits, operators and actions.

use thiserror::Error;

use crate::CalcError;

// ============================================================================
// Digit
// ============================================================================

/// A single operand character: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not a digit or decimal point")]
pub struct InvalidDigit(pub char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    pub fn new(ch: char) -> Result<Self, InvalidDigit> {
        if ch.is_ascii_digit() || ch == '.' {
            Ok(Self(ch))
        } else {
            Err(InvalidDigit(ch))
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    #[must_use]
    pub const fn is_point(self) -> bool {
        self.0 == '.'
    }
}

// ============================================================================
// Operator
// ============================================================================

/// How operator glyphs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map an input symbol to an operator. Accepts the keyboard spellings
    /// (`*`, `x`, `/`) as well as the display glyphs (`×`, `÷`, `−`).
    #[must_use]
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    #[must_use]
    pub const fn glyph(self, style: GlyphStyle) -> &'static str {
        match (self, style) {
            (Self::Add, _) => "+",
            (Self::Subtract, _) => "-",
            (Self::Multiply, GlyphStyle::Unicode) => "×",
            (Self::Multiply, GlyphStyle::Ascii) => "*",
            (Self::Divide, GlyphStyle::Unicode) => "÷",
            (Self::Divide, GlyphStyle::Ascii) => "/",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operator to two parsed operands.
    ///
    /// Division by zero is reported instead of producing an infinity, and any
    /// other non-finite result (overflow) is reported as out of range.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::OutOfRange)
        }
    }
}

// ============================================================================
// Action
// ============================================================================

/// One user action understood by the calculator state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Clear,
    Delete,
    Percent,
}

impl Action {
    /// Map a keypad symbol to an action.
    ///
    /// Covers digits, the decimal point, operators, `=` and `%`. Clear and
    /// delete have no single-character symbol; input adapters map them from
    /// named keys.
    #[must_use]
    pub fn from_symbol(ch: char) -> Option<Self> {
        if let Ok(digit) = Digit::new(ch) {
            return Some(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// Keypad label for this action.
    #[must_use]
    pub fn label(self, style: GlyphStyle) -> String {
        match self {
            Self::Digit(digit) => digit.as_char().to_string(),
            Self::Operator(op) => op.glyph(style).to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => match style {
                GlyphStyle::Unicode => "⌫".to_string(),
                GlyphStyle::Ascii => "DEL".to_string(),
            },
            Self::Percent => "%".to_string(),
        }
    }
}
