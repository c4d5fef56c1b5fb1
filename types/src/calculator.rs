//! The calculator state machine.
//!
//! ```text
//!            digit                       operator / equals
//!   Entering ─────▶ Entering     Entering ────────────────▶ PendingResult
//!                                                               │
//!   PendingResult ── digit ──▶ Entering (operand starts fresh) ◀┘
//! ```
//!
//! `PendingResult` is the `reset_screen` flag. Every operation either
//! completes or leaves the state untouched; the two arithmetic errors reset
//! the calculator to its initial state before they are returned. Choosing an
//! operator after such a reset still selects it.

use thiserror::Error;

use crate::action::{Action, Digit, GlyphStyle, Operator};
use crate::number::{format_number, parse_operand};

/// Longest operand the user can type. Computed results are not truncated.
pub const MAX_OPERAND_LEN: usize = 16;

/// User-facing arithmetic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Result is out of range")]
    OutOfRange,
}

/// The two display lines derived from calculator state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readout {
    /// Pending operand and operator, e.g. `"12 ×"`. May be empty.
    pub secondary: String,
    /// Operand being typed or the last result.
    pub primary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    current: String,
    previous: String,
    operation: Option<Operator>,
    reset_screen: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            reset_screen: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn previous(&self) -> &str {
        &self.previous
    }

    #[must_use]
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Whether the next digit starts a new operand.
    #[must_use]
    pub fn should_reset_screen(&self) -> bool {
        self.reset_screen
    }

    /// Dispatch one action to the matching state transition.
    pub fn apply(&mut self, action: Action) -> Result<(), CalcError> {
        match action {
            Action::Digit(digit) => self.append_digit(digit),
            Action::Operator(op) => return self.choose_operation(op),
            Action::Equals => return self.compute(),
            Action::Clear => self.clear(),
            Action::Delete => self.delete_digit(),
            Action::Percent => self.percentage(),
        }
        Ok(())
    }

    pub fn append_digit(&mut self, digit: Digit) {
        if self.reset_screen {
            self.current.clear();
            self.reset_screen = false;
        }

        if digit.is_point() && self.current.contains('.') {
            return;
        }
        if self.current.len() >= MAX_OPERAND_LEN {
            return;
        }

        if self.current == "0" && !digit.is_point() {
            self.current.clear();
        }
        self.current.push(digit.as_char());
    }

    /// Select the pending operation, first collapsing any operation that is
    /// already pending (left-to-right chaining, no precedence).
    ///
    /// A failed collapse still selects `op`, on top of the cleared state, and
    /// the error is returned afterwards.
    pub fn choose_operation(&mut self, op: Operator) -> Result<(), CalcError> {
        if self.current.is_empty() {
            return Ok(());
        }

        let collapsed = if self.previous.is_empty() {
            Ok(())
        } else {
            self.compute()
        };

        self.operation = Some(op);
        self.previous.clone_from(&self.current);
        self.reset_screen = true;
        collapsed
    }

    /// Apply the pending operation to the two operands.
    ///
    /// Leaves the state untouched when no operation is pending or an operand
    /// does not parse. On error the calculator is cleared.
    pub fn compute(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.operation else {
            return Ok(());
        };
        let (Some(lhs), Some(rhs)) = (parse_operand(&self.previous), parse_operand(&self.current))
        else {
            return Ok(());
        };

        match op.apply(lhs, rhs) {
            Ok(value) => {
                self.current = format_number(value);
                self.operation = None;
                self.previous.clear();
                self.reset_screen = true;
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Divide the current operand by 100. The pending operation is untouched.
    pub fn percentage(&mut self) {
        if self.current == "0" || self.current.is_empty() {
            return;
        }
        let Some(value) = parse_operand(&self.current) else {
            return;
        };
        self.current = format_number(value / 100.0);
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn delete_digit(&mut self) {
        if self.current.chars().count() <= 1 || self.reset_screen {
            self.current = "0".to_string();
            self.reset_screen = false;
            return;
        }

        self.current.pop();
    }

    #[must_use]
    pub fn readout(&self, style: GlyphStyle) -> Readout {
        let secondary = match self.operation {
            Some(op) => format!("{} {}", self.previous, op.glyph(style)),
            None => self.previous.clone(),
        };
        Readout {
            secondary,
            primary: self.current.clone(),
        }
    }
}
