//! Transient feedback shown on top of the calculator readout.

use std::time::Duration;

use super::countdown::Countdown;
use crate::Action;

/// How long a keypad key stays highlighted after it is pressed.
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(120);

/// How long a notification stays in the status line.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Highlight for the keypad key that was just pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct PressFeedback {
    key: Action,
    timer: Countdown,
}

impl PressFeedback {
    #[must_use]
    pub fn new(key: Action) -> Self {
        Self {
            key,
            timer: Countdown::new(PRESS_FEEDBACK),
        }
    }

    #[must_use]
    pub fn key(&self) -> Action {
        self.key
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A message for the user in the status line.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    message: String,
    level: NotificationLevel,
    timer: Countdown,
}

impl Notification {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }

    fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            timer: Countdown::new(NOTIFICATION_TTL),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.timer.is_finished()
    }
}
