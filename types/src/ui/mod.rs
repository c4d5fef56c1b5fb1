//! UI state types for the TUI layer.
//!
//! Pure data types with no IO and no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod countdown;
mod feedback;
mod view_state;

pub use countdown::Countdown;
pub use feedback::{
    NOTIFICATION_TTL, Notification, NotificationLevel, PRESS_FEEDBACK, PressFeedback,
};
pub use view_state::{Theme, UiOptions};
