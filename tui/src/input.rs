//! Input handling for the Reckon TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::trace;

use reckon_engine::{Action, App, Command};

use crate::{ScreenLayout, keypad};

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Map a key press to a command.
///
/// Returns `None` for keys with no binding.
#[must_use]
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        KeyCode::Char('t' | 'T') => Some(Command::ToggleTheme),
        KeyCode::Char('c' | 'C') | KeyCode::Esc => Some(Command::Calc(Action::Clear)),
        KeyCode::Backspace | KeyCode::Delete => Some(Command::Calc(Action::Delete)),
        KeyCode::Enter => Some(Command::Calc(Action::Equals)),
        KeyCode::Char(c) => Action::from_symbol(c).map(Command::Calc),
        _ => None,
    }
}

/// Apply one terminal event to the app.
///
/// `screen` is the full terminal area, used to hit-test mouse presses
/// against the keypad.
pub fn apply_event(app: &mut App, event: &Event, screen: Rect) {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return;
            }
            match key_to_command(*key) {
                Some(command) => app.dispatch(command),
                None => trace!(code = ?key.code, "Unbound key"),
            }
        }
        Event::Mouse(mouse) => apply_mouse(app, *mouse, screen),
        _ => {}
    }
}

fn apply_mouse(app: &mut App, mouse: MouseEvent, screen: Rect) {
    let keypad_area = ScreenLayout::new(screen).keypad;
    let hit = keypad::key_at(keypad_area, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = hit {
                app.press_key(action);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.release_key(),
        // Dragging off the held key releases it.
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.pressed_key().is_some() && hit != app.pressed_key() {
                app.release_key();
            }
        }
        _ => {}
    }
}

/// Wait up to `timeout` for input, then drain whatever is queued.
pub fn handle_events(app: &mut App, screen: Rect, timeout: Duration) -> Result<()> {
    if !event::poll(timeout)? {
        return Ok(());
    }

    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = event::read()?;
        apply_event(app, &ev, screen);
        processed += 1;

        if app.should_quit() || !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(())
}
