//! Shared test utilities and fixtures
//!
//! Drives the app the way the terminal does: crossterm events through
//! `reckon_tui::apply_event`.

#![allow(dead_code)]

use std::fmt::Write as _;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use reckon_engine::{Action, App, MemoryPreferenceStore, UiOptions};
use reckon_tui::{ScreenLayout, apply_event, keypad_cells};

pub const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

pub fn test_app() -> App {
    test_app_with(UiOptions::default())
}

pub fn test_app_with(options: UiOptions) -> App {
    App::new(options, MemoryPreferenceStore::new())
}

/// One key press per character.
pub fn chars(keys: &str) -> Vec<KeyCode> {
    keys.chars().map(KeyCode::Char).collect()
}

pub fn send(app: &mut App, code: KeyCode) {
    let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
    apply_event(app, &event, SCREEN);
}

pub fn type_str(app: &mut App, keys: &str) {
    for code in chars(keys) {
        send(app, code);
    }
}

/// Left-click the keypad key bound to `action`, then release.
pub fn click(app: &mut App, action: Action) {
    let cell = keypad_cells(ScreenLayout::new(SCREEN).keypad)
        .into_iter()
        .find(|cell| cell.action == action)
        .expect("action is on the keypad");
    let (column, row) = (cell.area.x + 1, cell.area.y + 1);

    for kind in [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ] {
        let event = Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
        apply_event(app, &event, SCREEN);
    }
}

/// Press each key and record the display after it, one line per key:
/// `key => [secondary] primary`, followed by any notification in parens.
pub fn transcript(app: &mut App, keys: &[KeyCode]) -> String {
    let mut out = String::new();
    for &code in keys {
        send(app, code);
        let readout = app.readout();
        let _ = write!(
            out,
            "{} => [{}] {}",
            key_name(code),
            readout.secondary,
            readout.primary
        );
        if let Some(note) = app.notification() {
            let _ = write!(out, " ({})", note.message());
        }
        out.push('\n');
    }
    out
}

fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        other => format!("{other:?}"),
    }
}
