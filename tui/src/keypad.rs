//! Keypad layout and hit testing.
//!
//! Five rows of four columns. The `0` key spans two columns.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use reckon_engine::Action;

pub const KEYPAD_ROWS: usize = 5;
pub const KEYPAD_COLUMNS: usize = 4;

/// Keypad symbols with their column span, top row first.
///
/// `C` and `⌫` stand for clear and delete; everything else is an
/// [`Action::from_symbol`] symbol.
const LAYOUT: [&[(char, u16)]; KEYPAD_ROWS] = [
    &[('C', 1), ('⌫', 1), ('%', 1), ('÷', 1)],
    &[('7', 1), ('8', 1), ('9', 1), ('×', 1)],
    &[('4', 1), ('5', 1), ('6', 1), ('−', 1)],
    &[('1', 1), ('2', 1), ('3', 1), ('+', 1)],
    &[('0', 2), ('.', 1), ('=', 1)],
];

fn slot_action(symbol: char) -> Option<Action> {
    match symbol {
        'C' => Some(Action::Clear),
        '⌫' => Some(Action::Delete),
        other => Action::from_symbol(other),
    }
}

/// One key's position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCell {
    pub area: Rect,
    pub action: Action,
}

/// Lay the keypad out inside `area`.
#[must_use]
pub fn keypad_cells(area: Rect) -> Vec<KeyCell> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, KEYPAD_ROWS as u32); KEYPAD_ROWS])
        .split(area);

    let mut cells = Vec::with_capacity(KEYPAD_ROWS * KEYPAD_COLUMNS);
    for (row_area, slots) in rows.iter().zip(LAYOUT) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, KEYPAD_COLUMNS as u32); KEYPAD_COLUMNS])
            .split(*row_area);

        let mut column = 0usize;
        for &(symbol, span) in slots {
            let span = usize::from(span);
            let Some(first) = columns.get(column) else {
                break;
            };
            let last = columns.get(column + span - 1).unwrap_or(first);
            if let Some(action) = slot_action(symbol) {
                cells.push(KeyCell {
                    area: first.union(*last),
                    action,
                });
            }
            column += span;
        }
    }
    cells
}

/// The key under a screen position, if any.
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Action> {
    let position = Position::new(column, row);
    keypad_cells(area)
        .into_iter()
        .find(|cell| cell.area.contains(position))
        .map(|cell| cell.action)
}
