//! Clicking keypad cells with the mouse.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use reckon_engine::{Action, Digit, Operator};
use reckon_tui::apply_event;

use crate::common::{SCREEN, click, test_app};

fn digit(ch: char) -> Action {
    Action::Digit(Digit::new(ch).unwrap())
}

#[test]
fn clicking_keys_computes() {
    let mut app = test_app();
    for action in [
        digit('1'),
        digit('2'),
        Action::Operator(Operator::Add),
        digit('3'),
        Action::Equals,
    ] {
        click(&mut app, action);
    }
    assert_eq!(app.readout().primary, "15");
    // Each click was released.
    assert_eq!(app.pressed_key(), None);
}

#[test]
fn every_keypad_key_is_clickable() {
    let mut app = test_app();
    click(&mut app, digit('9'));
    click(&mut app, Action::Percent);
    assert_eq!(app.readout().primary, "0.09");

    click(&mut app, Action::Delete);
    assert_eq!(app.readout().primary, "0.0");

    click(&mut app, Action::Clear);
    assert_eq!(app.readout().primary, "0");

    click(&mut app, digit('0'));
    click(&mut app, Action::Digit(Digit::POINT));
    click(&mut app, digit('5'));
    click(&mut app, Action::Operator(Operator::Multiply));
    click(&mut app, digit('4'));
    click(&mut app, Action::Operator(Operator::Subtract));
    assert_eq!(app.readout().secondary, "2 -");
    click(&mut app, digit('8'));
    click(&mut app, Action::Operator(Operator::Divide));
    click(&mut app, digit('2'));
    click(&mut app, digit('6'));
    click(&mut app, digit('7'));
    click(&mut app, Action::Equals);
    assert_eq!(app.readout().primary, "-0.02247191");
}

#[test]
fn held_key_stays_highlighted_until_release() {
    let mut app = test_app();
    let cells = reckon_tui::keypad_cells(reckon_tui::ScreenLayout::new(SCREEN).keypad);
    let equals = cells
        .iter()
        .find(|cell| cell.action == Action::Equals)
        .unwrap();

    let down = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: equals.area.x + 1,
        row: equals.area.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    apply_event(&mut app, &down, SCREEN);
    assert_eq!(app.pressed_key(), Some(Action::Equals));

    let up = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    apply_event(&mut app, &up, SCREEN);
    assert_eq!(app.pressed_key(), None);
}

#[test]
fn right_click_does_nothing() {
    let mut app = test_app();
    let cells = reckon_tui::keypad_cells(reckon_tui::ScreenLayout::new(SCREEN).keypad);
    let seven = cells.iter().find(|cell| cell.action == digit('7')).unwrap();

    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: seven.area.x + 1,
        row: seven.area.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    apply_event(&mut app, &event, SCREEN);
    assert_eq!(app.readout().primary, "0");
}
