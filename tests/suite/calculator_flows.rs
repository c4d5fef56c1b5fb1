//! End-to-end key sequences through the keyboard adapter and the engine.

use crossterm::event::KeyCode;
use insta::assert_snapshot;

use crate::common::{chars, send, test_app, transcript, type_str};

#[test]
fn simple_addition() {
    let mut app = test_app();
    assert_snapshot!(transcript(&mut app, &chars("12+7=")), @r"
    1 => [] 1
    2 => [] 12
    + => [12 +] 12
    7 => [12 +] 7
    = => [] 19
    ");
}

#[test]
fn chained_operators_compute_left_to_right() {
    let mut app = test_app();
    assert_snapshot!(transcript(&mut app, &chars("2+3*4=")), @r"
    2 => [] 2
    + => [2 +] 2
    3 => [2 +] 3
    * => [5 ×] 5
    4 => [5 ×] 4
    = => [] 20
    ");
}

#[test]
fn divide_by_zero_reports_and_resets() {
    let mut app = test_app();
    assert_snapshot!(transcript(&mut app, &chars("5/0=7")), @r"
    5 => [] 5
    / => [5 ÷] 5
    0 => [5 ÷] 0
    = => [] 0 (Cannot divide by zero)
    7 => [] 7
    ");
}

#[test]
fn divide_by_zero_while_chaining_keeps_the_new_operator() {
    let mut app = test_app();
    assert_snapshot!(transcript(&mut app, &chars("5/0+4=")), @r"
    5 => [] 5
    / => [5 ÷] 5
    0 => [5 ÷] 0
    + => [0 +] 0 (Cannot divide by zero)
    4 => [0 +] 4
    = => [] 4
    ");
}

#[test]
fn editing_keys() {
    let mut app = test_app();
    let keys = [
        KeyCode::Char('1'),
        KeyCode::Char('2'),
        KeyCode::Char('.'),
        KeyCode::Char('5'),
        KeyCode::Backspace,
        KeyCode::Delete,
        KeyCode::Char('%'),
        KeyCode::Esc,
    ];
    assert_snapshot!(transcript(&mut app, &keys), @r"
    1 => [] 1
    2 => [] 12
    . => [] 12.
    5 => [] 12.5
    Backspace => [] 12.
    Delete => [] 12
    % => [] 0.12
    Esc => [] 0
    ");
}

#[test]
fn equals_with_no_second_operand_reuses_the_first() {
    let mut app = test_app();
    assert_snapshot!(transcript(&mut app, &chars("5+==")), @r"
    5 => [] 5
    + => [5 +] 5
    = => [] 10
    = => [] 10
    ");
}

#[test]
fn enter_computes() {
    let mut app = test_app();
    type_str(&mut app, "9-12");
    send(&mut app, KeyCode::Enter);
    assert_eq!(app.readout().primary, "-3");
}

#[test]
fn one_third_rounds_to_eight_places() {
    let mut app = test_app();
    type_str(&mut app, "1/3=");
    assert_eq!(app.readout().primary, "0.33333333");
}

#[test]
fn fifty_percent() {
    let mut app = test_app();
    type_str(&mut app, "50%");
    assert_eq!(app.readout().primary, "0.5");
}

#[test]
fn second_decimal_point_is_ignored() {
    let mut app = test_app();
    type_str(&mut app, "1..2.");
    assert_eq!(app.readout().primary, "1.2");
}

#[test]
fn operand_length_is_capped() {
    let mut app = test_app();
    type_str(&mut app, &"7".repeat(20));
    assert_eq!(app.readout().primary, "7".repeat(16));
}

#[test]
fn digit_after_result_starts_a_new_operand() {
    let mut app = test_app();
    type_str(&mut app, "6*7=");
    assert_eq!(app.readout().primary, "42");
    type_str(&mut app, "8");
    assert_eq!(app.readout().primary, "8");
}

#[test]
fn delete_after_result_resets_to_zero() {
    let mut app = test_app();
    type_str(&mut app, "6*7=");
    send(&mut app, KeyCode::Backspace);
    assert_eq!(app.readout().primary, "0");
    type_str(&mut app, "3");
    assert_eq!(app.readout().primary, "3");
}

#[test]
fn clear_key_resets_everything() {
    let mut app = test_app();
    type_str(&mut app, "4+5");
    type_str(&mut app, "c");
    let readout = app.readout();
    assert_eq!(readout.secondary, "");
    assert_eq!(readout.primary, "0");
}

#[test]
fn quit_key_requests_quit() {
    let mut app = test_app();
    type_str(&mut app, "q");
    assert!(app.should_quit());
}
