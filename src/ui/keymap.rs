//! Key bindings for the calculator
//!
//! Maps crossterm key events to `AppEvent`s:
//! - digits, `+ - x * /`, `.` or `,` → engine operations
//! - `n` negate, `%` percent, Backspace, Enter or `=` evaluate
//! - Esc, Delete or `c` → clear
//! - `y` copy result, `?` or `h` help, `q` or Ctrl-C quit
//!
//! Anything else maps to `AppEvent::None`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::AppEvent;
use crate::engine::{Operation, Operator};

/// Lines shown by the help overlay
pub const HELP_LINES: &[(&str, &str)] = &[
    ("0-9", "enter digits"),
    ("+ - x * /", "operator"),
    (". ,", "decimal point"),
    ("n", "negate"),
    ("%", "percent"),
    ("Backspace", "delete last input"),
    ("Enter =", "evaluate"),
    ("Esc c Del", "clear"),
    ("y", "copy result"),
    ("? h", "toggle help"),
    ("q Ctrl-C", "quit"),
];

pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppEvent::Quit,
            _ => AppEvent::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => char_to_app_event(c),
        KeyCode::Enter => AppEvent::Calculate(Operation::Evaluate),
        KeyCode::Backspace => AppEvent::Calculate(Operation::Backspace),
        KeyCode::Esc | KeyCode::Delete => AppEvent::Calculate(Operation::Clear),
        _ => AppEvent::None,
    }
}

fn char_to_app_event(c: char) -> AppEvent {
    let operation = match c {
        '0'..='9' => Operation::Digit(c),
        '.' | ',' => Operation::DecimalPoint,
        'n' => Operation::Negate,
        '%' => Operation::Percent,
        '=' => Operation::Evaluate,
        'c' => Operation::Clear,
        'X' => Operation::Operator(Operator::Multiply),
        'y' => return AppEvent::CopyResult,
        '?' | 'h' => return AppEvent::ToggleHelp,
        'q' => return AppEvent::Quit,
        _ => match Operator::from_symbol(c.encode_utf8(&mut [0; 4])) {
            Ok(op) => Operation::Operator(op),
            Err(_) => return AppEvent::None,
        },
    };
    AppEvent::Calculate(operation)
}
