use abacus::app::mode::AppMode;
use abacus::app::{App, AppEvent};
use abacus::engine::{Config, EngineState};
use abacus::input::MemoryClipboard;
use abacus::ui::key_to_app_event;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn type_keys(app: &mut App, keys: &str) {
    for c in keys.chars() {
        let code = match c {
            '\n' => KeyCode::Enter,
            '\x08' => KeyCode::Backspace,
            '\x1b' => KeyCode::Esc,
            c => KeyCode::Char(c),
        };
        app.handle_event(key_to_app_event(KeyEvent::new(code, KeyModifiers::NONE)));
    }
}

fn new_app() -> (App, MemoryClipboard) {
    let clipboard = MemoryClipboard::new();
    let app = App::with_clipboard(&Config::default(), Box::new(clipboard.clone()));
    (app, clipboard)
}

#[test]
fn end_to_end_calculation() {
    let (mut app, _) = new_app();

    type_keys(&mut app, "12");
    assert_eq!(app.display().trace, "12");

    type_keys(&mut app, "+");
    assert_eq!(app.display().trace, "12 +");

    type_keys(&mut app, "3");
    assert_eq!(app.display().trace, "12 + 3");

    type_keys(&mut app, "\n");
    assert_eq!(app.display().result, "15");
    assert_eq!(app.display().trace, "12 + 3");
    assert_eq!(app.engine().state(), EngineState::AfterEquals);
}

#[test]
fn end_to_end_chaining_and_copy() {
    let (mut app, clipboard) = new_app();

    type_keys(&mut app, "250x4=");
    assert_eq!(app.display().result, "1,000");

    type_keys(&mut app, "*3=");
    assert_eq!(app.display().trace, "1000 x 3");
    assert_eq!(app.display().result, "3,000");

    type_keys(&mut app, "y");
    assert_eq!(clipboard.contents(), Some("3000".to_string()));
}

#[test]
fn end_to_end_editing_keys() {
    let (mut app, _) = new_app();

    type_keys(&mut app, "50%");
    assert_eq!(app.display().trace, "0.5");

    type_keys(&mut app, "n");
    assert_eq!(app.display().trace, "-0.5");

    type_keys(&mut app, "\x08\x08\x08");
    assert_eq!(app.display().trace, "");
    assert_eq!(app.engine().state(), EngineState::Empty);
}

#[test]
fn end_to_end_clear_and_quit() {
    let (mut app, _) = new_app();

    type_keys(&mut app, "7x6\n");
    assert_eq!(app.display().result, "42");

    type_keys(&mut app, "\x1b");
    assert_eq!(app.display().trace, "");
    assert_eq!(app.display().result, "0");
    assert!(app.engine().history().is_empty());

    type_keys(&mut app, "q");
    assert_eq!(app.mode(), AppMode::Quit);
}

#[test]
fn end_to_end_division_is_not_reduced() {
    let (mut app, _) = new_app();
    type_keys(&mut app, "6/2=");
    assert_eq!(app.display().result, "NaN");
}

#[test]
fn end_to_end_tie_rounds_up_and_chains() {
    let (mut app, clipboard) = new_app();

    type_keys(&mut app, "0.0625\n");
    assert_eq!(app.display().result, "0.063");

    type_keys(&mut app, "y");
    assert_eq!(clipboard.contents(), Some("0.063".to_string()));

    type_keys(&mut app, "x2\n");
    assert_eq!(app.display().trace, "0.063 x 2");
    assert_eq!(app.display().result, "0.126");
}
