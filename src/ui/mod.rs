pub mod keymap;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use keymap::key_to_app_event;
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
