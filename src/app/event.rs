use crate::engine::Operation;

/// Application events
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppEvent {
    Calculate(Operation),
    CopyResult,
    ToggleHelp,
    Quit,
    None,
}
