use crate::app::mode::AppMode;
use crate::engine::EngineState;

/// Snapshot handed to the view each frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub trace: String,
    pub result: String,
    pub engine_state: EngineState,
    pub status: Option<String>,
}

impl RenderState {
    /// Render state for a freshly started calculator
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            trace: String::new(),
            result: "0".to_string(),
            engine_state: EngineState::Empty,
            status: None,
        }
    }

    pub fn show_help(&self) -> bool {
        self.mode == AppMode::Help
    }
}
