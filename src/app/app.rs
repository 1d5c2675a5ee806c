use tracing::{info, warn};

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::format::display_to_operand;
use crate::engine::{Config, DisplayModel, Engine};
use crate::input::{Clipboard, SystemClipboard};

pub struct App {
    mode: AppMode,
    engine: Engine,
    display: DisplayModel,
    clipboard: Box<dyn Clipboard>,
    status: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: &Config, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            mode: AppMode::Calculating,
            engine: Engine::with_config(config.display.clone(), config.evaluator.clone()),
            display: DisplayModel::default(),
            clipboard,
            status: None,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Calculate(operation) => {
                self.mode = AppMode::Calculating;
                self.status = None;
                self.engine.apply(operation, &mut self.display);
            }
            AppEvent::CopyResult => self.copy_result(),
            AppEvent::ToggleHelp => {
                self.mode = match self.mode {
                    AppMode::Help => AppMode::Calculating,
                    _ => AppMode::Help,
                };
            }
            AppEvent::Quit => {
                info!("quit requested");
                self.mode = AppMode::Quit;
            }
            AppEvent::None => {}
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState {
            mode: self.mode,
            trace: self.display.trace.clone(),
            result: self.display.result.clone(),
            engine_state: self.engine.state(),
            status: self.status.clone(),
        }
    }

    fn copy_result(&mut self) {
        let text = display_to_operand(&self.display.result, self.engine.display_config());
        self.status = match self.clipboard.set_text(&text) {
            Ok(()) => Some(format!("Copied {}", text)),
            Err(e) => {
                warn!(error = %e, "copy failed");
                Some(e.to_string())
            }
        };
    }
}
