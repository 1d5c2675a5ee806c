use crate::app::{mode::AppMode, App};
use crate::engine::AbacusError;
use crate::ui::keymap::key_to_app_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, AbacusError> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Block on key events until the app asks to quit. Every handled event
    /// runs to completion and is followed by a redraw.
    pub fn run_event_loop(&mut self, app: &mut App) -> Result<(), AbacusError> {
        self.render_frame(app)?;

        while app.mode() != AppMode::Quit {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let app_event = key_to_app_event(key);
                    debug!(code = ?key.code, event = ?app_event, "key");
                    app.handle_event(app_event);
                    self.render_frame(app)?;
                }
                Event::Resize(_, _) => self.render_frame(app)?,
                _ => {}
            }
        }

        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> Result<(), AbacusError> {
        let render_state = app.get_render_state();
        self.terminal
            .draw(|frame| view::draw(frame, &render_state))?;
        Ok(())
    }
}
