use abacus::app::App;
use abacus::engine::Config;
use abacus::logging;
use abacus::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let _log_guard = logging::init(&config.log)?;

    let mut app = App::new(&config);
    let mut tui = TuiManager::new()?;

    tui.run_event_loop(&mut app)?;

    Ok(())
}
