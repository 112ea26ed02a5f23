// sortty: step-by-step sorting animations in the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::Config;
use sortty::driver::Driver;
use sortty::errors::AppError;
use sortty::ui::App;

fn main() -> Result<(), AppError> {
    let config = Config::parse();
    config.init_logging()?;

    let settings = config.settings();
    log::info!("seed {}", settings.seed);
    let driver = Driver::new(settings);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(driver);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("event loop failed: {}", err);
    }
    res.map_err(AppError::from)
}
