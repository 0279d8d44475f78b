//! Terminal setup and teardown around the to-do list.

use std::io;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::cli::Config;
use crate::error::Result;
use crate::store::TaskStore;
use crate::tui::app::App;

/// Initialise the terminal, run the to-do list until the user quits and hand
/// back the final store. The terminal is restored on every path, including
/// failures part-way through setup.
pub fn run_tui(config: &Config) -> Result<TaskStore> {
    with_restore(enter_terminal, || run_app(config), leave_terminal)
}

fn enter_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
}

/// Undo every step of `enter_terminal`, attempting all of them even when one
/// fails, and report the first failure.
fn leave_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

fn run_app(config: &Config) -> Result<TaskStore> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(tick_ms = config.tick.as_millis() as u64, "starting ui");
    let mut app = App::new(config);
    app.run(&mut terminal)?;
    Ok(app.into_store())
}

/// Run `body` between `enter` and `leave`. `leave` always runs, even when
/// `enter` or `body` fails; the first error wins.
fn with_restore<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let result = enter().map_err(Into::into).and_then(|()| body());
    let restored = leave();
    let value = result?;
    restored?;
    Ok(value)
}
