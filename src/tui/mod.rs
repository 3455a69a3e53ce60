//! Terminal UI for morpion.

mod app;
mod input;
pub mod ui;

pub use app::{App, MenuAction, Status, TurnOutcome};
pub use input::move_cursor;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before returning, also when the event loop
/// fails.
#[instrument(skip(app))]
pub fn run(app: App) -> Result<()> {
    info!("Starting morpion TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Event loop: each event is handled to completion before the next read.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => {}
        }

        if app.should_quit() {
            info!("Leaving event loop");
            return Ok(());
        }
    }
}
