//! Terminal setup, teardown and the main loop
//!
//! Raw mode and the alternate screen are undone on exit and on panic.

use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;
use super::views;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen
pub fn init_terminal() -> Result<Tui> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        // Leave the screen first or the panic message is lost
        let _ = restore_terminal();
        previous_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Open the store and run the interactive UI until the user quits
pub fn run_tui(storage: &Storage, settings: &Settings) -> Result<()> {
    let app = App::new(storage, settings, storage.open_store()?);

    let mut terminal = init_terminal()?;
    let outcome = run_loop(&mut terminal, app, settings);
    restore_terminal()?;

    outcome
}

/// Draw, wait for one event, handle it, then save whatever changed
fn run_loop(terminal: &mut Tui, mut app: App, settings: &Settings) -> Result<()> {
    let events = EventHandler::new(settings.tick_rate());

    while !app.should_quit {
        terminal.draw(|frame| views::render(frame, &mut app))?;

        let event = events.next()?;
        handle_event(&mut app, event)?;
        app.persist()?;
    }

    Ok(())
}
