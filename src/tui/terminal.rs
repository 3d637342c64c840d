//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::Path;

use crate::config::Settings;
use crate::services::Dashboard;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_key;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive dashboard until the user quits
pub fn run_tui(dashboard: Dashboard, settings: &Settings, output_dir: &Path) -> Result<()> {
    log::info!(
        "Starting TUI for {} ({})",
        settings.profile_name,
        dashboard.period()
    );

    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create app state
    let mut app = App::new(dashboard, settings, output_dir);

    // Create event handler
    let events = EventHandler::default();

    // Main event loop
    let result = run_loop(&mut terminal, &mut app, &events);

    // Restore terminal
    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| super::views::render(frame, app))?;

        // Handle events
        match events.next()? {
            Event::Key(key) => handle_key(app, key),
            // Terminal will redraw automatically
            Event::Resize(_, _) | Event::Tick => {}
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
