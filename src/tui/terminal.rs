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

use crate::error::ToolsError;
use crate::form::FormState;
use crate::hledger::AccountSource;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| ToolsError::Tui(format!("Failed to enable raw mode: {}", e)))?;

    // Raw mode is already on; leave it again if the screen cannot be set up
    let terminal = undo_on_error(open_screen(), || {
        let _ = restore_terminal();
    })?;

    Ok(terminal)
}

fn open_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Run `undo` when `result` is an error, then pass the result on
fn undo_on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the transaction form until it is submitted or quit
///
/// Account lookups happen synchronously; any failure ends the form and is
/// returned after the terminal has been restored.
pub fn run_form(form: FormState, accounts: &dyn AccountSource) -> Result<FormState> {
    let mut app = App::new(form);

    // Fetch before touching the terminal so errors print cleanly
    app.start(accounts)?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, accounts);
    restore_terminal()?;
    result?;

    Ok(app.form)
}

fn event_loop(terminal: &mut Tui, app: &mut App, accounts: &dyn AccountSource) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        let event = events
            .next()
            .map_err(|_| ToolsError::Tui("terminal input closed".into()))?;
        handle_event(app, event, accounts)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_undo_runs_on_error() {
        let undone = Cell::new(false);
        let result: Result<(), &str> = undo_on_error(Err("no tty"), || undone.set(true));
        assert_eq!(result, Err("no tty"));
        assert!(undone.get());
    }

    #[test]
    fn test_undo_skipped_on_success() {
        let undone = Cell::new(false);
        let result: Result<u8, &str> = undo_on_error(Ok(7), || undone.set(true));
        assert_eq!(result, Ok(7));
        assert!(!undone.get());
    }
}
