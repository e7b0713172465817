//! TUI Views module
//!
//! Decides what is on screen for the current form state.

use ratatui::Frame;

use super::app::App;
use super::dialogs;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.form.picking() {
        Some(entry) => dialogs::account_picker::render(frame, entry),
        None => dialogs::transaction::render(frame, &app.form, app.cursor_visible),
    }
}
