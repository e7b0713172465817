//! Application state for the TUI
//!
//! The App struct wraps the form with the bits of state that only matter on
//! screen, like cursor blinking.

use crate::error::ToolsResult;
use crate::form::{Effect, FormState};
use crate::hledger::AccountSource;

/// Main application state
pub struct App {
    /// The transaction being composed
    pub form: FormState,

    /// Whether the text cursor is currently drawn
    pub cursor_visible: bool,

    /// Skip the next blink toggle after input
    blink_reset: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            cursor_visible: true,
            blink_reset: false,
            should_quit: false,
        }
    }

    /// Carry out the effects the form needs before the first key
    pub fn start(&mut self, accounts: &dyn AccountSource) -> ToolsResult<()> {
        for effect in self.form.initial_effects() {
            self.apply(effect, accounts)?;
        }
        Ok(())
    }

    /// Carry out one effect returned by the form
    pub fn apply(&mut self, effect: Effect, accounts: &dyn AccountSource) -> ToolsResult<()> {
        match effect {
            Effect::None => {}
            Effect::ResetBlink => {
                self.cursor_visible = true;
                self.blink_reset = true;
            }
            Effect::LoadAccounts(id) => {
                let names = accounts.list_accounts()?;
                tracing::debug!(entry = %id, count = names.len(), "loaded accounts");
                self.form.set_suggestions(id, names);
            }
            Effect::Exit => self.quit(),
        }
        Ok(())
    }

    /// Advance the cursor blink by one tick
    pub fn tick(&mut self) {
        if self.blink_reset {
            self.blink_reset = false;
        } else {
            self.cursor_visible = !self.cursor_visible;
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
