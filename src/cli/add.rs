//! Interactive `add` command
//!
//! Runs the transaction form and then either appends the entry to the
//! journal or prints it.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Local;

use crate::config::Settings;
use crate::error::ToolsResult;
use crate::form::{FormOutcome, FormState};
use crate::storage::append_to_file;
use crate::tui::run_form;

/// Handle the add command
pub fn handle_add_command(settings: &Settings) -> Result<()> {
    let form = FormState::new(Local::now().date_naive());
    let hledger = settings.hledger();

    let form = run_form(form, &hledger)?;

    let stdout = io::stdout();
    finish_add(form.outcome(), &settings.journal, &mut stdout.lock())?;
    Ok(())
}

/// Carry out the outcome of the form
pub fn finish_add(outcome: FormOutcome, journal: &Path, out: &mut impl Write) -> ToolsResult<()> {
    match outcome {
        FormOutcome::Cancelled => {
            tracing::debug!("form cancelled");
        }
        FormOutcome::Output(text) => {
            if !text.is_empty() {
                write!(out, "{}", text)?;
            }
        }
        FormOutcome::Append(text) => {
            append_to_file(journal, &text)?;
            writeln!(out, "Entry successfully appended to journal file.")?;
        }
    }
    Ok(())
}
