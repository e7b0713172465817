//! Runtime settings for hledger-tools
//!
//! Resolved from flags and environment variables:
//!
//! 1. `--journal` / `-j`, or `LEDGER_FILE` (the variable hledger itself reads)
//! 2. `--hledger`, or `HLEDGER_BIN`, defaulting to `hledger` on the `PATH`

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ToolsError;
use crate::hledger::Hledger;

/// Default name of the hledger executable
pub const DEFAULT_HLEDGER_BIN: &str = "hledger";

/// Settings shared by every command
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Journal file read by hledger and appended to by `add`
    pub journal: PathBuf,

    /// hledger executable to run
    pub hledger_bin: String,
}

impl Settings {
    /// Build settings, failing if no journal was given
    pub fn new(journal: Option<PathBuf>, hledger_bin: Option<String>) -> Result<Self, ToolsError> {
        let journal = journal
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                ToolsError::Config(
                    "the --journal (-j) flag is required (path to journal file)".into(),
                )
            })?;

        let hledger_bin = hledger_bin
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HLEDGER_BIN.to_string());

        Ok(Self {
            journal,
            hledger_bin,
        })
    }

    /// An hledger runner for the configured journal
    pub fn hledger(&self) -> Hledger {
        Hledger::new(&self.hledger_bin, &self.journal)
    }
}
