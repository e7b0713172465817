//! Thin wrapper around the external `hledger` binary
//!
//! All ledger semantics (account lists, balance sheets) come from hledger
//! itself; this module only runs it and collects its output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{ToolsError, ToolsResult};

/// Something that can list the accounts of a journal
pub trait AccountSource {
    /// Known account names, in the order hledger reports them
    fn list_accounts(&self) -> ToolsResult<Vec<String>>;
}

/// Runs hledger against one journal file
#[derive(Debug, Clone)]
pub struct Hledger {
    binary: String,
    journal: PathBuf,
}

impl Hledger {
    pub fn new(binary: impl Into<String>, journal: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            journal: journal.into(),
        }
    }

    pub fn journal(&self) -> &Path {
        &self.journal
    }

    /// Balance sheet as a tree with percentages of the total
    pub fn balance_sheet(&self) -> ToolsResult<String> {
        self.run(&["balancesheet", "--percent", "--tree"])
    }

    fn describe(&self, args: &[&str]) -> String {
        format!(
            "{} -f {} {}",
            self.binary,
            self.journal.display(),
            args.join(" ")
        )
    }

    fn run(&self, args: &[&str]) -> ToolsResult<String> {
        let description = self.describe(args);
        debug!(command = %description, "running hledger");

        let output = Command::new(&self.binary)
            .arg("-f")
            .arg(&self.journal)
            .args(args)
            .output()
            .map_err(|e| ToolsError::external(&description, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(command = %description, status = %output.status, "hledger failed");
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                stderr
            };
            return Err(ToolsError::external(description, message));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            ToolsError::external(description, format!("output is not valid UTF-8: {}", e))
        })
    }
}

impl AccountSource for Hledger {
    fn list_accounts(&self) -> ToolsResult<Vec<String>> {
        let output = self.run(&["accounts"])?;
        Ok(parse_account_list(&output))
    }
}

/// A fixed list of accounts standing in for hledger in unit tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticAccounts(pub Vec<String>);

#[cfg(test)]
impl AccountSource for StaticAccounts {
    fn list_accounts(&self) -> ToolsResult<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// Split `hledger accounts` output into account names
pub fn parse_account_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
