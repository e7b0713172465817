//! Account/amount pairs of a transaction being composed

use std::fmt;

use super::input::TextInput;
use super::picker::AccountPicker;

/// Stable identifier of an entry pair within one form session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

impl EntryId {
    pub(crate) fn new(n: u32) -> Self {
        Self(n)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Whether the pair's account field is edited as text or through the picker
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PairMode {
    #[default]
    Editing,
    Picking(AccountPicker),
}

/// One account/amount line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPair {
    pub id: EntryId,
    pub account: TextInput,
    pub amount: TextInput,
    pub mode: PairMode,
    /// Account names fetched for this pair; `None` until loaded
    suggestions: Option<Vec<String>>,
}

impl EntryPair {
    /// Create an empty pair
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            account: TextInput::new().placeholder("Account"),
            amount: TextInput::new().placeholder(format!("Amount {} (e.g. 1000€)", id)),
            mode: PairMode::Editing,
            suggestions: None,
        }
    }

    /// Create a pair with the given values, for building forms programmatically
    pub fn with_values(id: EntryId, account: &str, amount: &str) -> Self {
        let mut pair = Self::new(id);
        pair.account.set_value(account);
        pair.amount.set_value(amount);
        pair
    }

    /// Account names known to this pair
    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or(&[])
    }

    /// Whether the account names have been loaded
    pub fn has_suggestions(&self) -> bool {
        self.suggestions.is_some()
    }

    pub(crate) fn set_suggestions(&mut self, accounts: Vec<String>) {
        self.suggestions = Some(accounts);
    }

    /// Whether the picker currently owns the keyboard
    pub fn is_picking(&self) -> bool {
        matches!(self.mode, PairMode::Picking(_))
    }

    /// Open the picker seeded with this pair's suggestions
    pub(crate) fn start_picking(&mut self) {
        self.mode = PairMode::Picking(AccountPicker::new(self.suggestions().to_vec()));
    }

    /// Leave the picker, optionally copying a choice into the account field
    pub(crate) fn stop_picking(&mut self, choice: Option<String>) {
        if let Some(account) = choice {
            self.account.set_value(account);
        }
        self.mode = PairMode::Editing;
    }
}
