//! Dialogs for the TUI
//!
//! The transaction form and the account picker that temporarily replaces it.

pub mod account_picker;
pub mod transaction;
