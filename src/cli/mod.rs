//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the form and hledger layers.

pub mod add;
pub mod ai;
pub mod ledger;

pub use add::{finish_add, handle_add_command};
pub use ai::{
    handle_ask_command, handle_import_command, handle_review_command, AskArgs, ImportArgs,
    PromptOutput, ReviewArgs,
};
pub use ledger::{handle_accounts_command, handle_balance_command};
