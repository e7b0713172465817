//! Terminal User Interface module
//!
//! Hosts the transaction entry form using ratatui: terminal setup, event
//! polling, key translation and drawing. The form logic itself lives in
//! [`crate::form`].

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_form;
