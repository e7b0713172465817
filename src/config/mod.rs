//! Configuration module for hledger-tools
//!
//! Settings are never persisted. They are resolved on every run from
//! command-line flags and environment variables.

pub mod settings;

pub use settings::Settings;
