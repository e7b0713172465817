//! hledger-tools - companion commands for hledger journals
//!
//! The centrepiece is an interactive form for composing a journal
//! transaction; the remaining commands query hledger or assemble prompts for
//! language-model workflows.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings resolved from flags and environment
//! - `error`: Custom error types
//! - `form`: The transaction form state machine, independent of the terminal
//! - `hledger`: Runs the external hledger binary
//! - `prompt`: Prompt templates for the LLM commands
//! - `storage`: Journal append and file reading
//! - `tui`: Terminal rendering and event loop for the form
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use hledger_tools::config::Settings;
//! use hledger_tools::tui::run_form;
//!
//! let settings = Settings::new(Some("main.journal".into()), None)?;
//! let form = run_form(FormState::new(today), &settings.hledger())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod hledger;
pub mod prompt;
pub mod storage;
pub mod tui;

use std::sync::Once;

pub use error::{ToolsError, ToolsResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "HLEDGER_TOOLS_LOG";

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr
///
/// The filter comes from `HLEDGER_TOOLS_LOG` and defaults to `warn` so the
/// form and command output stay clean.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // A subscriber may already be set by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
