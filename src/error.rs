//! Custom error types for hledger-tools
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for hledger-tools operations
#[derive(Error, Debug)]
pub enum ToolsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// An external program (hledger) could not be run or failed
    #[error("`{command}` failed: {message}")]
    ExternalTool { command: String, message: String },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ToolsError {
    /// Create an error for a failed external command
    pub fn external(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalTool {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Check if this is an external tool error
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalTool { .. })
    }
}

impl From<std::io::Error> for ToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ToolsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for hledger-tools operations
pub type ToolsResult<T> = Result<T, ToolsError>;
