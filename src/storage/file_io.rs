//! File I/O for journal files and prompt inputs
//!
//! The journal is only ever appended to; existing content is never rewritten.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ToolsError, ToolsResult};

/// Append `content` to a file, preceded by a newline
///
/// The file is created if it does not exist.
pub fn append_to_file<P: AsRef<Path>>(path: P, content: &str) -> ToolsResult<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| ToolsError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    file.write_all(format!("\n{}", content).as_bytes())
        .map_err(|e| ToolsError::Io(format!("Failed to write to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| ToolsError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    info!(path = %path.display(), bytes = content.len() + 1, "appended to journal");
    Ok(())
}

/// Read a whole file as text
pub fn read_text<P: AsRef<Path>>(path: P) -> ToolsResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|e| ToolsError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Read an optional input file; a failure is reported as a warning and ignored
pub fn read_optional<P: AsRef<Path>>(path: P, what: &str) -> Option<String> {
    let path = path.as_ref();
    match read_text(path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable {}", what);
            eprintln!(
                "Warning: failed to read {}: {} (ignored)",
                what,
                path.display()
            );
            None
        }
    }
}
