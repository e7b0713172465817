//! Storage layer
//!
//! hledger owns the journal format; this layer only appends finished entries
//! and reads the plain-text inputs used for prompts.

pub mod file_io;

pub use file_io::{append_to_file, read_optional, read_text};
