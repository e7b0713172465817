//! Keys understood by the transaction form
//!
//! The form never sees terminal events directly; the TUI translates them into
//! these values first.

/// A key press, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    /// A character pressed together with Ctrl
    Ctrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Backspace,
    Delete,
}
