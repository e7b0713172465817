//! Keybinding definitions
//!
//! Translates crossterm key events into form keys and lists the shortcuts
//! shown in the footer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::form::Key;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Editing form fields
    Form,
    /// Choosing an account from the picker
    Picker,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Form
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next field",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Pick account",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::Char('a'),
        modifiers: KeyModifiers::CONTROL,
        description: "Generate and append to journal",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::Char('o'),
        modifiers: KeyModifiers::CONTROL,
        description: "Generate and output to console",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::Char('n'),
        modifiers: KeyModifiers::CONTROL,
        description: "Add another account/amount pair",
        context: KeyContext::Form,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::Form,
    },
    // Picker
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Previous",
        context: KeyContext::Picker,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Next",
        context: KeyContext::Picker,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Choose",
        context: KeyContext::Picker,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Clear filter / back",
        context: KeyContext::Picker,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}

/// Translate a terminal key event into a form key
///
/// Key releases reported by some terminals are dropped.
pub fn to_form_key(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    // AltGr arrives as Ctrl+Alt on some platforms and produces plain text
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL)
        && !event.modifiers.contains(KeyModifiers::ALT);

    let key = match event.code {
        KeyCode::Char(c) if ctrl => Key::Ctrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab if event.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        _ => return None,
    };

    Some(key)
}
