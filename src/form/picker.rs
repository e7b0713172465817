//! Account picker
//!
//! A filterable selection list over the account names known to the journal.

use super::input::TextInput;
use super::key::Key;

/// What the picker wants the form to do after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Keep picking
    Continue,
    /// Close the picker and copy this account into the field
    Chosen(String),
    /// Close the picker, leaving the field untouched
    Dismissed,
    /// Quit the whole form
    Quit,
}

/// Selection list state for one entry pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPicker {
    items: Vec<String>,
    filter: TextInput,
    selected: usize,
}

impl AccountPicker {
    /// Open a picker over `items` with the first item selected
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            filter: TextInput::new().placeholder("type to filter"),
            selected: 0,
        }
    }

    /// The current filter text
    pub fn filter(&self) -> &TextInput {
        &self.filter
    }

    /// Index of the highlighted item within [`Self::visible`]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Items matching the filter, in their original order
    pub fn visible(&self) -> Vec<&str> {
        let query = self.filter.value().to_lowercase();
        self.items
            .iter()
            .filter(|item| query.is_empty() || item.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// The highlighted item, if any item matches the filter
    pub fn highlighted(&self) -> Option<&str> {
        self.visible().get(self.selected).copied()
    }

    /// Route a key to the picker
    pub fn handle_key(&mut self, key: Key) -> PickerOutcome {
        match key {
            Key::Ctrl('c') => PickerOutcome::Quit,
            Key::Enter => match self.highlighted() {
                Some(item) => PickerOutcome::Chosen(item.to_string()),
                None => PickerOutcome::Dismissed,
            },
            Key::Esc => {
                if self.filter.is_empty() {
                    PickerOutcome::Dismissed
                } else {
                    self.filter.clear();
                    self.selected = 0;
                    PickerOutcome::Continue
                }
            }
            Key::Up | Key::Ctrl('p') => {
                self.selected = self.selected.saturating_sub(1);
                PickerOutcome::Continue
            }
            Key::Down | Key::Ctrl('n') => {
                let count = self.visible().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                PickerOutcome::Continue
            }
            Key::Char(c) => {
                self.filter.insert(c);
                self.selected = 0;
                PickerOutcome::Continue
            }
            Key::Backspace => {
                self.filter.backspace();
                self.selected = 0;
                PickerOutcome::Continue
            }
            Key::Left => {
                self.filter.move_left();
                PickerOutcome::Continue
            }
            Key::Right => {
                self.filter.move_right();
                PickerOutcome::Continue
            }
            _ => PickerOutcome::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> AccountPicker {
        AccountPicker::new(vec![
            "Assets:Bank".to_string(),
            "Assets:Cash".to_string(),
            "Expenses:Food".to_string(),
            "Income:Salary".to_string(),
        ])
    }

    #[test]
    fn test_first_item_preselected() {
        let p = picker();
        assert_eq!(p.selected(), 0);
        assert_eq!(p.highlighted(), Some("Assets:Bank"));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut p = picker();
        p.handle_key(Key::Up);
        assert_eq!(p.selected(), 0);

        for _ in 0..10 {
            p.handle_key(Key::Down);
        }
        assert_eq!(p.highlighted(), Some("Income:Salary"));
    }

    #[test]
    fn test_emacs_keys_move_and_tab_does_not() {
        let mut p = picker();
        p.handle_key(Key::Ctrl('n'));
        p.handle_key(Key::Ctrl('n'));
        assert_eq!(p.selected(), 2);
        p.handle_key(Key::Ctrl('p'));
        assert_eq!(p.selected(), 1);

        assert_eq!(p.handle_key(Key::Tab), PickerOutcome::Continue);
        assert_eq!(p.handle_key(Key::BackTab), PickerOutcome::Continue);
        assert_eq!(p.selected(), 1);
        assert!(p.filter().is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut p = picker();
        p.handle_key(Key::Down);
        for c in "CASH".chars() {
            p.handle_key(Key::Char(c));
        }
        assert_eq!(p.visible(), vec!["Assets:Cash"]);
        assert_eq!(p.selected(), 0);
        assert_eq!(
            p.handle_key(Key::Enter),
            PickerOutcome::Chosen("Assets:Cash".to_string())
        );
    }

    #[test]
    fn test_enter_with_no_match_dismisses() {
        let mut p = picker();
        for c in "zzz".chars() {
            p.handle_key(Key::Char(c));
        }
        assert!(p.visible().is_empty());
        assert_eq!(p.handle_key(Key::Enter), PickerOutcome::Dismissed);
    }

    #[test]
    fn test_esc_clears_filter_then_dismisses() {
        let mut p = picker();
        p.handle_key(Key::Char('f'));
        assert_eq!(p.handle_key(Key::Esc), PickerOutcome::Continue);
        assert!(p.filter().is_empty());
        assert_eq!(p.handle_key(Key::Esc), PickerOutcome::Dismissed);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut p = picker();
        assert_eq!(p.handle_key(Key::Ctrl('c')), PickerOutcome::Quit);
    }

    #[test]
    fn test_empty_list() {
        let mut p = AccountPicker::new(Vec::new());
        assert_eq!(p.highlighted(), None);
        p.handle_key(Key::Down);
        assert_eq!(p.selected(), 0);
    }
}
