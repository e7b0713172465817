//! Transaction entry form
//!
//! The form is a plain state object driven by [`FormState::update`], which
//! consumes one [`Key`] and returns an [`Effect`] for the event loop to carry
//! out. Nothing in this module knows about the terminal; the TUI translates
//! terminal events into keys and draws the state.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hledger_tools::form::{Effect, FormState, Key};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut form = FormState::new(date);
//! assert_eq!(form.update(Key::Tab), Effect::ResetBlink);
//! assert_eq!(form.update(Key::Ctrl('c')), Effect::Exit);
//! assert!(!form.is_submitted());
//! ```

pub mod entry;
pub mod focus;
pub mod input;
pub mod key;
pub mod picker;
pub mod validate;

use chrono::NaiveDate;
use tracing::debug;

pub use entry::{EntryId, EntryPair, PairMode};
pub use focus::{FieldId, FocusRing};
pub use input::TextInput;
pub use key::Key;
pub use picker::{AccountPicker, PickerOutcome};
pub use validate::ValidationError;

/// Side effect requested by [`FormState::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Text changed; make the cursor visible and restart its blink timer
    ResetBlink,
    /// Fetch the account names for a pair and hand them to [`FormState::set_suggestions`]
    LoadAccounts(EntryId),
    /// Leave the event loop
    Exit,
}

/// How the form was finalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    /// Append the entry to the journal file
    Append,
    /// Print the entry to standard output
    Output,
}

/// What the caller should do once the form has exited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The user quit without finalizing
    Cancelled,
    /// Print the rendered entry
    Output(String),
    /// Append the rendered entry to the journal
    Append(String),
}

/// State of the transaction entry form
#[derive(Debug, Clone)]
pub struct FormState {
    pub date: TextInput,
    pub description: TextInput,
    entries: Vec<EntryPair>,
    focus: FocusRing,
    next_id: u32,
    error_message: Option<String>,
    submitted: bool,
    append_requested: bool,
}

impl FormState {
    /// Create a form for `today` with two empty pairs and focus on the date
    pub fn new(today: NaiveDate) -> Self {
        let mut form = Self {
            date: TextInput::new()
                .placeholder("Date (YYYY-MM-DD)")
                .content(today.format("%Y-%m-%d").to_string()),
            description: TextInput::new().placeholder("Description"),
            entries: Vec::new(),
            focus: FocusRing::new(Vec::<EntryId>::new()),
            next_id: 0,
            error_message: None,
            submitted: false,
            append_requested: false,
        };
        form.push_entry();
        form.push_entry();
        form
    }

    /// Effects needed before the first key is processed
    pub fn initial_effects(&self) -> Vec<Effect> {
        self.entries
            .iter()
            .filter(|e| !e.has_suggestions())
            .map(|e| Effect::LoadAccounts(e.id))
            .collect()
    }

    pub fn entries(&self) -> &[EntryPair] {
        &self.entries
    }

    /// Mutable access to the pair with the given id
    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut EntryPair> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Currently focused field
    pub fn focused(&self) -> FieldId {
        self.focus.current()
    }

    /// Position of the focused field in the focus ring
    pub fn focus_index(&self) -> usize {
        self.focus.position()
    }

    /// Number of fields in the focus ring
    pub fn ring_len(&self) -> usize {
        self.focus.len()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn append_requested(&self) -> bool {
        self.append_requested
    }

    /// The pair whose picker owns the keyboard, if any
    pub fn picking(&self) -> Option<&EntryPair> {
        self.entries.iter().find(|e| e.is_picking())
    }

    /// Store the account names fetched for a pair
    pub fn set_suggestions(&mut self, id: EntryId, accounts: Vec<String>) {
        if let Some(entry) = self.entry_mut(id) {
            entry.set_suggestions(accounts);
        }
    }

    fn push_entry(&mut self) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(EntryPair::new(id));
        self.focus.rebuild(self.entries.iter().map(|e| e.id));
        id
    }

    /// Handle one key press
    pub fn update(&mut self, key: Key) -> Effect {
        if self.submitted {
            return Effect::Exit;
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.is_picking()) {
            let PairMode::Picking(picker) = &mut entry.mode else {
                return Effect::None;
            };
            return match picker.handle_key(key) {
                PickerOutcome::Continue => Effect::None,
                PickerOutcome::Chosen(account) => {
                    entry.stop_picking(Some(account));
                    Effect::ResetBlink
                }
                PickerOutcome::Dismissed => {
                    entry.stop_picking(None);
                    Effect::ResetBlink
                }
                PickerOutcome::Quit => Effect::Exit,
            };
        }

        match key {
            Key::Ctrl('c') | Key::Esc => Effect::Exit,
            Key::Tab | Key::Down => {
                self.focus.next();
                Effect::ResetBlink
            }
            Key::BackTab | Key::Up => {
                self.focus.prev();
                Effect::ResetBlink
            }
            Key::Ctrl('n') => self.add_entry(),
            Key::Ctrl('a') => self.submit(SubmitAction::Append),
            Key::Ctrl('o') => self.submit(SubmitAction::Output),
            Key::Enter => self.start_picking(),
            _ => self.edit_focused(key),
        }
    }

    /// Append an empty pair and focus its account field
    pub fn add_entry(&mut self) -> Effect {
        let id = self.push_entry();
        self.focus.focus(FieldId::Account(id));
        Effect::LoadAccounts(id)
    }

    fn start_picking(&mut self) -> Effect {
        let FieldId::Account(id) = self.focus.current() else {
            return Effect::None;
        };
        if let Some(entry) = self.entry_mut(id) {
            entry.start_picking();
        }
        Effect::None
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus.current() {
            FieldId::Date => Some(&mut self.date),
            FieldId::Description => Some(&mut self.description),
            FieldId::Account(id) => self.entry_mut(id).map(|e| &mut e.account),
            FieldId::Amount(id) => self.entry_mut(id).map(|e| &mut e.amount),
        }
    }

    fn edit_focused(&mut self, key: Key) -> Effect {
        let Some(input) = self.focused_input() else {
            return Effect::None;
        };
        match key {
            Key::Char(c) => input.insert(c),
            Key::Backspace => input.backspace(),
            Key::Delete => input.delete(),
            Key::Left => input.move_left(),
            Key::Right => input.move_right(),
            Key::Home => input.move_start(),
            Key::End | Key::Ctrl('e') => input.move_end(),
            _ => return Effect::None,
        }
        Effect::ResetBlink
    }

    /// Run the validation checks, updating the error message
    pub fn validate(&mut self) -> Result<f64, ValidationError> {
        match validate::validate(self.date.value(), self.description.value(), &self.entries) {
            Ok(total) => {
                self.error_message = None;
                Ok(total)
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Validate and, on success, finalize the form
    pub fn submit(&mut self, action: SubmitAction) -> Effect {
        match self.validate() {
            Ok(total) => {
                debug!(total, ?action, "transaction validated");
                self.append_requested = action == SubmitAction::Append;
                self.submitted = true;
                Effect::Exit
            }
            Err(err) => {
                debug!(%err, "transaction rejected");
                Effect::None
            }
        }
    }

    /// The journal entry text for the current field values
    pub fn rendered_text(&self) -> String {
        render_entry(
            self.date.value(),
            self.description.value(),
            self.entries
                .iter()
                .map(|e| (e.account.value(), e.amount.value())),
        )
    }

    /// What the caller should do with this form after the loop ended
    pub fn outcome(&self) -> FormOutcome {
        if !self.submitted {
            return FormOutcome::Cancelled;
        }
        let text = self.rendered_text();
        if self.append_requested {
            FormOutcome::Append(text)
        } else {
            FormOutcome::Output(text)
        }
    }
}

/// Format a journal entry: a header line then one indented line per posting
pub fn render_entry<'a>(
    date: &str,
    description: &str,
    postings: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut out = format!("{} {}\n", date, description);
    for (account, amount) in postings {
        out.push_str(&format!("  {}    {}\n", account, amount));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn type_text(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.update(Key::Char(c));
        }
    }

    /// Fill description and both pairs, leaving focus on the last amount
    fn filled_form() -> FormState {
        let mut form = FormState::new(today());
        form.update(Key::Tab);
        type_text(&mut form, "Groceries");
        form.update(Key::Tab);
        type_text(&mut form, "Assets:Cash");
        form.update(Key::Tab);
        type_text(&mut form, "-50");
        form.update(Key::Tab);
        type_text(&mut form, "Expenses:Food");
        form.update(Key::Tab);
        type_text(&mut form, "50");
        form
    }

    #[test]
    fn test_initial_state() {
        let form = FormState::new(today());
        assert_eq!(form.date.value(), "2024-01-01");
        assert!(form.description.is_empty());
        assert_eq!(form.entries().len(), 2);
        assert_eq!(form.focused(), FieldId::Date);
        assert_eq!(form.focus_index(), 0);
        assert!(form.error_message().is_none());
        assert!(!form.is_submitted());
        assert!(form.picking().is_none());
    }

    #[test]
    fn test_initial_effects_load_each_pair() {
        let mut form = FormState::new(today());
        let effects = form.initial_effects();
        assert_eq!(effects.len(), 2);
        for effect in effects {
            let Effect::LoadAccounts(id) = effect else {
                panic!("unexpected effect {:?}", effect);
            };
            form.set_suggestions(id, vec!["Assets:Cash".into()]);
        }
        assert!(form.initial_effects().is_empty());
    }

    #[test]
    fn test_focus_ring_is_closed() {
        let mut form = FormState::new(today());
        let n = form.ring_len();
        assert_eq!(n, 2 + 2 * form.entries().len());
        for _ in 0..n {
            form.update(Key::Tab);
        }
        assert_eq!(form.focus_index(), 0);

        form.update(Key::Up);
        assert_eq!(form.focus_index(), n - 1);
        form.update(Key::Down);
        assert_eq!(form.focus_index(), 0);
        form.update(Key::BackTab);
        assert_eq!(form.focus_index(), n - 1);
    }

    #[test]
    fn test_add_entry_extends_ring_and_focuses_account() {
        let mut form = FormState::new(today());
        form.update(Key::Tab);
        let before = form.ring_len();

        let effect = form.update(Key::Ctrl('n'));
        let new_id = form.entries()[2].id;
        assert_eq!(effect, Effect::LoadAccounts(new_id));
        assert_eq!(form.ring_len(), before + 2);
        assert_eq!(form.focused(), FieldId::Account(new_id));
        assert_eq!(form.focus_index(), 6);
    }

    #[test]
    fn test_keys_only_edit_focused_field() {
        let mut form = FormState::new(today());
        form.update(Key::Tab);
        type_text(&mut form, "Rent");
        assert_eq!(form.description.value(), "Rent");
        assert_eq!(form.date.value(), "2024-01-01");
        assert!(form.entries().iter().all(|e| e.account.is_empty() && e.amount.is_empty()));

        form.update(Key::Backspace);
        form.update(Key::Home);
        form.update(Key::Delete);
        assert_eq!(form.description.value(), "en");
    }

    #[test]
    fn test_enter_outside_account_does_nothing() {
        let mut form = FormState::new(today());
        assert_eq!(form.update(Key::Enter), Effect::None);
        assert!(form.picking().is_none());
        assert_eq!(form.focused(), FieldId::Date);
    }

    #[test]
    fn test_pick_account() {
        let mut form = FormState::new(today());
        let ids: Vec<EntryId> = form.entries().iter().map(|e| e.id).collect();
        for id in &ids {
            form.set_suggestions(
                *id,
                vec!["Assets:Cash".into(), "Expenses:Food".into()],
            );
        }
        form.update(Key::Tab);
        form.update(Key::Tab);
        assert_eq!(form.focused(), FieldId::Account(ids[0]));

        form.update(Key::Enter);
        assert_eq!(form.picking().map(|e| e.id), Some(ids[0]));

        // Keys go to the picker, not the focus ring
        form.update(Key::Down);
        assert_eq!(form.focused(), FieldId::Account(ids[0]));
        form.update(Key::Char('q'));
        assert!(form.entries()[0].account.is_empty());

        form.update(Key::Backspace);
        form.update(Key::Down);
        form.update(Key::Enter);
        assert!(form.picking().is_none());
        assert_eq!(form.entries()[0].account.value(), "Expenses:Food");
        assert_eq!(form.focused(), FieldId::Account(ids[0]));
    }

    #[test]
    fn test_ctrl_c_while_picking_quits() {
        let mut form = FormState::new(today());
        form.update(Key::Tab);
        form.update(Key::Tab);
        form.update(Key::Enter);
        assert!(form.picking().is_some());
        assert_eq!(form.update(Key::Ctrl('c')), Effect::Exit);
        assert_eq!(form.outcome(), FormOutcome::Cancelled);
    }

    #[test]
    fn test_failed_submit_keeps_form_interactive() {
        let mut form = FormState::new(today());
        assert_eq!(form.update(Key::Ctrl('a')), Effect::None);
        assert!(!form.is_submitted());
        assert_eq!(form.error_message(), Some("Date and description are required."));
        assert_eq!(form.date.value(), "2024-01-01");

        form.update(Key::Tab);
        type_text(&mut form, "x");
        assert_eq!(form.description.value(), "x");
    }

    #[test]
    fn test_successful_submit_clears_error() {
        let mut form = filled_form();
        for _ in 0..4 {
            form.update(Key::Tab);
        }
        // Focus is on the first amount; blank it to trigger an error
        assert_eq!(form.focused(), FieldId::Amount(form.entries()[0].id));
        for _ in 0..3 {
            form.update(Key::Backspace);
        }
        form.update(Key::Ctrl('o'));
        assert_eq!(form.error_message(), Some("All amount fields must be filled."));

        type_text(&mut form, "-50");
        assert_eq!(form.update(Key::Ctrl('o')), Effect::Exit);
        assert!(form.error_message().is_none());
        assert!(form.is_submitted());
        assert!(!form.append_requested());
    }

    #[test]
    fn test_submit_append() {
        let mut form = filled_form();
        assert_eq!(form.update(Key::Ctrl('a')), Effect::Exit);
        assert!(form.is_submitted());
        assert!(form.append_requested());
        assert_eq!(
            form.outcome(),
            FormOutcome::Append(
                "2024-01-01 Groceries\n  Assets:Cash    -50\n  Expenses:Food    50\n".to_string()
            )
        );
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut form = filled_form();
        form.update(Key::Ctrl('o'));
        let text = form.rendered_text();
        assert_eq!(form.update(Key::Char('x')), Effect::Exit);
        assert_eq!(form.update(Key::Ctrl('n')), Effect::Exit);
        assert_eq!(form.rendered_text(), text);
        assert_eq!(form.entries().len(), 2);
    }

    #[test]
    fn test_quit_before_submit() {
        let mut form = filled_form();
        assert_eq!(form.update(Key::Esc), Effect::Exit);
        assert!(!form.is_submitted());
        assert_eq!(form.outcome(), FormOutcome::Cancelled);
    }

    #[test]
    fn test_rendered_text_example() {
        let text = render_entry(
            "2024-01-01",
            "Groceries",
            [("Assets:Cash", "-50"), ("Expenses:Food", "50")],
        );
        assert_eq!(
            text,
            "2024-01-01 Groceries\n  Assets:Cash    -50\n  Expenses:Food    50\n"
        );
    }

    #[test]
    fn test_rendered_text_with_balancing_pair() {
        let mut form = filled_form();
        form.update(Key::Backspace);
        form.update(Key::Backspace);
        assert_eq!(form.update(Key::Ctrl('o')), Effect::Exit);
        assert_eq!(
            form.outcome(),
            FormOutcome::Output(
                "2024-01-01 Groceries\n  Assets:Cash    -50\n  Expenses:Food    \n".to_string()
            )
        );
    }
}
