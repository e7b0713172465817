//! Event handler for the TUI
//!
//! Routes terminal events into the form and carries out the effects it asks
//! for.

use crate::error::ToolsResult;
use crate::hledger::AccountSource;

use super::app::App;
use super::event::Event;
use super::keybindings::to_form_key;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, accounts: &dyn AccountSource) -> ToolsResult<()> {
    match event {
        Event::Key(key_event) => {
            let Some(key) = to_form_key(key_event) else {
                return Ok(());
            };
            let effect = app.form.update(key);
            app.apply(effect, accounts)
        }
        Event::Tick => {
            app.tick();
            Ok(())
        }
        // The terminal redraws on the next loop iteration
        Event::Resize(_, _) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolsError;
    use crate::form::{FieldId, FormOutcome, FormState};
    use crate::hledger::StaticAccounts;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    struct BrokenSource;

    impl AccountSource for BrokenSource {
        fn list_accounts(&self) -> ToolsResult<Vec<String>> {
            Err(ToolsError::external("hledger accounts", "exit status: 1"))
        }
    }

    fn accounts() -> StaticAccounts {
        StaticAccounts(vec!["Assets:Cash".into(), "Expenses:Food".into()])
    }

    fn app() -> App {
        App::new(FormState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn send(app: &mut App, events: impl IntoIterator<Item = Event>) {
        let source = accounts();
        for event in events {
            handle_event(app, event, &source).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        send(app, text.chars().map(|c| key(KeyCode::Char(c))));
    }

    #[test]
    fn test_start_loads_accounts_for_each_pair() {
        let mut app = app();
        app.start(&accounts()).unwrap();
        for entry in app.form.entries() {
            assert_eq!(entry.suggestions(), ["Assets:Cash", "Expenses:Food"]);
        }
    }

    #[test]
    fn test_start_fails_when_accounts_unavailable() {
        let mut app = app();
        let err = app.start(&BrokenSource).unwrap_err();
        assert!(err.is_external());
    }

    #[test]
    fn test_adding_pair_fails_when_accounts_unavailable() {
        let mut app = app();
        app.start(&accounts()).unwrap();
        let err = handle_event(&mut app, ctrl('n'), &BrokenSource).unwrap_err();
        assert!(err.is_external());
    }

    #[test]
    fn test_full_session_with_picker() {
        let mut app = app();
        app.start(&accounts()).unwrap();

        send(&mut app, [key(KeyCode::Tab)]);
        type_text(&mut app, "Groceries");
        send(&mut app, [key(KeyCode::Tab), key(KeyCode::Enter), key(KeyCode::Enter)]);
        assert_eq!(app.form.entries()[0].account.value(), "Assets:Cash");

        send(&mut app, [key(KeyCode::Tab)]);
        type_text(&mut app, "-50");
        send(&mut app, [key(KeyCode::Tab), key(KeyCode::Enter)]);
        type_text(&mut app, "food");
        send(&mut app, [key(KeyCode::Enter)]);
        assert_eq!(app.form.entries()[1].account.value(), "Expenses:Food");

        send(&mut app, [ctrl('n')]);
        let third = app.form.entries()[2].id;
        assert_eq!(app.form.focused(), FieldId::Account(third));
        assert_eq!(app.form.entries()[2].suggestions().len(), 2);
        type_text(&mut app, "Expenses:Tips");
        send(&mut app, [key(KeyCode::Tab)]);
        type_text(&mut app, "5");

        assert!(!app.should_quit);
        send(&mut app, [ctrl('o')]);
        // Second pair's amount is blank and it is not the last pair
        assert!(!app.should_quit);
        assert_eq!(
            app.form.error_message(),
            Some("All amount fields must be filled.")
        );

        send(&mut app, [key(KeyCode::BackTab), key(KeyCode::BackTab)]);
        type_text(&mut app, "45");
        send(&mut app, [ctrl('a')]);
        assert!(app.should_quit);
        assert_eq!(
            app.form.outcome(),
            FormOutcome::Append(
                "2024-01-01 Groceries\n  Assets:Cash    -50\n  Expenses:Food    45\n  Expenses:Tips    5\n"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_esc_quits_without_result() {
        let mut app = app();
        app.start(&accounts()).unwrap();
        send(&mut app, [key(KeyCode::Esc)]);
        assert!(app.should_quit);
        assert_eq!(app.form.outcome(), FormOutcome::Cancelled);
    }

    #[test]
    fn test_tick_blinks_cursor() {
        let mut app = app();
        assert!(app.cursor_visible);
        send(&mut app, [Event::Tick]);
        assert!(!app.cursor_visible);

        type_text(&mut app, "x");
        assert!(app.cursor_visible);
        send(&mut app, [Event::Tick]);
        assert!(app.cursor_visible);
        send(&mut app, [Event::Tick]);
        assert!(!app.cursor_visible);
    }
}
