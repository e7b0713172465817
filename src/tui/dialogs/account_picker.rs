//! Account picker dialog
//!
//! Replaces the form while an entry pair is choosing its account.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::form::{AccountPicker, EntryPair, PairMode};
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect_fixed;

/// Render the picker of the given pair
pub fn render(frame: &mut Frame, entry: &EntryPair) {
    let PairMode::Picking(picker) = &entry.mode else {
        return;
    };

    let width = 60;
    let height = 20;
    let area = centered_rect_fixed(width, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Select Account {} ", entry.id))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let input_area = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    render_filter(frame, picker, input_area);

    let results_area = Rect {
        x: area.x + 1,
        y: area.y + 3,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(5),
    };
    render_list(frame, picker, results_area);

    let hints_area = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let mut spans = Vec::new();
    for kb in get_keybindings(KeyContext::Picker) {
        spans.push(Span::styled(
            format!("[{}]", format_keybinding(kb)),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw(format!(" {}  ", kb.description)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);
}

fn render_filter(frame: &mut Frame, picker: &AccountPicker, area: Rect) {
    let filter = picker.filter();
    let mut spans = vec![Span::styled("> ", Style::default().fg(Color::Cyan))];
    if filter.is_empty() {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {}", filter.placeholder),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(filter.value(), Style::default().fg(Color::White)));
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, picker: &AccountPicker, area: Rect) {
    let visible = picker.visible();

    if visible.is_empty() {
        let text =
            Paragraph::new("No matching accounts").style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|name| {
            ListItem::new(Line::from(Span::styled(
                *name,
                Style::default().fg(Color::White),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(picker.selected()));

    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormState, Key};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(entry: &EntryPair) -> String {
        let backend = TestBackend::new(70, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, entry)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn picking_form(accounts: &[&str]) -> FormState {
        let mut form = FormState::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let id = form.entries()[0].id;
        form.set_suggestions(id, accounts.iter().map(|a| a.to_string()).collect());
        form.update(Key::Tab);
        form.update(Key::Tab);
        form.update(Key::Enter);
        form
    }

    #[test]
    fn test_renders_accounts_with_highlight() {
        let form = picking_form(&["Assets:Bank", "Expenses:Food"]);
        let text = screen(form.picking().unwrap());
        assert!(text.contains("Select Account 1"));
        assert!(text.contains("▶ Assets:Bank"));
        assert!(text.contains("Expenses:Food"));
    }

    #[test]
    fn test_renders_filter_and_no_matches() {
        let mut form = picking_form(&["Assets:Bank"]);
        form.update(Key::Char('z'));
        let text = screen(form.picking().unwrap());
        assert!(text.contains("> z_"));
        assert!(text.contains("No matching accounts"));
    }
}
