//! Transaction entry dialog
//!
//! Draws the form: date, description, one account/amount row pair per entry,
//! the validation error and the key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::form::{FieldId, FormState, TextInput};
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect_fixed;

const DIALOG_WIDTH: u16 = 64;
const LABEL_WIDTH: usize = 13;

/// Render the transaction form
pub fn render(frame: &mut Frame, form: &FormState, cursor_visible: bool) {
    if form.is_submitted() {
        render_result(frame, form);
        return;
    }

    let hints = get_keybindings(KeyContext::Form);

    // Header rows, a blank line, then three rows per entry, error, hints, borders
    let rows = 3 + form.entries().len() * 3 + 2 + hints.len() + 4;
    let height = u16::try_from(rows).unwrap_or(u16::MAX);
    let area = centered_rect_fixed(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    let focused = form.focused();

    lines.push(field_line(
        "Date:",
        &form.date,
        focused == FieldId::Date,
        cursor_visible,
    ));
    lines.push(field_line(
        "Description:",
        &form.description,
        focused == FieldId::Description,
        cursor_visible,
    ));
    lines.push(Line::default());

    let mut focused_line = match focused {
        FieldId::Date => 0,
        _ => 1,
    };

    for entry in form.entries() {
        if focused == FieldId::Account(entry.id) {
            focused_line = lines.len();
        } else if focused == FieldId::Amount(entry.id) {
            focused_line = lines.len() + 1;
        }
        lines.push(field_line(
            &format!("Account {}:", entry.id),
            &entry.account,
            focused == FieldId::Account(entry.id),
            cursor_visible,
        ));
        lines.push(field_line(
            &format!("Amount  {}:", entry.id),
            &entry.amount,
            focused == FieldId::Amount(entry.id),
            cursor_visible,
        ));
        lines.push(Line::default());
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                     // Fields
            Constraint::Length(2),                  // Error
            Constraint::Length(hints.len() as u16), // Hints
        ])
        .split(inner);

    // Scroll just far enough that the focused row is on screen
    let visible = usize::from(chunks[0].height.max(1));
    let offset = (focused_line + 1).saturating_sub(visible);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), chunks[0]);

    if let Some(error) = form.error_message() {
        let error_line = Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[1]);
    }

    let hint_lines: Vec<Line> = hints
        .iter()
        .map(|kb| {
            Line::from(vec![
                Span::styled(
                    format!("{:<9}", format!("[{}]", format_keybinding(kb))),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(kb.description, Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(hint_lines), chunks[2]);
}

/// After submission the screen shows exactly the journal entry
fn render_result(frame: &mut Frame, form: &FormState) {
    let text = form.rendered_text();
    let lines: Vec<Line> = text.lines().map(Line::raw).collect();
    frame.render_widget(Clear, frame.area());
    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// Build one labelled field line, with the cursor drawn when focused
fn field_line<'a>(
    label: &str,
    input: &'a TextInput,
    focused: bool,
    cursor_visible: bool,
) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(
        format!("{:<width$}", label, width = LABEL_WIDTH),
        label_style,
    )];

    if !focused {
        if input.is_empty() {
            spans.push(Span::styled(
                input.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(input.value(), Style::default().fg(Color::Yellow)));
        }
        return Line::from(spans);
    }

    let value_style = Style::default().fg(Color::White);
    let (before, under, after) = input.split_at_cursor();
    spans.push(Span::styled(before, value_style));

    let cursor_char = under.unwrap_or(' ').to_string();
    if cursor_visible {
        spans.push(Span::styled(
            cursor_char,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    } else {
        spans.push(Span::styled(cursor_char, value_style));
    }

    spans.push(Span::styled(after, value_style));
    Line::from(spans)
}
