use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::Layout;
use crate::form::Form;
use crate::page::Page;

const FORM_WIDTH: u16 = 60;

/// Render a data page: one bordered input per field, then the save button
pub fn render(f: &mut Frame, area: Rect, page: Page, form: &Form) {
    let height = form.fields.len() as u16 * 3 + 3 + 2;
    let area = Layout::centered(area, FORM_WIDTH, height);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", page.title()))
        .border_style(Style::default().fg(Color::Yellow));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = form.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(3));
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let border_color = if focused { Color::Yellow } else { Color::DarkGray };

        let content = if field.value.is_empty() {
            Line::from(Span::styled(field.placeholder, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(field.value.as_str())
        };

        let mut title = format!(" {} ", field.label);
        if let Some(max) = field.max_len {
            title = format!(" {} ({}/{}) ", field.label, field.value.chars().count(), max);
        }

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(input, rows[idx]);

        if focused {
            let typed = u16::try_from(field.value.chars().count()).unwrap_or(u16::MAX);
            let (cursor_x, cursor_y) = cursor_position(rows[idx], typed);
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }

    let button = Paragraph::new(Line::from(Span::styled(
        "[ Save ]  (Enter)",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));
    f.render_widget(button, rows[form.fields.len()]);
}

/// Cursor cell after `typed` characters, clamped inside the input's border
fn cursor_position(input: Rect, typed: u16) -> (u16, u16) {
    let cursor_x = input.x.saturating_add(1).saturating_add(typed);
    let max_x = input.x.saturating_add(input.width.saturating_sub(2));
    (cursor_x.min(max_x), input.y.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_follows_text() {
        let input = Rect::new(10, 4, 30, 3);
        assert_eq!(cursor_position(input, 0), (11, 5));
        assert_eq!(cursor_position(input, 5), (16, 5));
    }

    #[test]
    fn test_cursor_clamped_for_long_values() {
        let input = Rect::new(10, 4, 30, 3);
        assert_eq!(cursor_position(input, 200), (38, 5));
        assert_eq!(cursor_position(input, u16::MAX), (38, 5));

        let edge = Rect::new(u16::MAX - 5, 0, 5, 3);
        assert_eq!(cursor_position(edge, u16::MAX), (u16::MAX - 2, 1));
    }
}
