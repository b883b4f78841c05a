use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::PatientTable;
use crate::page::Page;

const HEADERS: [&str; 5] = ["First name", "Last name", "Personal ID", "Affiliation", "Comment"];

/// Render the read-only patient table with its refresh button
pub fn render(f: &mut Frame, area: Rect, table: &PatientTable) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", Page::List.title(), table.rows.len()))
        .border_style(Style::default().fg(Color::Yellow));

    if table.rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No patients loaded",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press 'r' to refresh",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(empty, chunks[0]);
    } else {
        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = table.rows.iter().enumerate().map(|(idx, record)| {
            let style = if idx % 2 == 1 {
                Style::default().bg(Color::Rgb(0xFA, 0xFA, 0x94)).fg(Color::Black)
            } else {
                Style::default()
            };
            Row::new(record.cells().map(|c| Cell::from(Line::from(c).alignment(Alignment::Center))))
                .style(style)
        });

        let widget = Table::new(rows, [Constraint::Ratio(1, 5); 5])
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default().with_selected(table.selected);
        f.render_stateful_widget(widget, chunks[0], &mut state);
    }

    let button = Paragraph::new(Span::styled(
        "[ Refresh ]  (r)",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(button, chunks[1]);
}
