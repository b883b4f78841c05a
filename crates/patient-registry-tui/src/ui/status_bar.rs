use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, NoticeKind};

/// Render the status bar (bottom line)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let time_str = Local::now().format("%H:%M").to_string();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.page.title().to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} patients", app.patient_count),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(app.page.hint(), Style::default().fg(Color::DarkGray)),
    ];

    // Right-aligned time
    let width = area.width as usize;
    let current_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(current_len + time_str.len() + 1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        format!("{} ", time_str),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the outcome of the last action
pub fn render_notice(f: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let style = match notice.kind {
        NoticeKind::Info => Style::default().fg(Color::Green),
        NoticeKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {}", notice.text), style))),
        area,
    );
}
