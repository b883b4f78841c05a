use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::menu::MenuAction;
use crate::page::Page;

/// Render the menu bar (top line)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let menu_style = if app.menu.open {
        Style::default().fg(Color::White).bg(Color::Gray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Gray)
    };

    let mut spans = vec![Span::styled(" Menu (Esc) ", menu_style.add_modifier(Modifier::BOLD))];

    for page in Page::ALL {
        let style = if page == app.page {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("F{} {}", page.shortcut(), page.title()),
            style,
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the drop-down menu over the page
pub fn render_popup(f: &mut Frame, area: Rect, app: &App) {
    let width = 28;
    let height = MenuAction::ALL.len() as u16 + 2;
    let popup = Rect {
        x: area.x,
        y: area.y + 1,
        width: width.min(area.width),
        height: height.min(area.height.saturating_sub(1)),
    };

    let items: Vec<ListItem> = MenuAction::ALL
        .iter()
        .map(|action| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<12}", action.label())),
                Span::styled(action.key_hint(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Menu "))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.menu.selected));

    f.render_widget(Clear, popup);
    f.render_stateful_widget(list, popup, &mut state);
}
