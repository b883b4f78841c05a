pub mod form_page;
pub mod layout;
pub mod menu_bar;
pub mod status_bar;
pub mod table_page;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::page::Page;

pub use layout::Layout;

const WINDOW_TITLE: &str = " Patient Registry ";

/// Render the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let area = if app.fullscreen {
        f.area()
    } else {
        let window = Layout::window(f.area());
        let frame = Block::default()
            .borders(Borders::ALL)
            .title(WINDOW_TITLE)
            .border_style(Style::default().fg(Color::Gray));
        let inner = frame.inner(window);
        f.render_widget(frame, window);
        inner
    };

    let (menu_area, content_area, notice_area, status_area) = Layout::main(area);

    menu_bar::render(f, menu_area, app);

    match (app.page, app.current_form()) {
        (Page::List, _) | (_, None) => table_page::render(f, content_area, &app.table),
        (page, Some(form)) => form_page::render(f, content_area, page, form),
    }

    status_bar::render_notice(f, notice_area, app);
    status_bar::render(f, status_area, app);

    if app.menu.open {
        menu_bar::render_popup(f, area, app);
    }
}
