use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Window size (cells) when not fullscreen
pub const WINDOW_WIDTH: u16 = 80;
pub const WINDOW_HEIGHT: u16 = 30;

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Centered fixed-size window, shrunk to fit small terminals
    pub fn window(area: Rect) -> Rect {
        Self::centered(area, WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    /// Rect of at most `width`×`height` centered in `area`
    pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Create the main layout with menu bar, content area, notice line and status bar
    ///
    /// Returns: (menu_area, content_area, notice_area, status_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Menu bar
                Constraint::Min(0),    // Page
                Constraint::Length(1), // Notice
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2], chunks[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_centered() {
        let area = Rect::new(0, 0, 120, 40);
        assert_eq!(Layout::window(area), Rect::new(20, 5, 80, 30));
    }

    #[test]
    fn test_window_shrinks_to_terminal() {
        let area = Rect::new(0, 0, 50, 20);
        assert_eq!(Layout::window(area), area);
    }
}
