//! Layout definitions for the TUI
//!
//! Sidebar on the left (profile, totals), the daily grid and category
//! cards in the middle, the recap on the right, and a status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Profile, period and totals
    pub sidebar: Rect,
    /// Daily expense grid
    pub daily: Rect,
    /// Category total cards under the grid
    pub categories: Rect,
    /// Income/expense recap
    pub summary: Rect,
    /// Edit prompt, only non-empty while editing
    pub input: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, editing: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(if editing { 3 } else { 0 }),
                Constraint::Length(1),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32),
                Constraint::Percentage(55),
                Constraint::Min(40),
            ])
            .split(vertical[0]);

        let middle = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(5)])
            .split(horizontal[1]);

        Self {
            sidebar: horizontal[0],
            daily: middle[0],
            categories: middle[1],
            summary: horizontal[2],
            input: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_row_only_while_editing() {
        let area = Rect::new(0, 0, 160, 40);
        assert_eq!(AppLayout::new(area, false).input.height, 0);
        assert_eq!(AppLayout::new(area, true).input.height, 3);
        assert_eq!(AppLayout::new(area, true).status_bar.y, 39);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(50, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(r, Rect::new(0, 0, 40, 8));
    }
}
