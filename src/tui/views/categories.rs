//! Category total cards

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::daily::category_icon;
use crate::services::DashboardSnapshot;

/// Render one small card per category with its monthly total
pub fn render(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let block = Block::default()
        .title(" Total per Kategori ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let totals = &snapshot.category_totals;
    if totals.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, totals.len() as u32); totals.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for ((category, amount), card) in totals.iter().zip(cards.iter()) {
        let amount_style = if amount.is_zero() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let lines = vec![
            Line::from(format!("{} {}", category_icon(category), category)),
            Line::from(Span::styled(amount.to_string(), amount_style)),
        ];
        frame.render_widget(Paragraph::new(lines), *card);
    }
}
