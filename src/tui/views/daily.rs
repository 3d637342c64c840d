//! Daily expense grid
//!
//! One row per day of the month, one column per category. The selected
//! date is marked and the cursor cell is highlighted when the grid has
//! focus.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::daily::category_icon;
use crate::export::csv::DATE_HEADER;
use crate::models::format_date;
use crate::services::DashboardSnapshot;
use crate::tui::app::{App, FocusedGrid};

use super::border_style;

/// Render the daily grid
pub fn render(frame: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let focused = app.focused_grid == FocusedGrid::Daily;
    let block = Block::default()
        .title(" Pengeluaran Harian ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let ledger = &snapshot.daily;
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut header_cells = vec![Cell::from(""), Cell::from(DATE_HEADER).style(bold)];
    header_cells.extend(
        ledger
            .categories()
            .iter()
            .map(|c| Cell::from(format!("{} {}", category_icon(c), c)).style(bold)),
    );
    let header = Row::new(header_cells).height(1).bottom_margin(0);

    let rows: Vec<Row> = ledger
        .entries()
        .iter()
        .enumerate()
        .map(|(row_idx, entry)| {
            let is_selected = entry.date == snapshot.selected_date;
            let marker = if is_selected { "▶" } else { "" };
            let date_style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut cells = vec![
                Cell::from(marker).style(Style::default().fg(Color::Yellow)),
                Cell::from(format_date(entry.date)).style(date_style),
            ];
            cells.extend(entry.cells.iter().enumerate().map(|(col_idx, value)| {
                let at_cursor = focused
                    && app.daily_cursor.row == row_idx
                    && app.daily_cursor.col == col_idx;
                let style = if at_cursor {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                Cell::from(value.clone()).style(style)
            }));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(1), Constraint::Length(10)];
    widths.extend(ledger.categories().iter().map(|_| Constraint::Min(10)));

    let table = Table::new(rows, widths).header(header).block(block);

    let mut state = TableState::default();
    state.select(Some(app.daily_cursor.row));
    frame.render_stateful_widget(table, area, &mut state);
}
