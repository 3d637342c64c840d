//! Income/expense recap table
//!
//! The five text columns are editable; `Nominal` is always the computed
//! total of the category named in `Rincian Biaya`.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::export::csv::SUMMARY_HEADERS;
use crate::models::SummaryField;
use crate::services::DashboardSnapshot;
use crate::tui::app::{App, FocusedGrid};

use super::border_style;

/// Render the recap table
pub fn render(frame: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let focused = app.focused_grid == FocusedGrid::Summary;
    let block = Block::default()
        .title(format!(
            " Rekap Keuangan {} ",
            snapshot.period.month_name()
        ))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(SUMMARY_HEADERS.iter().map(|h| Cell::from(*h).style(bold)));

    let rows: Vec<Row> = snapshot
        .summary
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let mut cells = vec![Cell::from(row.number.to_string())
                .style(Style::default().fg(Color::DarkGray))];
            cells.extend(SummaryField::ALL.iter().enumerate().map(|(col_idx, field)| {
                let at_cursor = focused
                    && app.summary_cursor.row == row_idx
                    && app.summary_cursor.col == col_idx;
                let style = if at_cursor {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default()
                };
                Cell::from(row.field(*field).to_string()).style(style)
            }));
            cells.push(Cell::from(row.nominal.clone()).style(Style::default().fg(Color::Green)));
            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Min(12),
        Constraint::Min(8),
        Constraint::Min(12),
        Constraint::Min(10),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    let mut state = TableState::default();
    state.select(Some(app.summary_cursor.row));
    frame.render_stateful_widget(table, area, &mut state);
}
