//! Sidebar view
//!
//! Profile and period header, the selected date, and the four totals.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{format_date, Amount};
use crate::services::DashboardSnapshot;
use crate::tui::app::App;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    render_header(frame, app, snapshot, chunks[0]);
    render_totals(frame, snapshot, chunks[1]);
}

fn render_header(frame: &mut Frame, app: &App, snapshot: &DashboardSnapshot, area: Rect) {
    let block = Block::default()
        .title(" Rekap Keuangan ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(Span::styled(
            format!("Hai, {}", app.settings.profile_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(snapshot.period.label()),
        Line::from(vec![
            Span::styled("Tanggal: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_date(snapshot.selected_date),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_totals(frame: &mut Frame, snapshot: &DashboardSnapshot, area: Rect) {
    let block = Block::default()
        .title(" Ringkasan ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let totals = &snapshot.totals;
    let balance_color = if totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        total_line("Total Pemasukan", totals.income, Color::Green),
        total_line("Total Pengeluaran", totals.expense, Color::Red),
        total_line("Rincian Biaya", totals.breakdown, Color::Yellow),
        Line::from(""),
        Line::from(Span::styled(
            "Saldo Saat Ini",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            totals.balance.to_string(),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn total_line(label: &str, amount: Amount, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::White)),
        Span::styled(amount.to_string(), Style::default().fg(color)),
    ])
}
