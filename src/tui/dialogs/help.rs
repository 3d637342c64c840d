//! Help dialog
//!
//! Lists every keybinding, grouped by context, with the current grid
//! called out at the top.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedGrid};
use crate::tui::keybindings::{bindings_for, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let focused = match app.focused_grid {
        FocusedGrid::Daily => "Pengeluaran Harian",
        FocusedGrid::Summary => "Rekap Keuangan",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Active table: ", Style::default().fg(Color::DarkGray)),
            Span::styled(focused, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    for context in [KeyContext::Global, KeyContext::Grid, KeyContext::Editing] {
        lines.push(Line::from(Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )));
        lines.extend(bindings_for(context).map(|kb| key_line(kb.keys, kb.description)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Amounts accept Rp prefixes and . or , separators",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
