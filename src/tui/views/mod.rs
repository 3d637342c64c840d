//! TUI Views module
//!
//! Every frame takes a fresh [`DashboardSnapshot`] and hands it to the
//! views, so totals and nominals always reflect the current cells.

pub mod categories;
pub mod daily;
pub mod sidebar;
pub mod status_bar;
pub mod summary;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::services::DashboardSnapshot;

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let layout = AppLayout::new(frame.area(), editing);
    let snapshot: DashboardSnapshot = app.dashboard.snapshot();

    sidebar::render(frame, app, &snapshot, layout.sidebar);
    daily::render(frame, app, &snapshot, layout.daily);
    categories::render(frame, &snapshot, layout.categories);
    summary::render(frame, app, &snapshot, layout.summary);

    if editing {
        let block = Block::default()
            .title(" Edit ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(layout.input);
        frame.render_widget(block, layout.input);
        frame.render_widget(app.input.clone(), inner);
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::ConfirmReset => dialogs::confirm::render(
            frame,
            "Reset both tables to their starting values?",
        ),
        ActiveDialog::None => {}
    }
}

/// Border color of a panel depending on focus
pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerSeed, Settings};
    use crate::models::Period;
    use crate::services::Dashboard;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(180, 45)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_totals() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut dashboard = Dashboard::new(LedgerSeed::default(), Period::default());
        dashboard.edit_daily_at(0, 0, "Rp50.000").unwrap();
        let app = App::new(dashboard, &settings, temp_dir.path());

        let text = screen_text(&app);
        assert!(text.contains("Juni 2025"));
        assert!(text.contains("Iqbal"));
        assert!(text.contains("Rp3.700.000"));
        assert!(text.contains("Rp2.250.000"));
        assert!(text.contains("Rp50.000"));
    }

    #[test]
    fn test_render_dialogs() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let dashboard = Dashboard::new(LedgerSeed::default(), Period::default());
        let mut app = App::new(dashboard, &settings, temp_dir.path());

        app.open_dialog(ActiveDialog::ConfirmReset);
        assert!(screen_text(&app).contains("Reset both tables"));

        app.open_dialog(ActiveDialog::Help);
        assert!(screen_text(&app).contains("Switch between daily and recap table"));

        app.close_dialog();
        app.begin_edit();
        assert!(screen_text(&app).contains("Makan 01/06/2025"));
    }
}
