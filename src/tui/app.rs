//! Application state for the TUI
//!
//! The App struct owns the dashboard session and the cursor/editing state
//! of both grids. Derived values are never stored here; views call
//! `Dashboard::snapshot` on every frame.

use std::path::Path;

use crate::config::Settings;
use crate::models::{format_date, SummaryField};
use crate::services::Dashboard;

use super::widgets::TextInput;

/// Which grid has the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedGrid {
    #[default]
    Daily,
    Summary,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmReset,
}

/// Cursor position inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Main application state
pub struct App<'a> {
    /// The dashboard session being edited
    pub dashboard: Dashboard,

    /// Application settings
    pub settings: &'a Settings,

    /// Where the save actions write their CSV files
    pub output_dir: &'a Path,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which grid has the cursor
    pub focused_grid: FocusedGrid,

    /// Cursor in the daily grid (row = day, col = category)
    pub daily_cursor: Cursor,

    /// Cursor in the recap grid (col indexes `SummaryField::ALL`)
    pub summary_cursor: Cursor,

    /// Current input mode
    pub input_mode: InputMode,

    /// Cell editor, filled when editing starts
    pub input: TextInput,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(dashboard: Dashboard, settings: &'a Settings, output_dir: &'a Path) -> Self {
        let mut app = Self {
            dashboard,
            settings,
            output_dir,
            should_quit: false,
            focused_grid: FocusedGrid::default(),
            daily_cursor: Cursor::default(),
            summary_cursor: Cursor::default(),
            input_mode: InputMode::default(),
            input: TextInput::new(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
        };
        app.sync_cursor_to_selected_date();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Switch the cursor between the two grids
    pub fn toggle_grid_focus(&mut self) {
        self.focused_grid = match self.focused_grid {
            FocusedGrid::Daily => FocusedGrid::Summary,
            FocusedGrid::Summary => FocusedGrid::Daily,
        };
    }

    fn grid_bounds(&self) -> (usize, usize) {
        match self.focused_grid {
            FocusedGrid::Daily => (
                self.dashboard.daily().entries().len(),
                self.dashboard.daily().categories().len(),
            ),
            FocusedGrid::Summary => (
                self.dashboard.summary().rows().len(),
                SummaryField::ALL.len(),
            ),
        }
    }

    fn cursor_mut(&mut self) -> &mut Cursor {
        match self.focused_grid {
            FocusedGrid::Daily => &mut self.daily_cursor,
            FocusedGrid::Summary => &mut self.summary_cursor,
        }
    }

    /// Move the cursor by a row/column delta, clamped to the grid
    pub fn move_cursor(&mut self, rows: isize, cols: isize) {
        let (max_row, max_col) = self.grid_bounds();
        let cursor = self.cursor_mut();
        cursor.row = clamp_step(cursor.row, rows, max_row);
        cursor.col = clamp_step(cursor.col, cols, max_col);
    }

    /// Jump to the first or last row of the focused grid
    pub fn jump_to_edge(&mut self, bottom: bool) {
        let (max_row, _) = self.grid_bounds();
        let cursor = self.cursor_mut();
        cursor.row = if bottom { max_row.saturating_sub(1) } else { 0 };
    }

    /// Move the daily cursor onto the selected date's row
    pub fn sync_cursor_to_selected_date(&mut self) {
        if let Some(row) = self.dashboard.daily().row_of(self.dashboard.selected_date()) {
            self.daily_cursor.row = row;
        }
    }

    /// Change the selected date by `offset` days and follow it with the cursor
    pub fn shift_selected_date(&mut self, offset: i64) {
        self.dashboard.shift_selected_date(offset);
        self.focused_grid = FocusedGrid::Daily;
        self.sync_cursor_to_selected_date();
        self.set_status(format!(
            "Tanggal dipilih: {}",
            format_date(self.dashboard.selected_date())
        ));
    }

    /// Text of the cell under the cursor
    pub fn current_cell_value(&self) -> String {
        match self.focused_grid {
            FocusedGrid::Daily => self
                .dashboard
                .daily()
                .cell_at(self.daily_cursor.row, self.daily_cursor.col)
                .unwrap_or_default()
                .to_string(),
            FocusedGrid::Summary => self
                .dashboard
                .summary()
                .rows()
                .get(self.summary_cursor.row)
                .map(|row| row.field(SummaryField::ALL[self.summary_cursor.col]).to_string())
                .unwrap_or_default(),
        }
    }

    /// Label of the cell under the cursor, for the edit prompt
    pub fn current_cell_label(&self) -> String {
        match self.focused_grid {
            FocusedGrid::Daily => {
                let daily = self.dashboard.daily();
                let category = daily
                    .categories()
                    .get(self.daily_cursor.col)
                    .map(String::as_str)
                    .unwrap_or_default();
                let date = daily
                    .entries()
                    .get(self.daily_cursor.row)
                    .map(|e| format_date(e.date))
                    .unwrap_or_default();
                format!("{} {}", category, date)
            }
            FocusedGrid::Summary => format!(
                "{} #{}",
                SummaryField::ALL[self.summary_cursor.col],
                self.summary_cursor.row + 1
            ),
        }
    }

    /// Start editing the cell under the cursor
    pub fn begin_edit(&mut self) {
        self.input = TextInput::new()
            .label(self.current_cell_label())
            .content(self.current_cell_value())
            .focused(true);
        self.input_mode = InputMode::Editing;
    }

    /// Abandon the edit without touching the cell
    pub fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Write the editor content into the cell under the cursor
    pub fn commit_edit(&mut self) {
        let value = self.input.value().trim().to_string();
        let result = match self.focused_grid {
            FocusedGrid::Daily => {
                self.dashboard
                    .edit_daily_at(self.daily_cursor.row, self.daily_cursor.col, value)
            }
            FocusedGrid::Summary => self.dashboard.edit_summary_at(
                self.summary_cursor.row,
                SummaryField::ALL[self.summary_cursor.col],
                value,
            ),
        };

        match result {
            Ok(()) => self.clear_status(),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
        self.cancel_edit();
    }

    /// Restore both grids to the seed
    pub fn reset(&mut self) {
        self.dashboard.reset();
        self.daily_cursor = Cursor::default();
        self.summary_cursor = Cursor::default();
        self.sync_cursor_to_selected_date();
        self.set_status("Tabel direset");
    }

    /// Save the daily grid to its CSV file
    pub fn save_daily(&mut self) {
        match self.dashboard.save_daily(self.output_dir) {
            Ok(path) => self.set_status(format!("Data berhasil disimpan sebagai {}", path.display())),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }

    /// Save the recap grid to its CSV file
    pub fn save_summary(&mut self) {
        match self.dashboard.save_summary(self.output_dir) {
            Ok(path) => self.set_status(format!("Data berhasil disimpan sebagai {}", path.display())),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }
}

fn clamp_step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let target = current as isize + delta;
    target.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerSeed;
    use crate::models::{Amount, Period};
    use tempfile::TempDir;

    fn app_with<'a>(settings: &'a Settings, dir: &'a Path) -> App<'a> {
        App::new(Dashboard::new(LedgerSeed::default(), Period::default()), settings, dir)
    }

    #[test]
    fn test_cursor_is_clamped() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, temp_dir.path());

        app.move_cursor(-1, -1);
        assert_eq!(app.daily_cursor, Cursor { row: 0, col: 0 });
        app.move_cursor(100, 100);
        assert_eq!(app.daily_cursor, Cursor { row: 29, col: 6 });

        app.toggle_grid_focus();
        app.move_cursor(100, 100);
        assert_eq!(app.summary_cursor, Cursor { row: 9, col: 4 });
    }

    #[test]
    fn test_edit_daily_cell() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, temp_dir.path());

        app.begin_edit();
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.input.label, "Makan 01/06/2025");
        for c in "Rp50.000".chars() {
            app.input.insert(c);
        }
        app.commit_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        let snapshot = app.dashboard.snapshot();
        assert_eq!(snapshot.category_totals.get("Makan"), Some(Amount::new(50_000)));
        assert_eq!(snapshot.summary.rows()[0].nominal, "Rp50.000");
    }

    #[test]
    fn test_cancel_edit_keeps_cell() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, temp_dir.path());

        app.toggle_grid_focus();
        app.move_cursor(5, 1);
        assert_eq!(app.current_cell_value(), "Rp300,000");

        app.begin_edit();
        app.input.clear();
        app.cancel_edit();
        assert_eq!(app.current_cell_value(), "Rp300,000");
    }

    #[test]
    fn test_summary_edit_targets_cursor_row() {
        use crate::export::csv::read_summary_csv;

        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let data = "NO,Pemasukan,Jumlah Pemasukan\n1,A,Rp1\n1,B,Rp2\n";
        std::fs::write(temp_dir.path().join("rekap_keuangan_juni.csv"), data).unwrap();
        let dashboard =
            Dashboard::load(LedgerSeed::default(), Period::default(), temp_dir.path()).unwrap();
        let mut app = App::new(dashboard, &settings, temp_dir.path());

        app.toggle_grid_focus();
        app.move_cursor(1, 0);
        app.begin_edit();
        app.input.clear();
        for c in "EDITED".chars() {
            app.input.insert(c);
        }
        app.commit_edit();

        let rows = app.dashboard.summary().rows();
        assert_eq!(rows[0].income_label, "A");
        assert_eq!(rows[1].income_label, "EDITED");

        app.save_summary();
        let file = std::fs::File::open(temp_dir.path().join("rekap_keuangan_juni.csv")).unwrap();
        let reread = read_summary_csv(file).unwrap();
        assert_eq!(reread.rows()[1].income_label, "EDITED");
    }

    #[test]
    fn test_selected_date_moves_cursor() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, temp_dir.path());

        app.toggle_grid_focus();
        app.shift_selected_date(4);
        assert_eq!(app.focused_grid, FocusedGrid::Daily);
        assert_eq!(app.daily_cursor.row, 4);
        assert_eq!(app.status_message.as_deref(), Some("Tanggal dipilih: 05/06/2025"));
    }

    #[test]
    fn test_save_actions() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, temp_dir.path());

        app.save_daily();
        app.save_summary();
        assert!(temp_dir.path().join("pengeluaran_harian.csv").exists());
        assert!(temp_dir.path().join("rekap_keuangan_juni.csv").exists());
    }

    #[test]
    fn test_reset() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&settings, temp_dir.path());

        app.dashboard.edit_daily_at(3, 3, "Rp9.000").unwrap();
        app.shift_selected_date(10);
        app.reset();

        assert_eq!(app.daily_cursor.row, 0);
        assert_eq!(app.dashboard.snapshot().category_totals.grand_total(), Amount::zero());
    }
}
