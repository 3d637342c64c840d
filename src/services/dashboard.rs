//! Dashboard session
//!
//! Holds the two ledgers for one month and the highlighted date. Every
//! render goes through [`Dashboard::snapshot`], which recomputes category
//! totals, breakdown nominals and totals from the current cells. Nothing
//! derived is cached between renders.

use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::LedgerSeed;
use crate::error::{RekapError, RekapResult};
use crate::export::csv::{
    read_daily_csv, read_summary_csv, save_daily_csv, save_summary_csv, summary_file_name,
    DAILY_FILE_NAME,
};
use crate::models::{
    format_date, CategoryTotals, DailyLedger, Period, SummaryField, SummaryLedger, Totals,
};

/// Everything a render pass needs, derived from the current tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub period: Period,
    pub selected_date: NaiveDate,
    pub daily: DailyLedger,
    pub category_totals: CategoryTotals,
    /// Recap rows with nominals refreshed from `category_totals`
    pub summary: SummaryLedger,
    pub totals: Totals,
}

/// One user's dashboard for one month
#[derive(Debug, Clone)]
pub struct Dashboard {
    seed: LedgerSeed,
    period: Period,
    daily: DailyLedger,
    summary: SummaryLedger,
    selected_date: NaiveDate,
}

impl Dashboard {
    /// Start a fresh dashboard from the seed
    pub fn new(seed: LedgerSeed, period: Period) -> Self {
        let daily = DailyLedger::new(period, seed.categories.clone());
        let summary = SummaryLedger::from_seed(&seed.summary_rows);
        Self {
            seed,
            period,
            daily,
            summary,
            selected_date: period.start_date(),
        }
    }

    /// Start from the seed, then pick up any previously exported CSVs in `dir`
    pub fn load(seed: LedgerSeed, period: Period, dir: &Path) -> RekapResult<Self> {
        let mut dashboard = Self::new(seed, period);

        let daily_path = dashboard.daily_path(dir);
        if daily_path.exists() {
            let file = File::open(&daily_path)?;
            dashboard.daily = read_daily_csv(
                BufReader::new(file),
                period,
                dashboard.seed.categories.clone(),
            )?;
            log::info!("Loaded daily ledger from {}", daily_path.display());
        }

        let summary_path = dashboard.summary_path(dir);
        if summary_path.exists() {
            let file = File::open(&summary_path)?;
            dashboard.summary = read_summary_csv(BufReader::new(file))?;
            log::info!("Loaded recap from {}", summary_path.display());
        }

        Ok(dashboard)
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn daily(&self) -> &DailyLedger {
        &self.daily
    }

    pub fn summary(&self) -> &SummaryLedger {
        &self.summary
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Recompute all derived values from the current tables
    pub fn snapshot(&self) -> DashboardSnapshot {
        let category_totals = self.daily.category_totals();
        let mut summary = self.summary.clone();
        summary.refresh_nominals(&category_totals);
        let totals = summary.totals();

        log::debug!(
            "Recomputed dashboard: income {}, expense {}, breakdown {}, balance {}",
            totals.income,
            totals.expense,
            totals.breakdown,
            totals.balance
        );

        DashboardSnapshot {
            period: self.period,
            selected_date: self.selected_date,
            daily: self.daily.clone(),
            category_totals,
            summary,
            totals,
        }
    }

    /// Edit a daily cell by date and category name
    pub fn edit_daily(
        &mut self,
        date: NaiveDate,
        category: &str,
        value: impl Into<String>,
    ) -> RekapResult<()> {
        self.daily.set_cell(date, category, value)
    }

    /// Edit a daily cell by grid position
    pub fn edit_daily_at(&mut self, row: usize, col: usize, value: impl Into<String>) -> RekapResult<()> {
        self.daily.set_cell_at(row, col, value)
    }

    /// Edit an editable recap field
    pub fn edit_summary(
        &mut self,
        row_number: u32,
        field: SummaryField,
        value: impl Into<String>,
    ) -> RekapResult<()> {
        self.summary.set_field(row_number, field, value)
    }

    /// Edit an editable recap field by grid position
    pub fn edit_summary_at(
        &mut self,
        index: usize,
        field: SummaryField,
        value: impl Into<String>,
    ) -> RekapResult<()> {
        self.summary.set_field_at(index, field, value)
    }

    /// Highlight a date; it must be a day of the ledger
    pub fn select_date(&mut self, date: NaiveDate) -> RekapResult<()> {
        if self.daily.row_of(date).is_none() {
            return Err(RekapError::date_not_found(format_date(date)));
        }
        self.selected_date = date;
        Ok(())
    }

    /// Move the highlight by `offset` days, clamped to the month
    pub fn shift_selected_date(&mut self, offset: i64) {
        let entries = self.daily.entries();
        if entries.is_empty() {
            return;
        }
        let current = self.daily.row_of(self.selected_date).unwrap_or(0) as i64;
        let target = (current + offset).clamp(0, entries.len() as i64 - 1) as usize;
        self.selected_date = entries[target].date;
    }

    /// Blank the daily grid only
    pub fn clear_daily(&mut self) {
        self.daily.reset();
    }

    /// Restore both ledgers to the seed and select the first day
    pub fn reset(&mut self) {
        self.daily = DailyLedger::new(self.period, self.seed.categories.clone());
        self.summary = SummaryLedger::from_seed(&self.seed.summary_rows);
        self.selected_date = self.period.start_date();
        log::info!("Dashboard reset to seed data");
    }

    /// Path the daily ledger is exported to inside `dir`
    pub fn daily_path(&self, dir: &Path) -> PathBuf {
        dir.join(DAILY_FILE_NAME)
    }

    /// Path the recap is exported to inside `dir`
    pub fn summary_path(&self, dir: &Path) -> PathBuf {
        dir.join(summary_file_name(&self.period))
    }

    /// Overwrite the daily CSV in `dir`
    pub fn save_daily(&self, dir: &Path) -> RekapResult<PathBuf> {
        let path = self.daily_path(dir);
        save_daily_csv(&self.daily, &path)?;
        log::info!("Saved daily ledger to {}", path.display());
        Ok(path)
    }

    /// Overwrite the recap CSV in `dir`, with nominals refreshed first
    pub fn save_summary(&mut self, dir: &Path) -> RekapResult<PathBuf> {
        self.summary.refresh_nominals(&self.daily.category_totals());
        let path = self.summary_path(dir);
        save_summary_csv(&self.summary, &path)?;
        log::info!("Saved recap to {}", path.display());
        Ok(path)
    }
}
