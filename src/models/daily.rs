//! Daily expense ledger
//!
//! One row per day of the period, one free-text cell per expense category.
//! Rows are never added or removed after creation; cells are edited in
//! place and totals are always recomputed from the current cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Amount;
use super::period::{format_date, Period};
use crate::error::{RekapError, RekapResult};
use crate::services::aggregate::column_total;

/// One day of expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Calendar day
    pub date: NaiveDate,
    /// Cell text per category, in the ledger's column order
    pub cells: Vec<String>,
}

impl DailyEntry {
    fn empty(date: NaiveDate, columns: usize) -> Self {
        Self {
            date,
            cells: vec![String::new(); columns],
        }
    }

    /// Whether every cell is blank
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

/// Per-category totals, in column order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTotals(Vec<(String, Amount)>);

impl CategoryTotals {
    /// Total for a category, if the category exists
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum over all categories
    pub fn grand_total(&self) -> Amount {
        self.0.iter().map(|(_, total)| *total).sum()
    }
}

/// The editable grid of daily expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLedger {
    categories: Vec<String>,
    entries: Vec<DailyEntry>,
}

impl DailyLedger {
    /// Create an empty ledger with one row per day of `period`
    pub fn new(period: Period, categories: Vec<String>) -> Self {
        let entries = period
            .days()
            .into_iter()
            .map(|date| DailyEntry::empty(date, categories.len()))
            .collect();
        Self {
            categories,
            entries,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn entries(&self) -> &[DailyEntry] {
        &self.entries
    }

    /// Row index for a date
    pub fn row_of(&self, date: NaiveDate) -> Option<usize> {
        self.entries.iter().position(|e| e.date == date)
    }

    /// Column index for a category
    pub fn column_of(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == category)
    }

    /// Cell text for a date and category
    pub fn cell(&self, date: NaiveDate, category: &str) -> Option<&str> {
        let row = self.row_of(date)?;
        let col = self.column_of(category)?;
        Some(self.entries[row].cells[col].as_str())
    }

    /// Cell text by grid position
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&str> {
        self.entries
            .get(row)
            .and_then(|e| e.cells.get(col))
            .map(String::as_str)
    }

    /// Overwrite the cell for a date and category
    pub fn set_cell(
        &mut self,
        date: NaiveDate,
        category: &str,
        value: impl Into<String>,
    ) -> RekapResult<()> {
        let row = self
            .row_of(date)
            .ok_or_else(|| RekapError::date_not_found(format_date(date)))?;
        let col = self
            .column_of(category)
            .ok_or_else(|| RekapError::category_not_found(category))?;
        self.entries[row].cells[col] = value.into();
        Ok(())
    }

    /// Overwrite a cell by grid position
    pub fn set_cell_at(&mut self, row: usize, col: usize, value: impl Into<String>) -> RekapResult<()> {
        let entry = self
            .entries
            .get_mut(row)
            .ok_or_else(|| RekapError::row_not_found(row.to_string()))?;
        let cell = entry
            .cells
            .get_mut(col)
            .ok_or_else(|| RekapError::category_not_found(format!("column {}", col)))?;
        *cell = value.into();
        Ok(())
    }

    /// Blank every cell
    pub fn reset(&mut self) {
        for entry in &mut self.entries {
            entry.cells.iter_mut().for_each(String::clear);
        }
    }

    /// Cells of one category column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter_map(move |e| e.cells.get(col).map(String::as_str))
    }

    /// Sum each category column
    pub fn category_totals(&self) -> CategoryTotals {
        CategoryTotals(
            self.categories
                .iter()
                .enumerate()
                .map(|(col, name)| (name.clone(), column_total(self.column(col))))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        ["Makan", "Bensin", "Parkir"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = DailyLedger::new(Period::default(), categories());
        assert_eq!(ledger.entries().len(), 30);
        assert!(ledger.entries().iter().all(DailyEntry::is_empty));
        assert_eq!(ledger.category_totals().grand_total(), Amount::zero());
        assert_eq!(ledger.category_totals().get("Makan"), Some(Amount::zero()));
    }

    #[test]
    fn test_single_entry_total() {
        let mut ledger = DailyLedger::new(Period::default(), categories());
        ledger.set_cell(day(3), "Makan", "Rp50.000").unwrap();

        let totals = ledger.category_totals();
        assert_eq!(totals.get("Makan"), Some(Amount::new(50_000)));
        assert_eq!(totals.get("Bensin"), Some(Amount::zero()));
        assert_eq!(totals.get("Unknown"), None);
    }

    #[test]
    fn test_totals_follow_edits() {
        let mut ledger = DailyLedger::new(Period::default(), categories());
        ledger.set_cell(day(1), "Bensin", "Rp20.000").unwrap();
        ledger.set_cell(day(2), "Bensin", "Rp30,000").unwrap();
        ledger.set_cell(day(3), "Bensin", "oops").unwrap();
        assert_eq!(ledger.category_totals().get("Bensin"), Some(Amount::new(50_000)));

        ledger.set_cell(day(1), "Bensin", "").unwrap();
        assert_eq!(ledger.category_totals().get("Bensin"), Some(Amount::new(30_000)));
    }

    #[test]
    fn test_set_cell_unknown_targets() {
        let mut ledger = DailyLedger::new(Period::default(), categories());
        let err = ledger.set_cell(day(1), "Kopi", "Rp1").unwrap_err();
        assert!(err.is_not_found());

        let july = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert!(ledger.set_cell(july, "Makan", "Rp1").is_err());
        assert!(ledger.set_cell_at(30, 0, "Rp1").is_err());
        assert!(ledger.set_cell_at(0, 3, "Rp1").is_err());
    }

    #[test]
    fn test_reset() {
        let mut ledger = DailyLedger::new(Period::default(), categories());
        ledger.set_cell_at(4, 2, "Rp2.000").unwrap();
        assert_eq!(ledger.cell(day(5), "Parkir"), Some("Rp2.000"));

        ledger.reset();
        assert_eq!(ledger.cell_at(4, 2), Some(""));
        assert_eq!(ledger.category_totals().grand_total(), Amount::zero());
    }
}
