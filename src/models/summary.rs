//! Income/expense recap ledger
//!
//! A short fixed list of rows. Each row pairs an income source, an expense
//! source and a cost-breakdown category. The breakdown nominal is derived
//! from the daily ledger's category totals and is never edited directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::daily::CategoryTotals;
use super::money::{format_amount, Amount};
use crate::config::seed::SummaryRowSeed;
use crate::error::{RekapError, RekapResult};
use crate::services::aggregate::column_total;

/// One row of the recap
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryRow {
    /// 1-based row number ("NO")
    pub number: u32,
    /// Income source ("Pemasukan")
    pub income_label: String,
    /// Income amount as currency text ("Jumlah Pemasukan")
    pub income_amount: String,
    /// Expense source ("Pengeluaran")
    pub expense_label: String,
    /// Expense amount as currency text ("Jumlah Pengeluaran")
    pub expense_amount: String,
    /// Daily-ledger category this row breaks down ("Rincian Biaya")
    pub breakdown_label: String,
    /// Derived total for `breakdown_label` ("Nominal")
    pub nominal: String,
}

/// Columns of a summary row that accept user edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    IncomeLabel,
    IncomeAmount,
    ExpenseLabel,
    ExpenseAmount,
    BreakdownLabel,
}

impl SummaryField {
    /// All editable fields, in column order
    pub const ALL: [SummaryField; 5] = [
        SummaryField::IncomeLabel,
        SummaryField::IncomeAmount,
        SummaryField::ExpenseLabel,
        SummaryField::ExpenseAmount,
        SummaryField::BreakdownLabel,
    ];

    /// Column header used in the grid and CSV export
    pub fn header(&self) -> &'static str {
        match self {
            Self::IncomeLabel => "Pemasukan",
            Self::IncomeAmount => "Jumlah Pemasukan",
            Self::ExpenseLabel => "Pengeluaran",
            Self::ExpenseAmount => "Jumlah Pengeluaran",
            Self::BreakdownLabel => "Rincian Biaya",
        }
    }
}

impl fmt::Display for SummaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for SummaryField {
    type Err = RekapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "income-label" | "pemasukan" => Ok(Self::IncomeLabel),
            "income-amount" | "income" | "jumlah-pemasukan" => Ok(Self::IncomeAmount),
            "expense-label" | "pengeluaran" => Ok(Self::ExpenseLabel),
            "expense-amount" | "expense" | "jumlah-pengeluaran" => Ok(Self::ExpenseAmount),
            "breakdown-label" | "breakdown" | "rincian-biaya" => Ok(Self::BreakdownLabel),
            "nominal" => Err(RekapError::Validation(
                "Nominal is derived from the daily ledger and cannot be edited".into(),
            )),
            _ => Err(RekapError::Validation(format!("Unknown summary field: {}", s))),
        }
    }
}

impl SummaryRow {
    pub fn field(&self, field: SummaryField) -> &str {
        match field {
            SummaryField::IncomeLabel => &self.income_label,
            SummaryField::IncomeAmount => &self.income_amount,
            SummaryField::ExpenseLabel => &self.expense_label,
            SummaryField::ExpenseAmount => &self.expense_amount,
            SummaryField::BreakdownLabel => &self.breakdown_label,
        }
    }

    fn field_mut(&mut self, field: SummaryField) -> &mut String {
        match field {
            SummaryField::IncomeLabel => &mut self.income_label,
            SummaryField::IncomeAmount => &mut self.income_amount,
            SummaryField::ExpenseLabel => &mut self.expense_label,
            SummaryField::ExpenseAmount => &mut self.expense_amount,
            SummaryField::BreakdownLabel => &mut self.breakdown_label,
        }
    }
}

/// Derived totals of the recap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of "Jumlah Pemasukan"
    pub income: Amount,
    /// Sum of "Jumlah Pengeluaran"
    pub expense: Amount,
    /// Sum of "Nominal"
    pub breakdown: Amount,
    /// income - (expense + breakdown); may be negative
    pub balance: Amount,
}

impl Totals {
    pub fn new(income: Amount, expense: Amount, breakdown: Amount) -> Self {
        Self {
            income,
            expense,
            breakdown,
            balance: income - (expense + breakdown),
        }
    }
}

/// The editable recap grid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryLedger {
    rows: Vec<SummaryRow>,
}

impl SummaryLedger {
    /// Build the ledger from seed rows, numbering them from 1
    pub fn from_seed(seed: &[SummaryRowSeed]) -> Self {
        let rows = seed
            .iter()
            .enumerate()
            .map(|(i, s)| SummaryRow {
                number: i as u32 + 1,
                income_label: s.income_label.clone(),
                income_amount: s.income_amount.clone(),
                expense_label: s.expense_label.clone(),
                expense_amount: s.expense_amount.clone(),
                breakdown_label: s.breakdown_label.clone(),
                nominal: String::new(),
            })
            .collect();
        Self { rows }
    }

    /// Build the ledger from already materialized rows
    pub fn from_rows(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn row(&self, number: u32) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.number == number)
    }

    /// Edit one field of the row with the given number
    pub fn set_field(
        &mut self,
        number: u32,
        field: SummaryField,
        value: impl Into<String>,
    ) -> RekapResult<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.number == number)
            .ok_or_else(|| RekapError::row_not_found(number.to_string()))?;
        *row.field_mut(field) = value.into();
        Ok(())
    }

    /// Edit one field of the row at a grid position
    ///
    /// Imported recaps may repeat or reorder `NO`, so grid edits go by
    /// position rather than by number.
    pub fn set_field_at(
        &mut self,
        index: usize,
        field: SummaryField,
        value: impl Into<String>,
    ) -> RekapResult<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| RekapError::row_not_found((index + 1).to_string()))?;
        *row.field_mut(field) = value.into();
        Ok(())
    }

    /// Recompute every nominal from the daily ledger totals
    ///
    /// Rows whose breakdown label is not a known category get a blank
    /// nominal.
    pub fn refresh_nominals(&mut self, totals: &CategoryTotals) {
        for row in &mut self.rows {
            row.nominal = totals
                .get(&row.breakdown_label)
                .map(format_amount)
                .unwrap_or_default();
        }
    }

    /// Sum the income, expense and nominal columns and derive the balance
    pub fn totals(&self) -> Totals {
        let income = column_total(self.rows.iter().map(|r| r.income_amount.as_str()));
        let expense = column_total(self.rows.iter().map(|r| r.expense_amount.as_str()));
        let breakdown = column_total(self.rows.iter().map(|r| r.nominal.as_str()));
        Totals::new(income, expense, breakdown)
    }
}
