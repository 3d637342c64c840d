//! Recap display formatting

use tabled::builder::Builder;
use tabled::settings::Style;

use super::report::{double_separator, format_amount_colored, separator};
use crate::export::csv::SUMMARY_HEADERS;
use crate::models::{format_amount, SummaryLedger, Totals};

/// Format the recap grid with its current nominals
pub fn format_summary_table(ledger: &SummaryLedger) -> String {
    if ledger.rows().is_empty() {
        return "No recap rows.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(SUMMARY_HEADERS.map(String::from));

    for row in ledger.rows() {
        builder.push_record([
            row.number.to_string(),
            row.income_label.clone(),
            row.income_amount.clone(),
            row.expense_label.clone(),
            row.expense_amount.clone(),
            row.breakdown_label.clone(),
            row.nominal.clone(),
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}

/// Format the totals block and the current balance
pub fn format_totals(totals: &Totals, colored: bool) -> String {
    let width = 40;
    let balance = if colored {
        format_amount_colored(totals.balance)
    } else {
        format_amount(totals.balance)
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", separator(width)));
    output.push_str(&format!("{:<24}{:>16}\n", "Total Pemasukan", format_amount(totals.income)));
    output.push_str(&format!("{:<24}{:>16}\n", "Total Pengeluaran", format_amount(totals.expense)));
    output.push_str(&format!("{:<24}{:>16}\n", "Total Rincian Biaya", format_amount(totals.breakdown)));
    output.push_str(&format!("{}\n", double_separator(width)));
    output.push_str(&format!("{:<24}{:>16}\n", "Saldo Saat Ini", balance));
    output
}
