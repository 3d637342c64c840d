//! Daily ledger display formatting
//!
//! Renders the daily grid and the per-category total cards.

use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::export::csv::DATE_HEADER;
use crate::models::{format_amount, format_date, CategoryTotals, DailyLedger};

/// Cards per row when showing category totals (3, then 3, then the rest)
const CARD_ROWS: [usize; 2] = [3, 3];

/// Icon shown next to a category total
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Makan" => "🍽️",
        "Bensin" => "⛽",
        "Shoope" => "📦",
        "Ongkos" => "🚌",
        "Parkir" => "🅿️",
        "Pulsa" => "📱",
        "Lain-lain" => "🧾",
        _ => "💼",
    }
}

/// Format the daily grid
///
/// Only days with at least one filled cell are listed unless `show_all` is
/// set. The selected date is marked with `▶`.
pub fn format_daily_table(ledger: &DailyLedger, selected: NaiveDate, show_all: bool) -> String {
    let rows: Vec<_> = ledger
        .entries()
        .iter()
        .filter(|e| show_all || !e.is_empty() || e.date == selected)
        .collect();

    if rows.is_empty() {
        return "No daily expenses recorded.".to_string();
    }

    let mut builder = Builder::default();
    let mut header = vec![String::new(), DATE_HEADER.to_string()];
    header.extend(ledger.categories().iter().cloned());
    builder.push_record(header);

    for entry in rows {
        let marker = if entry.date == selected { "▶" } else { "" };
        let mut record = vec![marker.to_string(), format_date(entry.date)];
        record.extend(entry.cells.iter().cloned());
        builder.push_record(record);
    }

    builder.build().with(Style::rounded()).to_string()
}

/// Format category totals as cards in rows of 3, 3 and the remainder
pub fn format_category_totals(totals: &CategoryTotals) -> String {
    if totals.is_empty() {
        return "No categories configured.".to_string();
    }

    let cards: Vec<String> = totals
        .iter()
        .map(|(category, total)| {
            format!("{} {}\n{}", category_icon(category), category, format_amount(total))
        })
        .collect();

    let width = CARD_ROWS[0];
    let mut builder = Builder::default();
    let mut rest = cards.as_slice();
    for size in CARD_ROWS.iter().copied().chain(std::iter::once(usize::MAX)) {
        if rest.is_empty() {
            break;
        }
        let take = size.min(rest.len());
        let (row, tail) = rest.split_at(take);
        let mut record: Vec<String> = row.to_vec();
        record.resize(width.max(record.len()), String::new());
        builder.push_record(record);
        rest = tail;
    }

    builder.build().with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerSeed;
    use crate::models::Period;

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_daily_table_shows_filled_and_selected_rows() {
        let mut ledger = DailyLedger::new(Period::default(), LedgerSeed::default().categories);
        ledger.set_cell(june(12), "Pulsa", "Rp25.000").unwrap();

        let output = format_daily_table(&ledger, june(1), false);
        assert!(output.contains("12/06/2025"));
        assert!(output.contains("Rp25.000"));
        assert!(output.contains("01/06/2025"));
        assert!(!output.contains("02/06/2025"));

        let all = format_daily_table(&ledger, june(1), true);
        assert!(all.contains("30/06/2025"));
    }

    #[test]
    fn test_category_cards() {
        let mut ledger = DailyLedger::new(Period::default(), LedgerSeed::default().categories);
        ledger.set_cell(june(1), "Makan", "Rp50.000").unwrap();

        let output = format_category_totals(&ledger.category_totals());
        assert!(output.contains("Makan"));
        assert!(output.contains("Rp50.000"));
        assert!(output.contains("Lain-lain"));
        assert!(output.contains("Rp0"));
    }

    #[test]
    fn test_unknown_category_icon() {
        assert_eq!(category_icon("Kopi"), "💼");
        assert_eq!(category_icon("Bensin"), "⛽");
    }
}
