//! Core data models for Rekap
//!
//! The dashboard has two ledgers: the daily expense grid and the monthly
//! income/expense recap. Both store amounts as currency text and are
//! summed through the parser in [`money`].

pub mod daily;
pub mod money;
pub mod period;
pub mod summary;

pub use daily::{CategoryTotals, DailyEntry, DailyLedger};
pub use money::{format_amount, parse_amount, parse_text, Amount, CellValue, Currency};
pub use period::{format_date, parse_date, Period};
pub use summary::{SummaryField, SummaryLedger, SummaryRow, Totals};
