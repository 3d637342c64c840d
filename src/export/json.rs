//! JSON export of a dashboard snapshot
//!
//! Used by `rekap show --format json`. Amounts are plain integers; the
//! formatted strings are included next to them for convenience.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{RekapError, RekapResult};
use crate::models::{format_amount, format_date, Amount, SummaryRow, Totals};
use crate::services::DashboardSnapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One category total
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotalExport {
    pub category: String,
    pub total: Amount,
    pub formatted: String,
}

/// One day of the daily ledger, only days with at least one cell filled
#[derive(Debug, Clone, Serialize)]
pub struct DailyRowExport {
    pub date: String,
    pub cells: Vec<(String, String)>,
}

/// Totals with their formatted display strings
#[derive(Debug, Clone, Serialize)]
pub struct TotalsExport {
    #[serde(flatten)]
    pub amounts: Totals,
    pub income_formatted: String,
    pub expense_formatted: String,
    pub breakdown_formatted: String,
    pub balance_formatted: String,
}

/// Snapshot export structure
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    /// Export timestamp
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    /// Period in YYYY-MM form
    pub period: String,
    pub selected_date: String,
    pub daily: Vec<DailyRowExport>,
    pub category_totals: Vec<CategoryTotalExport>,
    pub summary: Vec<SummaryRow>,
    pub totals: TotalsExport,
}

impl SnapshotExport {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let categories = snapshot.daily.categories();
        let daily = snapshot
            .daily
            .entries()
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| DailyRowExport {
                date: format_date(e.date),
                cells: categories
                    .iter()
                    .zip(&e.cells)
                    .filter(|(_, cell)| !cell.trim().is_empty())
                    .map(|(category, cell)| (category.clone(), cell.clone()))
                    .collect(),
            })
            .collect();

        let category_totals = snapshot
            .category_totals
            .iter()
            .map(|(category, total)| CategoryTotalExport {
                category: category.to_string(),
                total,
                formatted: format_amount(total),
            })
            .collect();

        let totals = snapshot.totals;
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            period: snapshot.period.to_string(),
            selected_date: format_date(snapshot.selected_date),
            daily,
            category_totals,
            summary: snapshot.summary.rows().to_vec(),
            totals: TotalsExport {
                amounts: totals,
                income_formatted: format_amount(totals.income),
                expense_formatted: format_amount(totals.expense),
                breakdown_formatted: format_amount(totals.breakdown),
                balance_formatted: format_amount(totals.balance),
            },
        }
    }
}

/// Write a snapshot as JSON
pub fn write_snapshot_json<W: Write>(
    snapshot: &DashboardSnapshot,
    writer: &mut W,
    pretty: bool,
) -> RekapResult<()> {
    let export = SnapshotExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(|e| RekapError::Export(e.to_string()))?;

    Ok(())
}
