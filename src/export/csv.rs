//! CSV export and re-import of both ledgers
//!
//! Files are always fully overwritten. The readers accept what the writers
//! produce (and tolerate extra or missing category columns) so one-shot
//! CLI commands can continue from an earlier export.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{RekapError, RekapResult};
use crate::models::{format_date, parse_date, DailyLedger, Period, SummaryLedger, SummaryRow};

/// File name of the daily ledger export
pub const DAILY_FILE_NAME: &str = "pengeluaran_harian.csv";

/// Header of the date column in the daily export
pub const DATE_HEADER: &str = "Date";

/// Header of the recap export
pub const SUMMARY_HEADERS: [&str; 7] = [
    "NO",
    "Pemasukan",
    "Jumlah Pemasukan",
    "Pengeluaran",
    "Jumlah Pengeluaran",
    "Rincian Biaya",
    "Nominal",
];

/// File name of the recap export for a period (`rekap_keuangan_juni.csv`)
pub fn summary_file_name(period: &Period) -> String {
    format!("rekap_keuangan_{}.csv", period.month_name().to_lowercase())
}

/// Write the daily ledger: `Date` then one column per category
pub fn write_daily_csv<W: Write>(ledger: &DailyLedger, writer: W) -> RekapResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![DATE_HEADER];
    header.extend(ledger.categories().iter().map(String::as_str));
    wtr.write_record(&header)?;

    for entry in ledger.entries() {
        let mut record = vec![format_date(entry.date)];
        record.extend(entry.cells.iter().cloned());
        wtr.write_record(&record)?;
    }

    wtr.flush()
        .map_err(|e| RekapError::Export(format!("Failed to flush daily CSV: {}", e)))?;
    Ok(())
}

/// Write the recap with its current nominals
pub fn write_summary_csv<W: Write>(ledger: &SummaryLedger, writer: W) -> RekapResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SUMMARY_HEADERS)?;

    for row in ledger.rows() {
        let number = row.number.to_string();
        wtr.write_record([
            number.as_str(),
            row.income_label.as_str(),
            row.income_amount.as_str(),
            row.expense_label.as_str(),
            row.expense_amount.as_str(),
            row.breakdown_label.as_str(),
            row.nominal.as_str(),
        ])?;
    }

    wtr.flush()
        .map_err(|e| RekapError::Export(format!("Failed to flush recap CSV: {}", e)))?;
    Ok(())
}

/// Overwrite `path` with the daily ledger
pub fn save_daily_csv(ledger: &DailyLedger, path: &Path) -> RekapResult<()> {
    let file = create_file(path)?;
    write_daily_csv(ledger, BufWriter::new(file))
}

/// Overwrite `path` with the recap
pub fn save_summary_csv(ledger: &SummaryLedger, path: &Path) -> RekapResult<()> {
    let file = create_file(path)?;
    write_summary_csv(ledger, BufWriter::new(file))
}

fn create_file(path: &Path) -> RekapResult<File> {
    File::create(path).map_err(|e| {
        RekapError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}

/// Read a daily export into a ledger for `period` with the given categories
///
/// Columns that are not one of `categories` are skipped, as are days
/// outside the period. A date cell that is not `dd/mm/yyyy` is an error.
pub fn read_daily_csv<R: Read>(
    reader: R,
    period: Period,
    categories: Vec<String>,
) -> RekapResult<DailyLedger> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let date_col = headers
        .iter()
        .position(|h| h == DATE_HEADER)
        .ok_or_else(|| RekapError::Import("Daily CSV has no 'Date' column".into()))?;

    let mut ledger = DailyLedger::new(period, categories);
    let columns: Vec<(usize, usize)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != date_col)
        .filter_map(|(i, name)| match ledger.column_of(name) {
            Some(col) => Some((i, col)),
            None => {
                log::warn!("Ignoring unknown category column '{}'", name);
                None
            }
        })
        .collect();

    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let raw_date = record.get(date_col).unwrap_or_default();
        let date = parse_date(raw_date).map_err(|_| {
            RekapError::Import(format!(
                "Row {}: invalid date '{}', expected dd/mm/yyyy",
                line + 1,
                raw_date
            ))
        })?;

        let Some(row) = ledger.row_of(date) else {
            log::warn!("Skipping {} outside period {}", raw_date, period);
            continue;
        };

        for &(field, col) in &columns {
            if let Some(value) = record.get(field) {
                ledger.set_cell_at(row, col, value)?;
            }
        }
    }

    Ok(ledger)
}

/// Read a recap export
///
/// Columns are matched by header name; missing columns read as blank and a
/// missing or unparseable `NO` falls back to the row position.
pub fn read_summary_csv<R: Read>(reader: R) -> RekapResult<SummaryLedger> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let index_of = |name: &str| headers.iter().position(|h| h == name);
    let columns: Vec<Option<usize>> = SUMMARY_HEADERS.iter().map(|h| index_of(*h)).collect();

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let field = |n: usize| -> String {
            columns[n]
                .and_then(|idx| record.get(idx))
                .unwrap_or_default()
                .to_string()
        };

        let number = field(0).trim().parse::<u32>().unwrap_or(i as u32 + 1);
        rows.push(SummaryRow {
            number,
            income_label: field(1),
            income_amount: field(2),
            expense_label: field(3),
            expense_amount: field(4),
            breakdown_label: field(5),
            nominal: field(6),
        });
    }

    Ok(SummaryLedger::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerSeed;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn daily() -> DailyLedger {
        DailyLedger::new(Period::default(), LedgerSeed::default().categories)
    }

    #[test]
    fn test_summary_file_name() {
        assert_eq!(summary_file_name(&Period::default()), "rekap_keuangan_juni.csv");
        let jan = Period::new(2026, 1).unwrap();
        assert_eq!(summary_file_name(&jan), "rekap_keuangan_januari.csv");
    }

    #[test]
    fn test_write_daily_csv() {
        let mut ledger = daily();
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        ledger.set_cell(date, "Makan", "Rp50.000").unwrap();
        ledger.set_cell(date, "Bensin", "Rp20,000").unwrap();

        let mut out = Vec::new();
        write_daily_csv(&ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0], "Date,Makan,Bensin,Parkir,Ongkos,Shoope,Pulsa,Lain-lain");
        assert_eq!(lines[1], "01/06/2025,,,,,,,");
        assert_eq!(lines[2], "02/06/2025,Rp50.000,\"Rp20,000\",,,,,");
        assert_eq!(lines[30], "30/06/2025,,,,,,,");
    }

    #[test]
    fn test_write_summary_csv() {
        let ledger = SummaryLedger::from_seed(&LedgerSeed::default().summary_rows);

        let mut out = Vec::new();
        write_summary_csv(&ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(
            lines[0],
            "NO,Pemasukan,Jumlah Pemasukan,Pengeluaran,Jumlah Pengeluaran,Rincian Biaya,Nominal"
        );
        assert_eq!(lines[3], "3,BAPAK,,SELVI,\"Rp1,000,000\",Bensin,");
        assert_eq!(lines[10], "10,,,,,,");
    }

    #[test]
    fn test_read_daily_ignores_unknown_columns_and_days() {
        let data = "Date,Makan,Kopi\n01/06/2025,Rp10.000,Rp5.000\n01/07/2025,Rp99.000,\n";
        let ledger = read_daily_csv(data.as_bytes(), Period::default(), LedgerSeed::default().categories)
            .unwrap();

        let totals = ledger.category_totals();
        assert_eq!(totals.get("Makan").unwrap().value(), 10_000);
        assert_eq!(totals.grand_total().value(), 10_000);
    }

    #[test]
    fn test_read_daily_rejects_bad_dates() {
        let data = "Date,Makan\n2025-06-01,Rp10.000\n";
        let err = read_daily_csv(data.as_bytes(), Period::default(), vec!["Makan".into()])
            .unwrap_err();
        assert!(matches!(err, RekapError::Import(_)));

        let no_date = "Tanggal,Makan\n01/06/2025,Rp1\n";
        assert!(read_daily_csv(no_date.as_bytes(), Period::default(), vec!["Makan".into()]).is_err());
    }

    #[test]
    fn test_read_summary_missing_columns() {
        let data = "Pemasukan,Jumlah Pemasukan\nGAJI,Rp5.000.000\nBONUS,Rp500.000\n";
        let ledger = read_summary_csv(data.as_bytes()).unwrap();

        assert_eq!(ledger.rows().len(), 2);
        assert_eq!(ledger.rows()[1].number, 2);
        assert_eq!(ledger.rows()[1].income_label, "BONUS");
        assert_eq!(ledger.rows()[1].breakdown_label, "");
        assert_eq!(ledger.totals().income.value(), 5_500_000);
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DAILY_FILE_NAME);
        std::fs::write(&path, "stale content that is much longer than nothing").unwrap();

        let ledger = daily();
        save_daily_csv(&ledger, &path).unwrap();

        let reread = read_daily_csv(
            File::open(&path).unwrap(),
            Period::default(),
            LedgerSeed::default().categories,
        )
        .unwrap();
        assert_eq!(reread, ledger);
    }
}
