//! Display formatting for terminal output
//!
//! Plain-text rendering of the dashboard for the one-shot CLI commands.
//! The interactive dashboard lives in `tui`.

pub mod daily;
pub mod report;
pub mod summary;

pub use daily::{category_icon, format_category_totals, format_daily_table};
pub use summary::{format_summary_table, format_totals};

use crate::services::DashboardSnapshot;

/// Format the whole dashboard, top to bottom like the interactive view
pub fn format_dashboard(snapshot: &DashboardSnapshot, profile: &str, show_all: bool) -> String {
    let width = 60;
    let mut output = String::new();

    output.push_str(&report::format_header(
        &format!("Dashboard Keuangan Periode {}", snapshot.period.label()),
        width,
    ));
    output.push('\n');
    output.push_str(&format!(
        "Nama: {}  |  Tanggal dipilih: {}\n\n",
        profile,
        crate::models::format_date(snapshot.selected_date)
    ));

    output.push_str("Tabel Pengeluaran Harian\n");
    output.push_str(&format_daily_table(&snapshot.daily, snapshot.selected_date, show_all));
    output.push_str("\n\nTotal Pengeluaran per Kategori\n");
    output.push_str(&format_category_totals(&snapshot.category_totals));
    output.push_str(&format!("\n\nRekap Keuangan - Periode {}\n", snapshot.period.label()));
    output.push_str(&format_summary_table(&snapshot.summary));
    output.push_str("\n\n");
    output.push_str(&format_totals(&snapshot.totals, false));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerSeed;
    use crate::models::Period;
    use crate::services::Dashboard;

    #[test]
    fn test_format_dashboard() {
        let dashboard = Dashboard::new(LedgerSeed::default(), Period::default());
        let output = format_dashboard(&dashboard.snapshot(), "Iqbal", false);

        assert!(output.contains("Juni 2025"));
        assert!(output.contains("Nama: Iqbal"));
        assert!(output.contains("Tanggal dipilih: 01/06/2025"));
        assert!(output.contains("Saldo Saat Ini"));
        assert!(output.contains("Rp2.300.000"));
    }
}
