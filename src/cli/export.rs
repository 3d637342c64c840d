//! CLI commands for data export
//!
//! Rewrites the CSV files from the current state. Useful to materialize
//! the seed (including derived nominals) or to copy both files elsewhere.

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{RekapError, RekapResult};
use crate::export::write_snapshot_json;
use crate::services::Dashboard;

use super::{ensure_dir, CliContext};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write pengeluaran_harian.csv
    Daily {
        /// Target directory (defaults to the output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write rekap_keuangan_<bulan>.csv
    Summary {
        /// Target directory (defaults to the output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write both CSV files
    All {
        /// Target directory (defaults to the output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Write a JSON snapshot of the dashboard
    Json {
        /// Output file path
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(ctx: &CliContext, cmd: ExportCommands) -> RekapResult<()> {
    let mut dashboard = ctx.load_dashboard()?;

    match cmd {
        ExportCommands::Daily { output } => {
            export_daily(&dashboard, &target_dir(ctx, output)?)?;
        }
        ExportCommands::Summary { output } => {
            export_summary(&mut dashboard, &target_dir(ctx, output)?)?;
        }
        ExportCommands::All { output } => {
            let dir = target_dir(ctx, output)?;
            export_daily(&dashboard, &dir)?;
            export_summary(&mut dashboard, &dir)?;
        }
        ExportCommands::Json { output, pretty } => {
            let file = File::create(&output).map_err(|e| {
                RekapError::Export(format!("Failed to create file {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_snapshot_json(&dashboard.snapshot(), &mut writer, pretty)?;
            println!("Dashboard snapshot exported to: {}", output.display());
        }
    }

    Ok(())
}

fn target_dir(ctx: &CliContext, output: Option<PathBuf>) -> RekapResult<PathBuf> {
    let dir = output.unwrap_or_else(|| ctx.output_dir.clone());
    ensure_dir(&dir)?;
    Ok(dir)
}

fn export_daily(dashboard: &Dashboard, dir: &Path) -> RekapResult<()> {
    let path = dashboard.save_daily(dir)?;
    println!("Daily ledger exported to: {}", path.display());
    Ok(())
}

fn export_summary(dashboard: &mut Dashboard, dir: &Path) -> RekapResult<()> {
    let path = dashboard.save_summary(dir)?;
    println!("Recap exported to: {}", path.display());
    Ok(())
}
