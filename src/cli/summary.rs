//! Recap CLI commands

use clap::Subcommand;

use crate::display::{format_summary_table, format_totals};
use crate::error::RekapResult;
use crate::models::SummaryField;

use super::CliContext;

/// Recap subcommands
#[derive(Subcommand, Debug)]
pub enum SummaryCommands {
    /// Show the recap with nominals refreshed from the daily ledger
    Show,

    /// Set one field of a recap row and save the recap CSV
    Set {
        /// Row number (NO column, starting at 1)
        row: u32,
        /// Field: income-label, income, expense-label, expense or breakdown
        field: SummaryField,
        /// New text (e.g., Rp300.000)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Handle recap commands
pub fn handle_summary_command(ctx: &CliContext, cmd: SummaryCommands) -> RekapResult<()> {
    let mut dashboard = ctx.load_dashboard()?;

    match cmd {
        SummaryCommands::Show => {
            let snapshot = dashboard.snapshot();
            println!("{}", format_summary_table(&snapshot.summary));
            println!();
            print!("{}", format_totals(&snapshot.totals, true));
        }
        SummaryCommands::Set { row, field, value } => {
            dashboard.edit_summary(row, field, value)?;
            let path = dashboard.save_summary(ctx.ensure_output_dir()?)?;
            println!("Saved {} (row {}, {})", path.display(), row, field);
            println!();
            print!("{}", format_totals(&dashboard.snapshot().totals, true));
        }
    }

    Ok(())
}
