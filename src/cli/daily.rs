//! Daily ledger CLI commands
//!
//! Each edit loads the daily CSV from the output directory (or starts from
//! an empty grid), applies the change and rewrites the file.

use clap::Subcommand;

use crate::display::{format_category_totals, format_daily_table};
use crate::error::RekapResult;
use crate::models::{format_amount, parse_date, parse_text};

use super::CliContext;

/// Daily ledger subcommands
#[derive(Subcommand, Debug)]
pub enum DailyCommands {
    /// Show the daily grid and category totals
    Show {
        /// Include days without any expense
        #[arg(short, long)]
        all: bool,
    },

    /// Set one cell of the daily grid and save the daily CSV
    Set {
        /// Day (dd/mm/yyyy)
        date: String,
        /// Category column (e.g., Makan)
        category: String,
        /// Cell text (e.g., Rp50.000); an empty string clears the cell
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Blank every cell and save the daily CSV
    Clear,

    /// Show per-category totals only
    Totals,
}

/// Handle daily ledger commands
pub fn handle_daily_command(ctx: &CliContext, cmd: DailyCommands) -> RekapResult<()> {
    let mut dashboard = ctx.load_dashboard()?;

    match cmd {
        DailyCommands::Show { all } => {
            let snapshot = dashboard.snapshot();
            println!(
                "{}",
                format_daily_table(&snapshot.daily, snapshot.selected_date, all)
            );
            println!();
            println!("{}", format_category_totals(&snapshot.category_totals));
        }
        DailyCommands::Set {
            date,
            category,
            value,
        } => {
            let date = parse_date(&date)?;
            dashboard.edit_daily(date, &category, value.as_str())?;
            let path = dashboard.save_daily(ctx.ensure_output_dir()?)?;

            if !value.trim().is_empty() && parse_text(&value).is_zero() {
                println!("Note: '{}' does not parse as an amount and counts as Rp0.", value);
            }
            let total = dashboard
                .snapshot()
                .category_totals
                .get(&category)
                .unwrap_or_default();
            println!("Saved {} ({} total: {})", path.display(), category, format_amount(total));
        }
        DailyCommands::Clear => {
            dashboard.clear_daily();
            let path = dashboard.save_daily(ctx.ensure_output_dir()?)?;
            println!("Cleared daily ledger: {}", path.display());
        }
        DailyCommands::Totals => {
            println!("{}", format_category_totals(&dashboard.snapshot().category_totals));
        }
    }

    Ok(())
}
