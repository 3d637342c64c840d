//! Dashboard overview command

use clap::ValueEnum;
use std::io;

use crate::display::format_dashboard;
use crate::error::RekapResult;
use crate::export::write_snapshot_json;

use super::CliContext;

/// Output format for `show`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ShowFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// JSON snapshot
    Json,
}

/// Print the whole dashboard
pub fn handle_show_command(ctx: &CliContext, all: bool, format: ShowFormat) -> RekapResult<()> {
    let snapshot = ctx.load_dashboard()?.snapshot();

    match format {
        ShowFormat::Text => {
            print!("{}", format_dashboard(&snapshot, &ctx.settings.profile_name, all));
        }
        ShowFormat::Json => {
            let mut stdout = io::stdout().lock();
            write_snapshot_json(&snapshot, &mut stdout, true)?;
        }
    }

    Ok(())
}
