//! Amount CLI commands
//!
//! Exposes the currency parser and formatter for quick checks from a shell.

use clap::Subcommand;

use crate::error::RekapResult;
use crate::models::{format_amount, parse_text, Amount};

/// Amount subcommands
#[derive(Subcommand, Debug)]
pub enum AmountCommands {
    /// Parse currency text (e.g., "Rp1.000.000") into a plain integer
    Parse {
        /// Currency text; malformed input parses as 0
        text: String,
    },

    /// Format a plain integer as Rupiah (e.g., 1000000 -> Rp1.000.000)
    Format {
        /// Amount in whole Rupiah
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
}

/// Handle amount commands
pub fn handle_amount_command(cmd: AmountCommands) -> RekapResult<()> {
    match cmd {
        AmountCommands::Parse { text } => {
            println!("{}", parse_text(&text).value());
        }
        AmountCommands::Format { value } => {
            println!("{}", format_amount(Amount::new(value)));
        }
    }
    Ok(())
}
