//! Shared formatting helpers for terminal output

use crate::models::{format_amount, Amount};

/// Format an amount with color hints for terminal display
pub fn format_amount_colored(amount: Amount) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", format_amount(amount)) // Red for negative
    } else if amount.is_zero() {
        format_amount(amount)
    } else {
        format!("\x1b[32m{}\x1b[0m", format_amount(amount)) // Green for positive
    }
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Rekap", 11), "   Rekap");
        assert_eq!(format_header("Rekap Keuangan", 4), "Rekap Keuangan");
    }

    #[test]
    fn test_colored_amounts() {
        assert_eq!(format_amount_colored(Amount::zero()), "Rp0");
        assert_eq!(
            format_amount_colored(Amount::new(1_000)),
            "\x1b[32mRp1.000\x1b[0m"
        );
    }
}
