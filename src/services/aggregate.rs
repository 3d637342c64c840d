//! Column aggregation
//!
//! Folds the currency parser over a column of cells. Malformed cells add
//! zero, so a total can never fail.

use crate::models::{Amount, Currency};

/// Sum a column of currency text
pub fn column_total<'a, I>(cells: I) -> Amount
where
    I: IntoIterator<Item = &'a str>,
{
    column_total_with(&Currency::rupiah(), cells)
}

/// Sum a column of currency text with a specific currency
pub fn column_total_with<'a, I>(currency: &Currency, cells: I) -> Amount
where
    I: IntoIterator<Item = &'a str>,
{
    cells.into_iter().map(|cell| currency.parse_text(cell)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_column_is_zero() {
        let cells = vec![""; 30];
        assert_eq!(column_total(cells.iter().copied()), Amount::zero());
        assert_eq!(column_total(std::iter::empty()), Amount::zero());
    }

    #[test]
    fn test_malformed_cells_count_as_zero() {
        let cells = ["Rp10.000", "abc", "", "Rp5,000"];
        assert_eq!(column_total(cells), Amount::new(15_000));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut cells = vec!["Rp1.000", "Rp20.000", "x", "300", "Rp4,000"];
        let forward = column_total(cells.iter().copied());
        cells.reverse();
        assert_eq!(column_total(cells.iter().copied()), forward);
        cells.swap(0, 3);
        assert_eq!(column_total(cells.iter().copied()), forward);
        assert_eq!(forward, Amount::new(25_300));
    }
}
