//! Monthly reporting period
//!
//! The dashboard covers exactly one calendar month. The daily ledger has
//! one row per day of that month and exported file names carry the month
//! name in Indonesian.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RekapError;

/// Date format used in the daily ledger and its CSV export
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// A calendar month (e.g., "2025-06")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Default for Period {
    fn default() -> Self {
        Self { year: 2025, month: 6 }
    }
}

impl Period {
    /// Create a period, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, RekapError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(RekapError::Validation(format!(
                "Invalid period: {}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        // Validated in `new`
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.map(|d| d - Duration::days(1)).unwrap_or_default()
    }

    /// Every day of the month, in order
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start_date()
            .iter_days()
            .take_while(|d| *d <= self.end_date())
            .collect()
    }

    /// Indonesian month name ("Juni")
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Human-readable label ("Juni 2025")
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = RekapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RekapError::Validation(format!("Invalid period '{}', expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = RekapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// Format a date as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `dd/mm/yyyy` date
pub fn parse_date(s: &str) -> Result<NaiveDate, RekapError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| RekapError::Validation(format!("Invalid date '{}', expected dd/mm/yyyy", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_june_2025() {
        let period = Period::default();
        assert_eq!(period.to_string(), "2025-06");
        assert_eq!(period.label(), "Juni 2025");
    }

    #[test]
    fn test_days() {
        let days = Period::default().days();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(days[29], NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());

        let feb = Period::new(2024, 2).unwrap();
        assert_eq!(feb.days().len(), 29);
        let dec = Period::new(2025, 12).unwrap();
        assert_eq!(dec.end_date(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_period() {
        let period: Period = "2025-01".parse().unwrap();
        assert_eq!(period.month_name(), "Januari");
        assert!("2025-13".parse::<Period>().is_err());
        assert!("juni".parse::<Period>().is_err());
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(format_date(date), "05/06/2025");
        assert_eq!(parse_date("05/06/2025").unwrap(), date);
        assert!(parse_date("2025-06-05").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Period::default()).unwrap();
        assert_eq!(json, "\"2025-06\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Period::default());
    }
}
