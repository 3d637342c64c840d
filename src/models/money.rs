//! Rupiah amounts and the currency text they are edited as
//!
//! Grid cells hold free text such as `Rp50.000` or `Rp300,000`. This module
//! turns that text into integer [`Amount`]s and back. Parsing never fails:
//! anything that is not a plain digit string after stripping the prefix and
//! group separators counts as zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency prefix used by the dashboard
pub const RUPIAH_PREFIX: &str = "Rp";

/// Digit-group separator used when formatting (Indonesian locale)
pub const RUPIAH_GROUP_SEPARATOR: char = '.';

/// An integer amount of Rupiah
///
/// Rupiah amounts in the dashboard never carry a fractional part, so the
/// value is stored as whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from whole Rupiah
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in whole Rupiah
    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(*self))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

// Arithmetic saturates at the i64 bounds
impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Raw value of a grid cell before coercion to an [`Amount`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value at all (an untouched or null cell)
    #[default]
    Missing,
    /// An integer typed straight into the cell
    Number(i64),
    /// A number with a fractional part, truncated toward zero when coerced
    Decimal(f64),
    /// Free text, usually currency-formatted
    Text(String),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Decimal(n)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Missing)
    }
}

/// Prefix and separator used to render amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub prefix: String,
    pub group_separator: char,
}

impl Default for Currency {
    fn default() -> Self {
        Self::rupiah()
    }
}

impl Currency {
    /// `Rp` prefix with `.` thousands separator
    pub fn rupiah() -> Self {
        Self {
            prefix: RUPIAH_PREFIX.to_string(),
            group_separator: RUPIAH_GROUP_SEPARATOR,
        }
    }

    /// Parse currency text into an amount
    ///
    /// Strips the prefix, both `.` and `,` group separators and surrounding
    /// whitespace. Empty or malformed text yields zero, as does a digit
    /// string too long for `i64`.
    pub fn parse_text(&self, text: &str) -> Amount {
        let trimmed = text.trim();
        let unprefixed = trimmed.strip_prefix(self.prefix.as_str()).unwrap_or(trimmed);
        let digits: String = unprefixed
            .chars()
            .filter(|c| *c != '.' && *c != ',' && *c != self.group_separator)
            .collect();
        let digits = digits.trim();

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Amount::zero();
        }

        digits.parse::<i64>().map(Amount).unwrap_or_default()
    }

    /// Coerce any cell value into an amount
    pub fn parse(&self, value: &CellValue) -> Amount {
        match value {
            CellValue::Missing => Amount::zero(),
            CellValue::Number(n) => Amount(*n),
            CellValue::Decimal(n) if n.is_finite() => Amount(n.trunc() as i64),
            CellValue::Decimal(_) => Amount::zero(),
            CellValue::Text(s) => self.parse_text(s),
        }
    }

    /// Format an amount as `Rp1.234.567`
    ///
    /// Negative amounts get a leading minus before the prefix: `-Rp1.000`.
    pub fn format(&self, amount: Amount) -> String {
        let digits = amount.value().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(c);
        }

        if amount.is_negative() {
            format!("-{}{}", self.prefix, grouped)
        } else {
            format!("{}{}", self.prefix, grouped)
        }
    }
}

/// Parse a cell value with the Rupiah currency
pub fn parse_amount(value: &CellValue) -> Amount {
    Currency::rupiah().parse(value)
}

/// Parse currency text with the Rupiah currency
pub fn parse_text(text: &str) -> Amount {
    Currency::rupiah().parse_text(text)
}

/// Format an amount with the Rupiah currency
pub fn format_amount(amount: Amount) -> String {
    Currency::rupiah().format(amount)
}
