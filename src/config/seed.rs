//! Seed data for the two ledgers
//!
//! The dashboard always starts (and resets) from a seed: the expense
//! categories of the daily grid and the prefilled recap rows. The seed is
//! read from `seed.yaml` in the config directory when present; otherwise
//! the built-in June 2025 recap is used.

use serde::{Deserialize, Serialize};

use super::paths::RekapPaths;
use crate::error::RekapError;

/// Prefilled values for one recap row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRowSeed {
    pub income_label: String,
    pub income_amount: String,
    pub expense_label: String,
    pub expense_amount: String,
    pub breakdown_label: String,
}

impl SummaryRowSeed {
    fn new(
        income_label: &str,
        income_amount: &str,
        expense_label: &str,
        expense_amount: &str,
        breakdown_label: &str,
    ) -> Self {
        Self {
            income_label: income_label.to_string(),
            income_amount: income_amount.to_string(),
            expense_label: expense_label.to_string(),
            expense_amount: expense_amount.to_string(),
            breakdown_label: breakdown_label.to_string(),
        }
    }
}

/// Initial state of both ledgers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSeed {
    /// Expense categories, in daily-grid column order
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Recap rows, numbered from 1 in this order
    #[serde(default = "default_summary_rows")]
    pub summary_rows: Vec<SummaryRowSeed>,
}

fn default_categories() -> Vec<String> {
    ["Makan", "Bensin", "Parkir", "Ongkos", "Shoope", "Pulsa", "Lain-lain"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_summary_rows() -> Vec<SummaryRowSeed> {
    vec![
        SummaryRowSeed::new("KIP-K", "", "", "", "Makan"),
        SummaryRowSeed::new("IBU", "", "ANDRIAN", "", "Shoope"),
        SummaryRowSeed::new("BAPAK", "", "SELVI", "Rp1,000,000", "Bensin"),
        SummaryRowSeed::new("MIRANTI", "", "MIRANTI", "Rp400,000", "Parkir"),
        SummaryRowSeed::new("AYAH", "", "AYAH", "", "Ongkos"),
        SummaryRowSeed::new("BRI", "Rp300,000", "SAKIT", "", "Pulsa"),
        SummaryRowSeed::new("CASH", "Rp3,400,000", "", "", "Lain-lain"),
        SummaryRowSeed::default(),
        SummaryRowSeed::default(),
        SummaryRowSeed::default(),
    ]
}

impl Default for LedgerSeed {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            summary_rows: default_summary_rows(),
        }
    }
}

impl LedgerSeed {
    /// Load `seed.yaml`, or the built-in seed if the file doesn't exist
    pub fn load_or_default(paths: &RekapPaths) -> Result<Self, RekapError> {
        let seed_path = paths.seed_file();

        if !seed_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&seed_path)
            .map_err(|e| RekapError::Io(format!("Failed to read seed file: {}", e)))?;
        let seed = Self::from_yaml(&contents)?;
        log::info!(
            "Loaded seed from {} ({} categories, {} recap rows)",
            seed_path.display(),
            seed.categories.len(),
            seed.summary_rows.len()
        );
        Ok(seed)
    }

    /// Parse and validate a YAML seed
    pub fn from_yaml(contents: &str) -> Result<Self, RekapError> {
        let seed: LedgerSeed = serde_yaml::from_str(contents)
            .map_err(|e| RekapError::Config(format!("Failed to parse seed file: {}", e)))?;
        seed.validate()?;
        Ok(seed)
    }

    /// Write the seed as YAML
    pub fn save(&self, paths: &RekapPaths) -> Result<(), RekapError> {
        paths.ensure_directories()?;
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(paths.seed_file(), contents)
            .map_err(|e| RekapError::Io(format!("Failed to write seed file: {}", e)))?;
        Ok(())
    }

    /// Categories must be non-empty, unique and not collide with the date column
    pub fn validate(&self) -> Result<(), RekapError> {
        if self.categories.is_empty() {
            return Err(RekapError::Validation(
                "Seed must define at least one category".into(),
            ));
        }

        for (i, category) in self.categories.iter().enumerate() {
            if category.trim().is_empty() || category == "Date" {
                return Err(RekapError::Validation(format!(
                    "Invalid category name: '{}'",
                    category
                )));
            }
            if self.categories[..i].contains(category) {
                return Err(RekapError::Validation(format!(
                    "Duplicate category: {}",
                    category
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_seed() {
        let seed = LedgerSeed::default();
        assert_eq!(seed.categories.len(), 7);
        assert_eq!(seed.categories[0], "Makan");
        assert_eq!(seed.summary_rows.len(), 10);
        assert_eq!(seed.summary_rows[6].income_amount, "Rp3,400,000");
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RekapPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(LedgerSeed::load_or_default(&paths).unwrap(), LedgerSeed::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RekapPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut seed = LedgerSeed::default();
        seed.categories.push("Kopi".into());
        seed.save(&paths).unwrap();

        let loaded = LedgerSeed::load_or_default(&paths).unwrap();
        assert_eq!(loaded, seed);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "categories: [Makan, Kos]\nsummary_rows:\n  - income_label: GAJI\n    income_amount: Rp5.000.000\n";
        let seed = LedgerSeed::from_yaml(yaml).unwrap();
        assert_eq!(seed.categories, vec!["Makan", "Kos"]);
        assert_eq!(seed.summary_rows.len(), 1);
        assert_eq!(seed.summary_rows[0].breakdown_label, "");
    }

    #[test]
    fn test_validation() {
        assert!(LedgerSeed::from_yaml("categories: []").is_err());
        assert!(LedgerSeed::from_yaml("categories: [Makan, Makan]").is_err());
        assert!(LedgerSeed::from_yaml("categories: [Date]").is_err());
    }
}
