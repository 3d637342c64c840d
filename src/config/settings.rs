//! User settings for Rekap
//!
//! Profile shown in the sidebar, the month being tracked and where
//! exports are written.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::RekapPaths;
use crate::error::RekapError;
use crate::models::Period;

/// User settings for Rekap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Name shown in the sidebar profile
    #[serde(default = "default_profile_name")]
    pub profile_name: String,

    /// Month tracked by the dashboard (YYYY-MM)
    #[serde(default)]
    pub period: Period,

    /// Directory the CSV exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_schema_version() -> u32 {
    1
}

fn default_profile_name() -> String {
    "Iqbal".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            profile_name: default_profile_name(),
            period: Period::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &RekapPaths) -> Result<Self, RekapError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| RekapError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RekapError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            log::debug!("Loaded settings from {}", settings_path.display());
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RekapPaths) -> Result<(), RekapError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RekapError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| RekapError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
