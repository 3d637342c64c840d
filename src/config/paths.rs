//! Path management for Rekap
//!
//! ## Path Resolution Order
//!
//! 1. `REKAP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rekap` or `~/.config/rekap`
//! 3. Windows: `%APPDATA%\rekap`
//!
//! Exported CSV files do not live here; they go to the output directory
//! from [`Settings`](super::Settings), the working directory by default.

use std::path::PathBuf;

use crate::error::RekapError;

/// Manages all paths used by Rekap
#[derive(Debug, Clone)]
pub struct RekapPaths {
    base_dir: PathBuf,
}

impl RekapPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, RekapError> {
        let base_dir = if let Ok(custom) = std::env::var("REKAP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RekapPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger seed file
    pub fn seed_file(&self) -> PathBuf {
        self.base_dir.join("seed.yaml")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("rekap.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RekapError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RekapError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Rekap has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RekapError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                RekapError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("rekap"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RekapError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RekapError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rekap"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RekapPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.seed_file(), temp_dir.path().join("seed.yaml"));
        assert_eq!(paths.log_file(), temp_dir.path().join("rekap.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RekapPaths::with_base_dir(temp_dir.path().join("nested").join("rekap"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
