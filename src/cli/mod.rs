//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the dashboard service.

pub mod amount;
pub mod daily;
pub mod export;
pub mod show;
pub mod summary;

pub use amount::{handle_amount_command, AmountCommands};
pub use daily::{handle_daily_command, DailyCommands};
pub use export::{handle_export_command, ExportCommands};
pub use show::{handle_show_command, ShowFormat};
pub use summary::{handle_summary_command, SummaryCommands};

use std::path::{Path, PathBuf};

use crate::config::{LedgerSeed, Settings};
use crate::error::{RekapError, RekapResult};
use crate::services::Dashboard;

/// What every one-shot command needs: settings, seed and the export directory
#[derive(Debug, Clone)]
pub struct CliContext {
    pub settings: Settings,
    pub seed: LedgerSeed,
    pub output_dir: PathBuf,
}

impl CliContext {
    pub fn new(settings: Settings, seed: LedgerSeed, output_dir: Option<PathBuf>) -> Self {
        let output_dir = output_dir.unwrap_or_else(|| settings.output_dir.clone());
        Self {
            settings,
            seed,
            output_dir,
        }
    }

    /// Make sure the output directory exists before a save
    pub fn ensure_output_dir(&self) -> RekapResult<&Path> {
        ensure_dir(&self.output_dir)?;
        Ok(&self.output_dir)
    }

    /// Seeded dashboard, continued from any CSVs already in the output directory
    pub fn load_dashboard(&self) -> RekapResult<Dashboard> {
        Dashboard::load(self.seed.clone(), self.settings.period, &self.output_dir)
    }
}

/// Create `dir` and its parents if missing
pub(crate) fn ensure_dir(dir: &Path) -> RekapResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        RekapError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
    })
}
