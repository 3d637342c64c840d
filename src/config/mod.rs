//! Configuration module for Rekap
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The seed data both ledgers start from

pub mod paths;
pub mod seed;
pub mod settings;

pub use paths::RekapPaths;
pub use seed::{LedgerSeed, SummaryRowSeed};
pub use settings::Settings;
