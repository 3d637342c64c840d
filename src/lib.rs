//! Rekap Keuangan - monthly budget dashboard in the terminal
//!
//! Tracks one month of daily expenses per category and a recap of income
//! and expenses, in Indonesian Rupiah. Category totals feed the recap's
//! breakdown column, and the balance is recomputed from the current tables
//! on every read.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and the seed data for both ledgers
//! - `error`: Custom error types
//! - `models`: Amounts, the period, the daily ledger and the recap
//! - `services`: Column aggregation and the dashboard session
//! - `export`: CSV and JSON export
//! - `display`: Plain-text rendering for the CLI
//! - `cli`: One-shot command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use rekap::config::LedgerSeed;
//! use rekap::models::Period;
//! use rekap::services::Dashboard;
//!
//! let mut dashboard = Dashboard::new(LedgerSeed::default(), Period::default());
//! dashboard.edit_daily_at(0, 0, "Rp50.000")?;
//! println!("{}", dashboard.snapshot().totals.balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod tui;

pub use error::RekapError;
