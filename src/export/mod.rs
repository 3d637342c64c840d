//! Export module for Rekap
//!
//! - CSV: the two ledger files, overwritten on every save
//! - JSON: a machine-readable dump of one dashboard snapshot

pub mod csv;
pub mod json;

pub use self::csv::{
    read_daily_csv, read_summary_csv, save_daily_csv, save_summary_csv, summary_file_name,
    write_daily_csv, write_summary_csv, DAILY_FILE_NAME,
};
pub use json::{write_snapshot_json, SnapshotExport, EXPORT_SCHEMA_VERSION};
