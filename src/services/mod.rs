//! Service layer for Rekap
//!
//! Aggregation helpers and the dashboard session that ties both ledgers
//! together and recomputes derived values on every render.

pub mod aggregate;
pub mod dashboard;

pub use aggregate::column_total;
pub use dashboard::{Dashboard, DashboardSnapshot};
