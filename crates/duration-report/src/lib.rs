//! PDF summary report for the Step Duration Analyzer.
//!
//! Produces the paginated "Step Duration Analysis Report": title, a
//! per-month narrative, the aggregated month-by-duration table, and a
//! conclusion. Everything is generated from the [`MonthlyTable`] the
//! aggregator produced for this load; the report never embeds sample data.
//!
//! [`MonthlyTable`]: duration_core::models::MonthlyTable

pub mod narrative;
mod pdf;

pub use pdf::{write_report, DEFAULT_REPORT_NAME};
