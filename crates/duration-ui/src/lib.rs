//! Terminal UI layer for the Step Duration Analyzer.
//!
//! Provides themes, the monthly averages table view, the duration trend
//! chart, and the application event loop built on top of [`ratatui`].
//! Every view consumes a [`duration_core::models::MonthlyTable`] directly;
//! the rendering layer holds no pipeline state.

pub mod app;
pub mod chart_view;
pub mod table_view;
pub mod themes;

pub use duration_core as core;
