//! Data pipeline for the Step Duration Analyzer.
//!
//! Responsible for loading a worksheet into row-column form, deriving
//! per-step durations, aggregating monthly averages, and running the
//! top-level analysis pipeline that strings the three together.

pub mod aggregator;
pub mod analysis;
pub mod calculator;
pub mod loader;

pub use duration_core as core;
