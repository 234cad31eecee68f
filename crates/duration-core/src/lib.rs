//! Core domain layer for the Step Duration Analyzer.
//!
//! Holds the data model shared by every other crate (sheet cells, event
//! rows, monthly aggregates), the error type, clock-time and date parsing
//! helpers, display formatting, and the CLI settings. This crate performs
//! no I/O.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;
