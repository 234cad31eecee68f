//! Data model for the duration-aggregation pipeline.
//!
//! A load produces a [`SheetTable`] (raw cells), which the calculator turns
//! into [`EventRow`]s (parsed dates, step times and derived durations), which
//! the aggregator collapses into a [`MonthlyTable`]. All of it lives in
//! memory for the lifetime of one load and is replaced wholesale by the next.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// ── CellValue / SheetTable ────────────────────────────────────────────────────

/// A single spreadsheet cell, reduced to the value kinds the pipeline
/// distinguishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Blank cell (or an error cell in the source workbook).
    Empty,
    /// Textual content, e.g. `"09:15:00"`.
    Text(String),
    /// Numeric content, including Excel fractional-day time serials.
    Number(f64),
    /// A cell the workbook itself marks as a date/time.
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// `true` for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// One worksheet in row-column form: a header row plus data rows.
///
/// Every data row has exactly `columns.len()` cells; the loader pads short
/// rows with [`CellValue::Empty`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetTable {
    /// Column names from the header row, in declaration order.
    pub columns: Vec<String>,
    /// Data rows, in worksheet order.
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Index of the column named `name`, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Indices of all columns whose name contains `needle`, in declaration
    /// order.
    pub fn columns_containing(&self, needle: &str) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(needle))
            .map(|(i, _)| i)
            .collect()
    }
}

// ── EventRow ──────────────────────────────────────────────────────────────────

/// One process instance: the date it ran plus its parsed step times and the
/// derived durations between adjacent steps.
///
/// `step_times[i]` is `None` when the cell was blank or unparseable;
/// `durations[i]` (minutes between step `i` and step `i+1`) is `None`
/// whenever either endpoint is unset. Durations are computed once at load
/// time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRow {
    /// The date of the process instance. Mandatory: rows without a parseable
    /// date abort the load.
    pub date: NaiveDate,
    /// The parsed step times, in step-column declaration order.
    pub step_times: Vec<Option<NaiveTime>>,
    /// Derived elapsed minutes between adjacent steps. May be negative when
    /// steps cross midnight or are recorded out of order.
    pub durations: Vec<Option<f64>>,
}

impl EventRow {
    /// The `"%Y-%m"` month key used for aggregation.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

// ── MonthlyRow / MonthlyTable ─────────────────────────────────────────────────

/// Per-month averages: one mean per duration column, `None` when no row in
/// that month had a defined value for that column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Month key, e.g. `"2025-06"`.
    pub month: String,
    /// Mean minutes per duration column, aligned with
    /// [`MonthlyTable::duration_columns`].
    pub means: Vec<Option<f64>>,
}

/// The aggregated output of one load: ordered months by first appearance in
/// the input, with one mean per duration column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTable {
    /// Duration column names, e.g. `["Duration 1", "Duration 2"]`.
    pub duration_columns: Vec<String>,
    /// One row per month, in first-seen order.
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyTable {
    /// `true` when there are no months to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of months represented.
    pub fn month_count(&self) -> usize {
        self.rows.len()
    }

    /// The mean for `(month_index, column_index)`, if defined.
    pub fn mean_at(&self, month_index: usize, column_index: usize) -> Option<f64> {
        self.rows
            .get(month_index)
            .and_then(|r| r.means.get(column_index).copied())
            .flatten()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
