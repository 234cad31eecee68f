//! Workbook loading for the Step Duration Analyzer.
//!
//! Opens an `.xlsx` file via [`calamine`] and converts the requested
//! worksheet into a [`SheetTable`]: a header row of column names plus
//! data rows of [`CellValue`]s for downstream processing.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDateTime;
use tracing::debug;

use duration_core::error::{AnalyzerError, Result};
use duration_core::models::{CellValue, SheetTable};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the worksheet named `sheet` from the workbook at `path`.
///
/// The first row is taken as the header; every following row becomes a data
/// row padded with [`CellValue::Empty`] to the header width. Fails with
/// [`AnalyzerError::WorkbookOpen`] when the file is absent or unreadable,
/// [`AnalyzerError::SheetNotFound`] when the sheet is missing, and
/// [`AnalyzerError::EmptySheet`] when there is no header row.
pub fn load_sheet(path: &Path, sheet: &str) -> Result<SheetTable> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| AnalyzerError::WorkbookOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|_| AnalyzerError::SheetNotFound(sheet.to_string()))?;

    let mut rows_iter = range.rows();
    let header = rows_iter
        .next()
        .ok_or_else(|| AnalyzerError::EmptySheet(sheet.to_string()))?;

    let columns: Vec<String> = header.iter().map(header_name).collect();

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
            cells.resize(columns.len(), CellValue::Empty);
            cells
        })
        .collect();

    debug!(
        "Loaded sheet \"{}\" from {}: {} columns, {} rows",
        sheet,
        path.display(),
        columns.len(),
        rows.len()
    );

    Ok(SheetTable { columns, rows })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Header cells are usually strings; anything else is rendered through its
/// display form so the column still gets a stable name.
fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Reduce a calamine cell to the value kinds the pipeline distinguishes.
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::DateTime(naive),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

/// ISO datetime cells carry either a full datetime, a bare date, or a bare
/// time-of-day; all three map onto a [`NaiveDateTime`].
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Ok(t) = chrono::NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        return chrono::NaiveDate::from_ymd_opt(1899, 12, 31).map(|d| d.and_time(t));
    }
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
