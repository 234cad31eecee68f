//! Duration derivation: from raw sheet cells to [`EventRow`]s.
//!
//! Step columns are identified by name (any header containing `"Step"`),
//! kept in declaration order, and parsed as times of day. Each adjacent
//! pair of steps yields one derived duration column holding the signed
//! elapsed minutes between them.

use tracing::{debug, warn};

use duration_core::error::{AnalyzerError, Result};
use duration_core::models::{EventRow, SheetTable};
use duration_core::time_utils;

/// Header substring that marks a column as a process step.
const STEP_MARKER: &str = "Step";

/// Name of the mandatory date column.
pub const DATE_COLUMN: &str = "Date";

// ── Public API ────────────────────────────────────────────────────────────────

/// Names of the derived duration columns for `step_count` step columns:
/// `Duration 1` through `Duration step_count - 1`.
pub fn duration_column_names(step_count: usize) -> Vec<String> {
    (1..step_count)
        .map(|i| format!("Duration {}", i))
        .collect()
}

/// Convert a loaded [`SheetTable`] into event rows with derived durations.
///
/// Per-cell rules:
/// * The `Date` column is required. A missing column fails with
///   [`AnalyzerError::MissingColumn`]; an unparseable date cell fails with
///   [`AnalyzerError::DateParse`] carrying the 1-based worksheet row.
/// * Step cells that fail to parse become unset, which unsets only the
///   durations touching that step.
///
/// Returns the rows plus the duration column names, so callers never have
/// to re-derive the naming.
pub fn build_event_rows(table: &SheetTable) -> Result<(Vec<EventRow>, Vec<String>)> {
    let date_idx = table
        .column_index(DATE_COLUMN)
        .ok_or_else(|| AnalyzerError::MissingColumn(DATE_COLUMN.to_string()))?;

    let step_indices = table.columns_containing(STEP_MARKER);
    let duration_names = duration_column_names(step_indices.len());

    let mut rows = Vec::with_capacity(table.rows.len());
    let mut unset_cells = 0usize;

    for (i, cells) in table.rows.iter().enumerate() {
        // Worksheet rows are 1-based and the header occupies row 1.
        let sheet_row = i + 2;

        let date = time_utils::parse_date(&cells[date_idx]).ok_or_else(|| {
            AnalyzerError::DateParse {
                row: sheet_row,
                value: cell_display(&cells[date_idx]),
            }
        })?;

        let step_times: Vec<_> = step_indices
            .iter()
            .map(|&idx| time_utils::parse_step_time(&cells[idx]))
            .collect();
        unset_cells += step_times.iter().filter(|t| t.is_none()).count();

        let durations = compute_durations(&step_times);

        rows.push(EventRow {
            date,
            step_times,
            durations,
        });
    }

    if unset_cells > 0 {
        warn!(
            "{} step cells could not be parsed and were left unset",
            unset_cells
        );
    }
    debug!(
        "Built {} event rows from {} step columns ({} duration columns)",
        rows.len(),
        step_indices.len(),
        duration_names.len()
    );

    Ok((rows, duration_names))
}

/// Signed elapsed minutes between each adjacent pair of step times.
///
/// A pair with either endpoint unset yields an unset duration; nothing else
/// about the row is affected. Negative values (cross-midnight or mis-ordered
/// steps) are reported as-is.
pub fn compute_durations(step_times: &[Option<chrono::NaiveTime>]) -> Vec<Option<f64>> {
    step_times
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(earlier), Some(later)) => Some(time_utils::minutes_between(earlier, later)),
            _ => None,
        })
        .collect()
}

/// Display form of a cell for error messages.
fn cell_display(cell: &duration_core::models::CellValue) -> String {
    use duration_core::models::CellValue;
    match cell {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => n.to_string(),
        CellValue::DateTime(dt) => dt.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
