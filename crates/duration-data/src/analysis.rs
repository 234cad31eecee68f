//! Main analysis pipeline for the Step Duration Analyzer.
//!
//! Orchestrates loading, duration derivation and monthly aggregation,
//! returning an [`AnalysisResult`] ready for the UI or the report exporter.

use std::path::Path;

use chrono::Utc;

use duration_core::error::Result;
use duration_core::models::MonthlyTable;

use crate::aggregator::MonthlyAggregator;
use crate::calculator::build_event_rows;
use crate::loader::load_sheet;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the aggregated table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of event rows read from the worksheet.
    pub rows_processed: usize,
    /// Number of step columns found.
    pub step_columns: usize,
    /// Wall-clock seconds spent reading the workbook.
    pub load_time_seconds: f64,
    /// Wall-clock seconds spent deriving durations and aggregating.
    pub transform_time_seconds: f64,
}

/// The complete output of [`analyze_workbook`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Per-month duration averages, months in first-seen order.
    pub table: MonthlyTable,
    /// Metadata about this analysis run.
    pub metadata: AnalysisMetadata,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full pipeline against the workbook at `path`.
///
/// 1. Load the worksheet named `sheet` into row-column form.
/// 2. Parse dates and step times, deriving one duration column per adjacent
///    step pair.
/// 3. Aggregate the rows into monthly averages.
///
/// Errors surface per the asymmetric recovery policy: unreadable files,
/// missing sheets and bad dates fail the whole load, while bad step cells
/// merely leave gaps in the averages.
pub fn analyze_workbook(path: &Path, sheet: &str) -> Result<AnalysisResult> {
    let load_start = std::time::Instant::now();
    let raw = load_sheet(path, sheet)?;
    let load_time = load_start.elapsed().as_secs_f64();

    let transform_start = std::time::Instant::now();
    let step_columns = raw.columns_containing("Step").len();
    let (rows, duration_names) = build_event_rows(&raw)?;
    let rows_processed = rows.len();
    let table = MonthlyAggregator::aggregate(&rows, duration_names);
    let transform_time = transform_start.elapsed().as_secs_f64();

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        rows_processed,
        step_columns,
        load_time_seconds: load_time,
        transform_time_seconds: transform_time,
    };

    Ok(AnalysisResult { table, metadata })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_workbook(dir: &Path, header: &[&str], rows: &[&[&str]]) -> PathBuf {
        let path = dir.join("events.xlsx");
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (col, title) in header.iter().enumerate() {
            worksheet.write_string(0, col as u16, *title).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                worksheet
                    .write_string((r + 1) as u32, c as u16, *value)
                    .unwrap();
            }
        }
        workbook.save(&path).unwrap();
        path
    }

    // ── End to end ────────────────────────────────────────────────────────────

    #[test]
    fn test_analyze_workbook_end_to_end() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(
            dir.path(),
            &["Date", "Step 1", "Step 2", "Step 3"],
            &[
                &["2025-06-01", "09:00:00", "09:15:00", "10:29:00"],
                &["2025-06-15", "08:00:00", "08:05:00", "08:35:00"],
                &["2025-07-01", "09:30:00", "09:40:00", "10:00:00"],
            ],
        );

        let result = analyze_workbook(&path, "Sheet1").unwrap();
        let table = &result.table;

        assert_eq!(table.duration_columns, vec!["Duration 1", "Duration 2"]);
        assert_eq!(table.month_count(), 2);
        assert_eq!(table.rows[0].month, "2025-06");
        // June Duration 1: mean of 15 and 5 = 10; Duration 2: mean of 74 and 30 = 52.
        assert!((table.mean_at(0, 0).unwrap() - 10.0).abs() < 1e-9);
        assert!((table.mean_at(0, 1).unwrap() - 52.0).abs() < 1e-9);
        // July has one row.
        assert!((table.mean_at(1, 0).unwrap() - 10.0).abs() < 1e-9);
        assert!((table.mean_at(1, 1).unwrap() - 20.0).abs() < 1e-9);

        assert_eq!(result.metadata.rows_processed, 3);
        assert_eq!(result.metadata.step_columns, 3);
    }

    #[test]
    fn test_analyze_workbook_bad_step_cell_leaves_gap() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(
            dir.path(),
            &["Date", "Step 1", "Step 2"],
            &[
                &["2025-06-01", "09:00:00", "oops"],
                &["2025-06-02", "09:00:00", "09:30:00"],
            ],
        );

        let result = analyze_workbook(&path, "Sheet1").unwrap();
        // Only the second row contributes to the mean.
        assert!((result.table.mean_at(0, 0).unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_workbook_bad_date_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(
            dir.path(),
            &["Date", "Step 1", "Step 2"],
            &[&["not-a-date", "09:00:00", "09:30:00"]],
        );

        assert!(analyze_workbook(&path, "Sheet1").is_err());
    }

    #[test]
    fn test_analyze_workbook_missing_file_fails() {
        let err = analyze_workbook(Path::new("/tmp/nope-events.xlsx"), "Sheet1");
        assert!(err.is_err());
    }

    #[test]
    fn test_analyze_workbook_wrong_sheet_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_workbook(dir.path(), &["Date", "Step 1", "Step 2"], &[]);
        assert!(analyze_workbook(&path, "Data").is_err());
    }
}
