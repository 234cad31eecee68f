//! End-to-end pipeline tests: synthesised workbook in, aggregated table and
//! PDF report out.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use duration_data::analysis::analyze_workbook;
use duration_report::write_report;

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

#[test]
fn analyze_then_report_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(
        dir.path(),
        &["Date", "Step 1", "Step 2", "Step 3"],
        &[
            // Rows deliberately interleaved across months: output order must
            // follow first appearance, not input sort order.
            &["2025-06-01", "09:00:00", "09:15:00", "10:29:00"],
            &["2025-07-03", "09:00:00", "09:10:00", "09:40:00"],
            &["2025-06-20", "08:00:00", "08:05:00", "nonsense"],
            &["2025-08-11", "10:00:00", "10:02:00", "10:12:00"],
            &["2025-07-15", "11:00:00", "11:20:00", "12:00:00"],
        ],
    );

    let result = analyze_workbook(&input, "Sheet1").unwrap();
    let table = &result.table;

    let months: Vec<&str> = table.rows.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(months, vec!["2025-06", "2025-07", "2025-08"]);

    // June Duration 1: mean of 15 and 5; Duration 2: the bad cell is
    // excluded, leaving only the 74-minute row.
    assert!((table.mean_at(0, 0).unwrap() - 10.0).abs() < 1e-9);
    assert!((table.mean_at(0, 1).unwrap() - 74.0).abs() < 1e-9);
    // July: (10 + 20) / 2 and (30 + 40) / 2.
    assert!((table.mean_at(1, 0).unwrap() - 15.0).abs() < 1e-9);
    assert!((table.mean_at(1, 1).unwrap() - 35.0).abs() < 1e-9);

    // Report lands at the exact requested path, parents created on demand.
    let report_path = dir.path().join("out").join("reports").join("summary.pdf");
    let written = write_report(table, &report_path).unwrap();
    assert_eq!(written, report_path);

    let bytes = std::fs::read(&report_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn analyze_missing_workbook_is_an_error() {
    let result = analyze_workbook(Path::new("/tmp/no-such-workbook.xlsx"), "Sheet1");
    assert!(result.is_err());
}
