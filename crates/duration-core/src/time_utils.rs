use chrono::{NaiveDate, NaiveTime, Timelike};
use tracing::warn;

use crate::models::CellValue;

// ── Clock-time parsing ────────────────────────────────────────────────────────

/// Clock-time formats accepted for step cells, tried in order.
const TIME_FMTS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parse a step cell into a time of day.
///
/// Accepts `HH:MM:SS` (and `HH:MM`) strings, workbook-native datetime cells,
/// and Excel fractional-day serial numbers. Returns `None` for blanks and
/// anything unparseable; a bad step time never fails the row, it only unsets
/// the durations that touch it.
pub fn parse_step_time(cell: &CellValue) -> Option<NaiveTime> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => parse_clock_time(s),
        CellValue::Number(n) => time_from_excel_serial(*n),
        CellValue::DateTime(dt) => Some(dt.time()),
    }
}

/// Parse a `HH:MM:SS` (or `HH:MM`) string into a [`NaiveTime`].
pub fn parse_clock_time(s: &str) -> Option<NaiveTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in TIME_FMTS {
        if let Ok(t) = NaiveTime::parse_from_str(trimmed, fmt) {
            return Some(t);
        }
    }
    None
}

/// Convert an Excel time serial (fraction of a day, with any date part in
/// the integer portion) into a time of day.
///
/// Negative serials are rejected.
pub fn time_from_excel_serial(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let day_fraction = serial.fract();
    let total_seconds = (day_fraction * 86_400.0).round() as u32;
    // 24:00:00 rounds back to midnight.
    let clamped = total_seconds % 86_400;
    NaiveTime::from_num_seconds_from_midnight_opt(clamped, 0)
}

// ── Date parsing ──────────────────────────────────────────────────────────────

/// Date formats accepted for the `Date` column, tried in order.
const DATE_FMTS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];

/// Parse a date cell.
///
/// Accepts ISO `YYYY-MM-DD` strings, the common slash-separated forms, and
/// workbook-native datetime cells. Returns `None` on failure; the caller
/// treats that as fatal for the load, unlike step times.
pub fn parse_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Empty => None,
        CellValue::Text(s) => parse_date_str(s),
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Number(n) => date_from_excel_serial(*n),
    }
}

/// Parse a date string using the accepted formats in order.
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    warn!("Could not parse date string \"{}\"", trimmed);
    None
}

/// Convert an Excel date serial (days since 1899-12-30) into a date.
pub fn date_from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(chrono::Days::new(serial.trunc() as u64))
}

// ── Duration arithmetic ───────────────────────────────────────────────────────

/// Minutes since midnight as a fractional value.
pub fn minutes_since_midnight(t: NaiveTime) -> f64 {
    f64::from(t.num_seconds_from_midnight()) / 60.0
}

/// Signed elapsed minutes from `earlier` to `later`.
///
/// Negative when `later` has a smaller clock value, which happens for steps
/// crossing midnight or recorded out of order. The value is reported as-is.
pub fn minutes_between(earlier: NaiveTime, later: NaiveTime) -> f64 {
    minutes_since_midnight(later) - minutes_since_midnight(earlier)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    // ── parse_clock_time ──────────────────────────────────────────────────────

    #[test]
    fn test_parse_clock_time_hms() {
        assert_eq!(parse_clock_time("09:15:00"), Some(t(9, 15, 0)));
        assert_eq!(parse_clock_time("23:59:59"), Some(t(23, 59, 59)));
    }

    #[test]
    fn test_parse_clock_time_hm_fallback() {
        assert_eq!(parse_clock_time("09:15"), Some(t(9, 15, 0)));
    }

    #[test]
    fn test_parse_clock_time_trims_whitespace() {
        assert_eq!(parse_clock_time("  10:29:00 "), Some(t(10, 29, 0)));
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        assert_eq!(parse_clock_time(""), None);
        assert_eq!(parse_clock_time("soon"), None);
        assert_eq!(parse_clock_time("25:00:00"), None);
        assert_eq!(parse_clock_time("09:61:00"), None);
    }

    // ── parse_step_time ───────────────────────────────────────────────────────

    #[test]
    fn test_parse_step_time_from_text() {
        let cell = CellValue::Text("09:00:00".to_string());
        assert_eq!(parse_step_time(&cell), Some(t(9, 0, 0)));
    }

    #[test]
    fn test_parse_step_time_from_datetime_cell() {
        let dt = NaiveDate::from_ymd_opt(1899, 12, 31)
            .unwrap()
            .and_hms_opt(10, 29, 0)
            .unwrap();
        assert_eq!(parse_step_time(&CellValue::DateTime(dt)), Some(t(10, 29, 0)));
    }

    #[test]
    fn test_parse_step_time_from_excel_serial() {
        // 0.5 of a day = noon; 0.375 = 09:00.
        assert_eq!(parse_step_time(&CellValue::Number(0.5)), Some(t(12, 0, 0)));
        assert_eq!(
            parse_step_time(&CellValue::Number(0.375)),
            Some(t(9, 0, 0))
        );
    }

    #[test]
    fn test_parse_step_time_serial_ignores_date_part() {
        // 45_000.25 → whatever day that is, 06:00:00.
        assert_eq!(
            parse_step_time(&CellValue::Number(45_000.25)),
            Some(t(6, 0, 0))
        );
    }

    #[test]
    fn test_parse_step_time_empty_and_invalid() {
        assert_eq!(parse_step_time(&CellValue::Empty), None);
        assert_eq!(
            parse_step_time(&CellValue::Text("broken".to_string())),
            None
        );
        assert_eq!(parse_step_time(&CellValue::Number(-1.0)), None);
    }

    // ── parse_date ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_date_iso() {
        let cell = CellValue::Text("2025-06-01".to_string());
        assert_eq!(
            parse_date(&cell),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
    }

    #[test]
    fn test_parse_date_from_datetime_cell() {
        let dt = NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            parse_date(&CellValue::DateTime(dt)),
            NaiveDate::from_ymd_opt(2025, 8, 15)
        );
    }

    #[test]
    fn test_parse_date_from_excel_serial() {
        // 2025-06-01 is serial 45809 from the 1899-12-30 epoch.
        assert_eq!(
            date_from_excel_serial(45_809.0),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
    }

    #[test]
    fn test_parse_date_failure() {
        assert_eq!(parse_date(&CellValue::Empty), None);
        assert_eq!(parse_date(&CellValue::Text("June 2025".to_string())), None);
    }

    // ── minutes arithmetic ────────────────────────────────────────────────────

    #[test]
    fn test_minutes_since_midnight() {
        assert!((minutes_since_midnight(t(0, 0, 0)) - 0.0).abs() < 1e-9);
        assert!((minutes_since_midnight(t(9, 15, 0)) - 555.0).abs() < 1e-9);
        assert!((minutes_since_midnight(t(9, 15, 30)) - 555.5).abs() < 1e-9);
    }

    #[test]
    fn test_minutes_between_forward() {
        assert!((minutes_between(t(9, 0, 0), t(9, 15, 0)) - 15.0).abs() < 1e-9);
        assert!((minutes_between(t(9, 15, 0), t(10, 29, 0)) - 74.0).abs() < 1e-9);
    }

    #[test]
    fn test_minutes_between_negative_when_out_of_order() {
        // Cross-midnight or mis-ordered steps stay signed.
        assert!((minutes_between(t(23, 30, 0), t(0, 15, 0)) + 1395.0).abs() < 1e-9);
    }
}
