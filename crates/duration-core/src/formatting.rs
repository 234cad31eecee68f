/// Format a duration mean in minutes with two decimal places.
///
/// # Examples
///
/// ```
/// use duration_core::formatting::format_minutes;
///
/// assert_eq!(format_minutes(74.333333), "74.33");
/// assert_eq!(format_minutes(5.4), "5.40");
/// assert_eq!(format_minutes(-12.5), "-12.50");
/// ```
pub fn format_minutes(minutes: f64) -> String {
    format!("{:.2}", minutes)
}

/// Format an optional mean for table display; unset values render as `"-"`.
///
/// # Examples
///
/// ```
/// use duration_core::formatting::format_mean;
///
/// assert_eq!(format_mean(Some(96.32)), "96.32");
/// assert_eq!(format_mean(None), "-");
/// ```
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(m) => format_minutes(m),
        None => "-".to_string(),
    }
}

/// Format a duration in minutes as a human-readable hours/minutes string,
/// used in the report narrative.
///
/// # Examples
///
/// ```
/// use duration_core::formatting::format_minutes_narrative;
///
/// assert_eq!(format_minutes_narrative(45.2), "45 min");
/// assert_eq!(format_minutes_narrative(96.32), "96 min");
/// assert_eq!(format_minutes_narrative(120.52), "121 min");
/// ```
pub fn format_minutes_narrative(minutes: f64) -> String {
    format!("{} min", minutes.round() as i64)
}
