//! Generated narrative text for the PDF report.
//!
//! The wording follows the report's established register (delays,
//! bottlenecks, improvements) but every number comes from the aggregated
//! table of the current load.

use chrono::NaiveDate;

use duration_core::formatting::format_minutes_narrative;
use duration_core::models::MonthlyTable;

// ── Month headings ────────────────────────────────────────────────────────────

/// Human-readable heading for a `"%Y-%m"` month key, e.g. `"June 2025"`.
/// Falls back to the raw key if it does not parse.
pub fn month_heading(month_key: &str) -> String {
    let padded = format!("{}-01", month_key);
    match NaiveDate::parse_from_str(&padded, "%Y-%m-%d") {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => month_key.to_string(),
    }
}

// ── Monthly analysis ──────────────────────────────────────────────────────────

/// One short paragraph per month naming its slowest steps.
///
/// Returns `(heading, lines)` pairs in table order. Months where every mean
/// is unset get a single "no measurable durations" line.
pub fn monthly_analysis(table: &MonthlyTable) -> Vec<(String, Vec<String>)> {
    table
        .rows
        .iter()
        .map(|row| {
            let heading = month_heading(&row.month);

            // Defined means, slowest first.
            let mut ranked: Vec<(usize, f64)> = row
                .means
                .iter()
                .enumerate()
                .filter_map(|(i, mean)| mean.map(|m| (i, m)))
                .collect();
            ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            let lines = if ranked.is_empty() {
                vec!["- No measurable durations this month.".to_string()]
            } else {
                let named: Vec<String> = ranked
                    .iter()
                    .take(2)
                    .map(|(i, mean)| {
                        format!(
                            "{} ({})",
                            table.duration_columns[*i],
                            format_minutes_narrative(*mean)
                        )
                    })
                    .collect();
                vec![
                    format!("- Longest delays: {}.", named.join(" and ")),
                    "- These are the main bottlenecks.".to_string(),
                ]
            };

            (heading, lines)
        })
        .collect()
}

// ── Conclusion ────────────────────────────────────────────────────────────────

/// Closing lines comparing the first and last month of the table.
///
/// Names the duration column that improved the most and the one that
/// worsened the most; with fewer than two months there is no trend to
/// report.
pub fn conclusion(table: &MonthlyTable) -> Vec<String> {
    if table.month_count() < 2 {
        return vec![
            "- Only one month of data is available; no trend can be reported.".to_string(),
        ];
    }

    let first = &table.rows[0];
    let last = &table.rows[table.rows.len() - 1];

    // Per-column change from first to last month, where both are defined.
    let mut changes: Vec<(usize, f64, f64, f64)> = Vec::new();
    for i in 0..table.duration_columns.len() {
        if let (Some(a), Some(b)) = (
            first.means.get(i).copied().flatten(),
            last.means.get(i).copied().flatten(),
        ) {
            changes.push((i, a, b, b - a));
        }
    }

    if changes.is_empty() {
        return vec![
            "- No duration column is defined in both the first and last month.".to_string(),
        ];
    }

    let mut lines = vec![format!(
        "- Across {} months, {} of {} steps have comparable data.",
        table.month_count(),
        changes.len(),
        table.duration_columns.len()
    )];

    let best = changes
        .iter()
        .min_by(|a, b| a.3.partial_cmp(&b.3).unwrap_or(std::cmp::Ordering::Equal))
        .copied();
    let worst = changes
        .iter()
        .max_by(|a, b| a.3.partial_cmp(&b.3).unwrap_or(std::cmp::Ordering::Equal))
        .copied();

    if let Some((i, from, to, delta)) = best {
        if delta < 0.0 {
            lines.push(format!(
                "- {} improved the most (from {} to {}).",
                table.duration_columns[i],
                format_minutes_narrative(from),
                format_minutes_narrative(to)
            ));
        }
    }
    if let Some((i, from, to, delta)) = worst {
        if delta > 0.0 {
            lines.push(format!(
                "- {} worsened (from {} to {}).",
                table.duration_columns[i],
                format_minutes_narrative(from),
                format_minutes_narrative(to)
            ));
        }
    }

    let improved = changes.iter().filter(|c| c.3 < 0.0).count();
    let summary = if improved * 2 >= changes.len() {
        "- Overall: the process is getting faster."
    } else {
        "- Overall: the process is getting slower."
    };
    lines.push(summary.to_string());

    lines
}

// ── Tests ─────────────────────────────────────────────────────────────────────
