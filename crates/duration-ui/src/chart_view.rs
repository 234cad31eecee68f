//! Line chart of monthly duration averages.
//!
//! One series per duration column, x-axis = months in first-seen order,
//! y-axis = minutes. Months where a column's mean is unset simply have no
//! point in that series.

use ratatui::{
    layout::Rect,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use duration_core::formatting;
use duration_core::models::MonthlyTable;

use crate::themes::Theme;

/// Render the duration trend chart into `area`.
pub fn render_chart_view(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &MonthlyTable,
    theme: &Theme,
) {
    // One point per (month index, mean); unset means leave gaps.
    let series: Vec<Vec<(f64, f64)>> = (0..table.duration_columns.len())
        .map(|col| {
            table
                .rows
                .iter()
                .enumerate()
                .filter_map(|(i, row)| {
                    row.means
                        .get(col)
                        .copied()
                        .flatten()
                        .map(|mean| (i as f64, mean))
                })
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(col, points)| {
            Dataset::default()
                .name(table.duration_columns[col].clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme.series_style(col))
                .data(points)
        })
        .collect();

    let (y_min, y_max) = y_bounds(table);
    let x_max = (table.month_count().saturating_sub(1)) as f64;

    let x_labels: Vec<String> = table.rows.iter().map(|row| row.month.clone()).collect();
    let y_labels: Vec<String> = vec![
        formatting::format_minutes(y_min),
        formatting::format_minutes((y_min + y_max) / 2.0),
        formatting::format_minutes(y_max),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", title)),
        )
        .x_axis(
            Axis::default()
                .title("Month")
                .style(theme.axis)
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Minutes")
                .style(theme.axis)
                .bounds([y_min, y_max])
                .labels(y_labels),
        )
        .style(theme.text);

    frame.render_widget(chart, area);
}

/// Y-axis bounds covering every defined mean, with a little headroom.
///
/// Negative durations (cross-midnight steps) push the lower bound below
/// zero; a table with no defined means falls back to `[0, 1]`.
fn y_bounds(table: &MonthlyTable) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in &table.rows {
        for mean in row.means.iter().flatten() {
            min = min.min(*mean);
            max = max.max(*mean);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let headroom = ((max - min) * 0.1).max(1.0);
    ((min.min(0.0) - headroom).min(0.0), max + headroom)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use duration_core::models::MonthlyRow;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_table() -> MonthlyTable {
        MonthlyTable {
            duration_columns: vec!["Duration 1".to_string(), "Duration 2".to_string()],
            rows: vec![
                MonthlyRow {
                    month: "2025-06".to_string(),
                    means: vec![Some(13.62), Some(74.33)],
                },
                MonthlyRow {
                    month: "2025-07".to_string(),
                    means: vec![Some(14.75), Some(69.28)],
                },
                MonthlyRow {
                    month: "2025-08".to_string(),
                    means: vec![Some(10.17), None],
                },
            ],
        }
    }

    #[test]
    fn test_y_bounds_cover_all_means() {
        let (min, max) = y_bounds(&make_table());
        assert!(min <= 0.0);
        assert!(max > 74.33);
    }

    #[test]
    fn test_y_bounds_negative_means() {
        let table = MonthlyTable {
            duration_columns: vec!["Duration 1".to_string()],
            rows: vec![MonthlyRow {
                month: "2025-06".to_string(),
                means: vec![Some(-30.0)],
            }],
        };
        let (min, _) = y_bounds(&table);
        assert!(min < -30.0);
    }

    #[test]
    fn test_y_bounds_no_defined_means() {
        let table = MonthlyTable {
            duration_columns: vec!["Duration 1".to_string()],
            rows: vec![MonthlyRow {
                month: "2025-06".to_string(),
                means: vec![None],
            }],
        };
        assert_eq!(y_bounds(&table), (0.0, 1.0));
    }

    #[test]
    fn test_render_chart_view_does_not_panic() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let table = make_table();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_chart_view(frame, area, "Duration Trends", &table, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_chart_view_single_month_does_not_panic() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::light();
        let table = MonthlyTable {
            duration_columns: vec!["Duration 1".to_string()],
            rows: vec![MonthlyRow {
                month: "2025-06".to_string(),
                means: vec![Some(15.0)],
            }],
        };

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_chart_view(frame, area, "Duration Trends", &table, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_chart_view_empty_table_does_not_panic() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        let table = MonthlyTable {
            duration_columns: vec![],
            rows: vec![],
        };

        terminal
            .draw(|frame| {
                let area = frame.area();
                render_chart_view(frame, area, "Duration Trends", &table, &theme);
            })
            .unwrap();
    }
}
