//! Monthly averages table for the Step Duration Analyzer TUI.
//!
//! Renders a bordered [`ratatui::widgets::Table`] with one row per month
//! and one column per derived duration, straight from a [`MonthlyTable`].
//! The view consumes pipeline output and holds no state of its own.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use duration_core::formatting;
use duration_core::models::MonthlyTable;

use crate::themes::Theme;

/// Render the monthly averages table into `area`.
///
/// The first column is the month key; the remaining columns are the duration
/// means formatted to two decimals, with `"-"` for months where every value
/// in that column was unset.
pub fn render_table_view(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &MonthlyTable,
    theme: &Theme,
) {
    let mut header_cells: Vec<Cell> = vec![Cell::from("Month").style(theme.table_header)];
    header_cells.extend(
        table
            .duration_columns
            .iter()
            .map(|name| Cell::from(name.as_str()).style(theme.table_header)),
    );
    let header = Row::new(header_cells).height(1);

    let data_rows: Vec<Row> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let mut cells: Vec<Cell> = vec![Cell::from(row.month.clone())];
            cells.extend(
                row.means
                    .iter()
                    .map(|mean| Cell::from(formatting::format_mean(*mean))),
            );
            Row::new(cells).style(style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(10)];
    widths.extend(
        table
            .duration_columns
            .iter()
            .map(|_| Constraint::Length(12)),
    );

    let widget = Table::new(data_rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(format!(" {} ", title)),
        )
        .style(theme.text);

    frame.render_widget(widget, area);
}

/// Render a "no data" placeholder when the workbook produced no months.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No event rows found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The worksheet has a header but no data rows.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(ratatui::text::Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Step Duration Analyzer "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
