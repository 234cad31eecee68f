//! Application state and TUI event loop for the Step Duration Analyzer.
//!
//! [`App`] owns the theme, the current view mode, and the most recent
//! aggregated table. The pipeline has no lifecycle of its own; the app is a
//! thin adapter around one load's output.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use duration_core::models::MonthlyTable;

use crate::chart_view;
use crate::table_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Monthly averages table.
    Table,
    /// Duration trend line chart.
    Chart,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the analyzer TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// The aggregated table from the most recent load. Replaced wholesale
    /// whenever a new workbook is analyzed.
    pub table: MonthlyTable,
}

impl App {
    /// Construct a new application around one load's aggregated output.
    pub fn new(theme_name: &str, view_mode: ViewMode, table: MonthlyTable) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            table,
        }
    }

    /// Run the TUI event loop until the user quits.
    ///
    /// Keys: `t` shows the table, `g` the graph, `q` / `Q` / `Ctrl+C` exits.
    /// The loop polls with a 250 ms timeout; there is no background work, so
    /// each tick just redraws the current view.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break;
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        KeyCode::Char('t') | KeyCode::Char('T') => {
                            self.view_mode = ViewMode::Table;
                        }
                        KeyCode::Char('g') | KeyCode::Char('G') => {
                            self.view_mode = ViewMode::Chart;
                        }
                        _ => {}
                    }
                }
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.table.is_empty() {
            table_view::render_no_data(frame, area, &self.theme);
            return;
        }

        match self.view_mode {
            ViewMode::Table => table_view::render_table_view(
                frame,
                area,
                "Average Step Duration by Month  [g: graph, q: quit]",
                &self.table,
                &self.theme,
            ),
            ViewMode::Chart => chart_view::render_chart_view(
                frame,
                area,
                "Step Duration Trends  [t: table, q: quit]",
                &self.table,
                &self.theme,
            ),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
