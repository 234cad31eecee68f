mod bootstrap;

use anyhow::Result;
use clap::Parser;

use duration_core::settings::Settings;
use duration_data::analysis::analyze_workbook;
use duration_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!(
        "Step Duration Analyzer v{} starting",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        "Input: {}, sheet: {}, view: {}",
        settings.input.display(),
        settings.sheet,
        settings.view
    );

    // One linear load-then-present cycle. Any pipeline error aborts this
    // invocation with exit code 1; per-cell step failures never reach here.
    let result = analyze_workbook(&settings.input, &settings.sheet)?;
    tracing::info!(
        "Analyzed {} rows into {} months (load {:.3}s, transform {:.3}s)",
        result.metadata.rows_processed,
        result.table.month_count(),
        result.metadata.load_time_seconds,
        result.metadata.transform_time_seconds
    );

    if let Some(report_path) = &settings.report {
        let written = duration_report::write_report(&result.table, report_path)?;
        println!("PDF saved to: {}", written.display());
        return Ok(());
    }

    match settings.view.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result.table)?);
        }
        view => {
            let view_mode = if view == "chart" {
                ViewMode::Chart
            } else {
                ViewMode::Table
            };
            let app = App::new(&settings.theme, view_mode, result.table);
            app.run()?;
        }
    }

    Ok(())
}
