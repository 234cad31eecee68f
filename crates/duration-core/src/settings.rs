use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Monthly step-duration analysis for process event workbooks
#[derive(Parser, Debug, Clone)]
#[command(
    name = "step-duration",
    about = "Analyze per-step durations from an Excel workbook of process events",
    version
)]
pub struct Settings {
    /// Path to the input .xlsx workbook
    pub input: PathBuf,

    /// View mode
    #[arg(long, default_value = "table", value_parser = ["table", "chart", "json"])]
    pub view: String,

    /// Worksheet to read
    #[arg(long, default_value = "Sheet1")]
    pub sheet: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "auto"])]
    pub theme: String,

    /// Write the PDF summary report to PATH instead of opening the viewer.
    /// Without a PATH the report goes to ./Step_Duration_Report.pdf
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "Step_Duration_Report.pdf"
    )]
    pub report: Option<PathBuf>,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
