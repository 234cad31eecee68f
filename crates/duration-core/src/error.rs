use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Step Duration Analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The workbook could not be opened or read from disk.
    #[error("Failed to open workbook {path}: {message}")]
    WorkbookOpen { path: PathBuf, message: String },

    /// The workbook does not contain the expected worksheet.
    #[error("Worksheet \"{0}\" not found in workbook")]
    SheetNotFound(String),

    /// The worksheet has no header row or no data rows.
    #[error("Worksheet \"{0}\" is empty")]
    EmptySheet(String),

    /// A required column is absent from the header row.
    #[error("Missing required column \"{0}\"")]
    MissingColumn(String),

    /// A date cell could not be parsed. Dates are mandatory, so this aborts
    /// the whole load; step times, by contrast, degrade to unset values.
    #[error("Invalid date \"{value}\" in row {row}")]
    DateParse { row: usize, value: String },

    /// The PDF report could not be written to disk.
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PDF document itself could not be built.
    #[error("Failed to build PDF: {0}")]
    Pdf(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the analyzer crates.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
