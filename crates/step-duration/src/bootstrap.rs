use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"warn"` if the level string is not recognised. All output
/// goes to stderr so it never corrupts the alternate-screen TUI or the JSON
/// view on stdout.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    // Accept the Python-style level names the CLI exposes (tracing uses
    // lowercase).
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    // try_init so a second call (e.g. from tests) is a no-op, not a panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
