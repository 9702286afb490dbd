use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with both console and file output.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the life of the process.
pub fn init_logging(log_dir: &Path) -> WorkerGuard {
    // Ensure logs directory exists
    let _ = fs::create_dir_all(log_dir);

    // Create a non-blocking file appender for daily log rotation
    let file_appender = tracing_appender::rolling::daily(log_dir, "portfolio-api.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Create a JSON layer for file logging
    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    // Create a formatted layer for console logging
    let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);

    // Respect RUST_LOG if set; otherwise info for our crates and request tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("portfolio_api=info,portfolio_core=info,tower_http=info")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
