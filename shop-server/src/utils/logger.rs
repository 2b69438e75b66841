//! Logging infrastructure
//!
//! Structured logging via tracing, configurable with `RUST_LOG` and an
//! optional daily-rolling file output.

use tracing_subscriber::EnvFilter;

/// Initialize the logger with console output only
pub fn init_logger() {
    init_logger_with_file(None);
}

/// Initialize the logger with optional file output
///
/// When `log_dir` points at an existing directory, log lines go to a
/// daily-rolling `shop-server.*` file there instead of the console.
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false);

    if let Some(dir) = log_dir {
        let path = std::path::Path::new(dir);
        if path.exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "shop-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
