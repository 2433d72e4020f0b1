//! Logging Infrastructure
//!
//! Structured logging through `tracing`. `RUST_LOG` wins over the configured
//! level; when a log directory exists, output goes to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// lifetime of the process or buffered lines are lost on exit.
pub fn init_logger(
    log_level: &str,
    log_dir: Option<&str>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hr_server={log_level},tower_http={log_level}")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "hr-server");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            subscriber.with_ansi(false).with_writer(writer).init();
            return Some(guard);
        }
        eprintln!("LOG_DIR {dir} is not a directory, logging to stdout");
    }

    subscriber.init();
    None
}
