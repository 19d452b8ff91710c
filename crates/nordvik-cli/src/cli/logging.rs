//! File-based logging setup.
//!
//! The portal UI owns the terminal, so logs go to ${NORDVIK_HOME}/logs/
//! instead of stderr. Filter with the NORDVIK_LOG env var (defaults to
//! "info"). Logging is best-effort: failure to set it up never blocks the
//! portal.

use nordvik_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. The returned guard must be held for
/// the process lifetime so buffered log lines get flushed.
pub fn init() -> Option<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir, "nordvik.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("NORDVIK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::debug!("logging initialized");
    Some(guard)
}
