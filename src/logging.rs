//! File-based logging setup.
//!
//! The TUI owns the terminal, so logs go to a daily-rotated file under
//! `.logs/` instead of stdout. The returned guard must stay alive for the
//! lifetime of the application or buffered log lines are lost.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "tunesearch";

/// Initialize logging to `.logs/tunesearch.YYYY-MM-DD.log`.
///
/// The filter defaults to debug for this crate and warn for everything else;
/// `RUST_LOG` overrides it.
pub fn init_logging() -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(LOG_DIR)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    // Non-blocking writer so log writes never stall the async runtime
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tunesearch=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(guard)
}
