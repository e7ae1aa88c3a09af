//! Logging configuration with file-based output and size-based rotation.
//!
//! The terminal belongs to the game, so logs go to a file only:
//! `~/.config/simon/simon.log` (or platform equivalent) with 1 MB
//! size-based rotation. Set `DEBUG_LOGGING=1` to enable debug output for
//! the simon crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize file logging.
///
/// Returns a `WorkerGuard` that must be held for the application lifetime
/// so buffered logs are flushed on shutdown. Returns `None`, leaving
/// logging off entirely, when no config directory is available or the log
/// file cannot be created; a missing log must never keep the game from
/// starting.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let log_dir = dirs::config_dir()?.join("simon");
    std::fs::create_dir_all(&log_dir).ok()?;

    let log_path = log_dir.join("simon.log");
    let file_appender = BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(1024 * 1024),
        1,
    )
    .ok()?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,simon_core=debug,simon_cli=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "simon logging initialized");
    Some(guard)
}
