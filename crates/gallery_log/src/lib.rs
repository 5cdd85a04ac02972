//! Gallery logging & crash reporting
//!
//! Structured logging to the console and a rolling JSON file, plus a panic
//! hook that leaves a crash dump behind.

mod logging;
mod panic_hook;

pub use logging::{cleanup_old_logs, cleanup_logs_in, init_logging};
pub use panic_hook::{crash_report, init_panic_hook};

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

/// Get the application log directory
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("com", "GalleryViewer", "GalleryViewer")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize logging and the panic hook.
///
/// The returned guard flushes the log file on drop; keep it alive in `main`.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let guard = init_logging()?;
    init_panic_hook();
    Ok(guard)
}
