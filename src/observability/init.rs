//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG`, the CLI nor the config sets one.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the tracing subscriber writing JSON lines to `log_path`.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `level` (from `--log-level` or the config `trace_level`)
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if that fails (logging is optional)
/// - Idempotent: only the first call takes effect
/// - Never writes to the terminal, which belongs to the UI
pub fn init_tracing(level: Option<&str>, log_path: &Path) {
    if let Some(dir) = log_path.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_TRACE_LEVEL)));

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(FileWriter::new(log_path.to_path_buf()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
