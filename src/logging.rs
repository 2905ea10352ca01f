//! Logging for the `cellview` binary
//!
//! Two layers share one registry. The console layer writes to stderr, so the
//! HTML printed on stdout can be piped straight into a file. The file layer
//! keeps a debug-level trail of every notification, render and drain.
//!
//! Events are tagged with these targets:
//! - `notify` - model notifications reaching a view
//! - `view` - view creation and deferred notifications
//! - `render` - markdown conversions
//! - `update` - updates applied during a drain
//! - `scheduler` - drain bookkeeping
//!
//! `RUST_LOG=render=debug,update=trace` narrows the console to the render
//! pipeline. Without `RUST_LOG` the console only shows warnings, such as a
//! config file that failed to parse.

use std::path::PathBuf;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Prefix of the daily log files, e.g. `cellview.log.2026-10-18`
pub const LOG_FILE_PREFIX: &str = "cellview.log";

/// Install logging with the log files under the config directory
///
/// A missing or unwritable config directory only disables the file layer.
pub fn init() {
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };
    if let Err(e) = init_with(logs_dir) {
        eprintln!("Warning: logging already initialized: {}", e);
    }
}

/// Install logging, writing log files into `logs_dir` when given
///
/// Fails if a global subscriber is already set.
pub fn init_with(logs_dir: Option<PathBuf>) -> Result<(), TryInitError> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let file_layer = logs_dir.map(|dir| {
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("debug"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
}
