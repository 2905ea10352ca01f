//! Where cellview keeps its files on disk
//!
//! ```text
//! <config dir>/cellview/
//!     config.yaml     view settings read by `ViewConfig::load`
//!     logs/           daily log files written by `logging::init`
//! ```
//!
//! `<config dir>` is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! and the roaming app data folder on Windows.

use std::{fs, path::PathBuf};

const APP_DIR: &str = "cellview";

/// `<config dir>/cellview`, or `None` when no home directory is known
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = dirs::config_dir();

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|base| base.join(APP_DIR))
}

/// The YAML file behind [`ViewConfig`](crate::config::ViewConfig)
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "no config directory for log files".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("cannot create {}: {}", logs.display(), e))?;
    Ok(logs)
}
