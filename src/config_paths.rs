//! Where quill keeps its files
//!
//! `config.yaml` and `logs/` live in one per-user directory:
//! `$XDG_CONFIG_HOME/quill` or `~/.config/quill` on Unix/macOS,
//! `%APPDATA%\quill` on Windows.

use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "quill";

#[cfg(target_os = "windows")]
fn platform_config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_root() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// Per-user quill directory, if a home/config root can be found
pub fn config_dir() -> Option<PathBuf> {
    platform_config_root().map(|root| root.join(APP_DIR))
}

/// Default editor config file
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

/// Directory for the rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    std::fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create directory {}", logs.display()))?;
    Ok(logs)
}
