//! Centralized configuration paths for markpad
//!
//! All per-user files live under:
//! - Unix/macOS: `~/.config/markpad/`
//! - Windows: `%APPDATA%\markpad\`
//!
//! This module is the single source of truth for these paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "markpad";

/// Base config directory for markpad
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/markpad`
///   - Else: `~/.config/markpad`
///
/// Windows:
///   - `%APPDATA%\markpad`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/markpad/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/markpad/documents.json`
pub fn documents_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("documents.json"))
}

/// `~/.config/markpad/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Returns the most recent log file in `~/.config/markpad/logs/`
/// (e.g., `markpad.log.2026-01-07`)
///
/// The logging system uses daily rotation, creating files like
/// `markpad.log.YYYY-MM-DD`. This function scans the logs directory and
/// returns the newest file.
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;

    let mut log_files: Vec<PathBuf> = fs::read_dir(&logs_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("markpad.log"))
                .unwrap_or(false)
        })
        .collect();

    // YYYY-MM-DD suffixes sort naturally; descending puts newest first
    log_files.sort_by(|a, b| b.cmp(a));

    log_files
        .into_iter()
        .next()
        .or_else(|| Some(logs_dir.join("markpad.log")))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
