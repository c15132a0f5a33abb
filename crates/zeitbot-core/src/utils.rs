//! Utility helpers — path resolution for the Zeitbot data directory.

use std::path::PathBuf;

/// Get the Zeitbot data directory (e.g. `~/.zeitbot/`).
pub fn get_data_path() -> PathBuf {
    let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".zeitbot")
}

/// Get the REPL history directory (e.g. `~/.zeitbot/history/`).
pub fn get_history_path() -> PathBuf {
    get_data_path().join("history")
}

/// Helper to get home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("USERPROFILE").ok().map(PathBuf::from))
}
