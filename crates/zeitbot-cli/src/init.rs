//! `zeitbot init` — initialize configuration and data directory.
//!
//! - Creates `~/.zeitbot/config.json` with defaults
//! - Creates the history directory for the REPL

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use zeitbot_core::config::{load_config, save_config};
use zeitbot_core::utils::{get_data_path, get_history_path};

/// Run the init command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "⚡ Zeitbot — Setup".cyan().bold());
    println!();

    let config_path = get_data_path().join("config.json");

    // 1. Create config if it doesn't exist
    if ensure_config(&config_path)? {
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    }

    // 2. Create history directory
    let history_dir = get_history_path();
    std::fs::create_dir_all(&history_dir)?;
    println!("  {} history dir at {}", "✓".green(), history_dir.display());

    println!();
    println!(
        "{}",
        "  Setup complete! Run `zeitbot chat` to start asking questions.".green()
    );
    println!(
        "{}",
        format!(
            "  Point endpoint.baseUrl in {} at your Energy DB backend.",
            config_path.display()
        )
        .dimmed()
    );
    println!();

    Ok(())
}

/// Write a default config if none exists. Returns whether a file was created.
fn ensure_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let config = load_config(Some(path));
    save_config(&config, Some(path))?;
    Ok(true)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
