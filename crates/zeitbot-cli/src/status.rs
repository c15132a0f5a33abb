//! `zeitbot status` — show configuration and endpoint status.
//!
//! - Shows config path, resolved query URL, request parameters
//! - No network calls; this reads configuration only

use anyhow::Result;
use colored::Colorize;

use zeitbot_client::http_backend::HttpBackend;
use zeitbot_client::traits::QueryBackend;
use zeitbot_core::config::{get_config_path, load_config};

/// Run the status command.
pub fn run() -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "⚡ Zeitbot Status".cyan().bold());
    println!();

    // Config
    let config_exists = config_path.exists();
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Endpoint (resolved the same way chat resolves it)
    let backend = HttpBackend::new(&config.endpoint);
    println!("  {:<18} {}", "Endpoint:".bold(), backend.endpoint());

    // Request parameters
    let timeout = if config.endpoint.timeout_seconds == 0 {
        "disabled".to_string()
    } else {
        format!("{}s", config.endpoint.timeout_seconds)
    };
    println!(
        "  {:<18} {}",
        "Parameters:".bold(),
        format!("top_k: {} | timeout: {}", config.endpoint.top_k, timeout).dimmed(),
    );

    // UI
    println!(
        "  {:<18} {}",
        "Show SQL:".bold(),
        if config.ui.show_sql {
            "on".green().to_string()
        } else {
            "off".dimmed().to_string()
        }
    );

    println!();

    Ok(())
}
