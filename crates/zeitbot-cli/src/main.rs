//! Zeitbot CLI — entry point.
//!
//! # Commands
//!
//! - `zeitbot chat [-m MESSAGE]` — ask questions (single-shot or REPL)
//! - `zeitbot init` — initialize config and data directory
//! - `zeitbot status` — show configuration and endpoint

mod helpers;
mod init;
mod repl;
mod status;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use zeitbot_client::http_backend::HttpBackend;
use zeitbot_client::traits::QueryBackend;
use zeitbot_core::clock::system_clock;
use zeitbot_core::config::{load_config, Config};
use zeitbot_session::controller::{SendResult, SessionController};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// ⚡ Zeitbot — terminal client for the Energy DB assistant
#[derive(Parser)]
#[command(name = "zeitbot", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask about your energy data (single-shot or interactive REPL)
    Chat {
        /// Single question (non-interactive). Omit for REPL mode.
        #[arg(short, long)]
        message: Option<String>,

        /// Also print the SQL behind each answer
        #[arg(long, default_value_t = false)]
        show_sql: bool,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Initialize configuration and data directory
    Init,

    /// Show configuration and endpoint status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            message,
            show_sql,
            logs,
        } => {
            init_logging(logs);
            run_chat(message, show_sql).await
        }
        Commands::Init => init::run(),
        Commands::Status => status::run(),
    }
}

// ─────────────────────────────────────────────
// Chat command
// ─────────────────────────────────────────────

async fn run_chat(message: Option<String>, show_sql: bool) -> Result<()> {
    let config = load_config(None);
    let show_sql = show_sql || config.ui.show_sql;
    let backend = build_backend(&config);

    match message {
        Some(msg) => {
            // Single-shot mode
            info!("processing single question");
            let mut controller = SessionController::new(backend, system_clock(), None);
            controller.set_input(msg);

            match controller.send().await {
                SendResult::Ignored(_) => {
                    eprintln!("Nothing to ask: the message is empty.");
                }
                SendResult::Settled(result) => {
                    // The transcript already holds the reply, classified or not.
                    if let Some(reply) = controller.transcript().last() {
                        helpers::print_reply(&reply.text);
                    }
                    if show_sql {
                        if let Ok(answer) = &result {
                            helpers::print_sql(answer);
                        }
                    }
                }
            }
            Ok(())
        }
        None => {
            // Interactive REPL mode
            repl::run(backend, show_sql).await
        }
    }
}

/// Build the HTTP backend from the loaded configuration.
fn build_backend(config: &Config) -> Arc<dyn QueryBackend> {
    Arc::new(HttpBackend::new(&config.endpoint))
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("zeitbot_core=debug,zeitbot_client=debug,zeitbot_session=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
