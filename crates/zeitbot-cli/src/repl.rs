//! Interactive chat REPL.
//!
//! Uses `rustyline` for readline-style editing with persistent history.
//! Replies are rendered from transcript appends, so whatever lands in the
//! log is exactly what the user sees.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use zeitbot_client::traits::QueryBackend;
use zeitbot_core::clock::system_clock;
use zeitbot_session::controller::{SendResult, SessionController};

use crate::helpers;

/// Exit commands (case-insensitive match).
const EXIT_COMMANDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];

/// Logout commands (case-insensitive match).
const LOGOUT_COMMANDS: &[&str] = &["logout", "/logout"];

/// Run the interactive chat loop.
pub async fn run(backend: Arc<dyn QueryBackend>, show_sql: bool) -> Result<()> {
    helpers::print_banner();

    let logged_out = Arc::new(AtomicBool::new(false));
    let logout_flag = logged_out.clone();
    let mut controller = SessionController::new(
        backend,
        system_clock(),
        Some(Arc::new(move || logout_flag.store(true, Ordering::SeqCst))),
    );

    // Render every future bot append. User input echoes at the prompt.
    controller.subscribe(Arc::new(|message| {
        if message.is_bot() {
            helpers::clear_thinking();
            helpers::print_reply(&message.text);
        }
    }));

    // Replay what the transcript already holds (the welcome message).
    for message in controller.transcript() {
        if message.is_bot() {
            helpers::print_reply(&message.text);
        }
    }

    let mut editor = create_editor()?;

    loop {
        if logged_out.load(Ordering::SeqCst) {
            println!("\nSession ended. Goodbye! 👋");
            break;
        }

        // Read input
        let input = match editor.readline("You: ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted) => {
                // Ctrl-C — exit cleanly
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                // Ctrl-D — exit cleanly
                break;
            }
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Check exit commands
        if is_exit_command(trimmed) {
            println!("\nGoodbye! 👋");
            break;
        }

        // Check logout commands (the flag is observed at the top of the loop)
        if is_logout_command(trimmed) {
            controller.logout();
            continue;
        }

        // Add to history
        let _ = editor.add_history_entry(&input);

        // Dispatch the question
        debug!(input = trimmed, "processing question");
        helpers::print_thinking();

        controller.set_input(trimmed);
        match controller.send().await {
            SendResult::Settled(Ok(answer)) => {
                if show_sql {
                    helpers::print_sql(&answer);
                }
            }
            SendResult::Settled(Err(_)) => {
                // The classified wording is already rendered from the log.
            }
            SendResult::Ignored(_) => {
                helpers::clear_thinking();
            }
        }
    }

    // Save history
    save_history(&mut editor);

    Ok(())
}

/// Create a rustyline editor with history.
fn create_editor() -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;

    // Load history from ~/.zeitbot/history/chat_history
    let history_path = history_path();
    if history_path.exists() {
        let _ = editor.load_history(&history_path);
        debug!("loaded REPL history from {}", history_path.display());
    }

    Ok(editor)
}

/// Save history to disk.
fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

/// Path to the history file.
fn history_path() -> std::path::PathBuf {
    zeitbot_core::utils::get_history_path().join("chat_history")
}

/// Check if input is an exit command.
fn is_exit_command(input: &str) -> bool {
    let lower = input.to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

/// Check if input is a logout command.
fn is_logout_command(input: &str) -> bool {
    let lower = input.to_lowercase();
    LOGOUT_COMMANDS.contains(&lower.as_str())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
