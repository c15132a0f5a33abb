//! Shared CLI helpers — reply printing, version banner, thinking indicator.

use colored::Colorize;
use zeitbot_core::types::Answer;

/// Print a bot reply to stdout.
pub fn print_reply(text: &str) {
    println!();
    println!("{}", "⚡ Zeit".cyan().bold());
    if text.is_empty() {
        println!("{}", "(no response)".dimmed());
    } else {
        println!("{text}");
    }
    println!();
}

/// Format the SQL footnote for an answer, if it has SQL to show.
pub fn format_sql_note(answer: &Answer) -> Option<String> {
    let sql = answer.sql.as_deref()?;
    let note = match answer.row_count {
        Some(1) => format!("SQL: {sql} (1 row)"),
        Some(n) => format!("SQL: {sql} ({n} rows)"),
        None => format!("SQL: {sql}"),
    };
    Some(note)
}

/// Print the SQL footnote under a reply.
pub fn print_sql(answer: &Answer) {
    if let Some(note) = format_sql_note(answer) {
        println!("{}", note.dimmed());
        println!();
    }
}

/// Print the banner shown at REPL start.
pub fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", "⚡ Zeitbot".cyan().bold(), version.dimmed());
    println!(
        "{}",
        "Ask about your energy data. \"exit\" to quit, \"logout\" to end the session.".dimmed()
    );
    println!();
}

/// Print a "thinking" spinner placeholder (for non-log mode).
pub fn print_thinking() {
    eprint!("{}", "⠿ thinking...".dimmed());
}

/// Clear the "thinking" placeholder.
pub fn clear_thinking() {
    eprint!("\r{}\r", " ".repeat(40));
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
