//! Core building blocks for Zeitbot.
//!
//! # Architecture
//!
//! - [`types`] — transcript messages and the `/query` wire format
//! - [`log`] — append-only transcript with append notifications
//! - [`clock`] — injectable time source for message timestamps
//! - [`config`] — JSON config schema, loader, and env var overrides
//! - [`utils`] — data directory path helpers

pub mod clock;
pub mod config;
pub mod log;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use clock::{fixed_clock, system_clock, ClockFn};
pub use log::{AppendListenerFn, MessageLog};
pub use types::{Answer, ChatMessage, QueryRequest, QueryResponse, Sender, FALLBACK_ANSWER};
