//! Session layer for Zeitbot.
//!
//! # Architecture
//!
//! - [`controller::SessionController`] — input buffer, single-flight gate,
//!   dispatch, and transcript updates for one conversation

pub mod controller;

// Re-export main types for convenience
pub use controller::{
    LogoutFn, RejectReason, SendResult, SessionController, SubmitOutcome, WELCOME_MESSAGE,
};
