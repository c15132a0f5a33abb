//! Session controller — the conversational core.
//!
//! Owns the input buffer, the single-flight gate, and the transcript. One
//! accepted submission produces exactly one dispatch and exactly one bot
//! reply, success or failure, and settlement always re-opens the gate.

use std::sync::Arc;
use tracing::{debug, warn};

use zeitbot_client::error::{classify, QueryFailure};
use zeitbot_client::traits::QueryBackend;
use zeitbot_core::clock::ClockFn;
use zeitbot_core::log::{AppendListenerFn, MessageLog};
use zeitbot_core::types::{Answer, ChatMessage};

/// First message of every session, appended before any user input.
pub const WELCOME_MESSAGE: &str =
    "Hi 😊 I'm Zeit. Ask me anything about your energy data.";

/// Callback invoked when the user ends the session.
pub type LogoutFn = Arc<dyn Fn() + Send + Sync>;

// ─────────────────────────────────────────────
// Submission outcomes
// ─────────────────────────────────────────────

/// Why a submission was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// The input buffer was empty or whitespace-only.
    Blank,
    /// A previous submission has not settled yet.
    Busy,
}

/// Result of asking the controller to submit the current buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was accepted; `question` is what will be dispatched.
    Accepted { question: String },
    /// Nothing happened. The buffer and transcript are unchanged.
    Rejected(RejectReason),
}

/// Result of a full submit-dispatch-settle cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum SendResult {
    /// The submission was rejected; nothing was dispatched.
    Ignored(RejectReason),
    /// The dispatch settled. The transcript already has the bot's reply.
    Settled(Result<Answer, QueryFailure>),
}

// ─────────────────────────────────────────────
// SessionController
// ─────────────────────────────────────────────

/// Drives one conversation: buffers input, gates dispatch to a single
/// outstanding question, and appends every exchange to the transcript.
pub struct SessionController {
    /// Where questions go.
    backend: Arc<dyn QueryBackend>,
    /// The transcript. Seeded with the welcome message.
    log: MessageLog,
    /// The user's draft, as typed.
    input: String,
    /// Whether a dispatched question has not settled yet.
    in_flight: bool,
    /// Source of message timestamps.
    clock: ClockFn,
    /// Invoked by `logout()`, if set.
    on_logout: Option<LogoutFn>,
}

impl SessionController {
    /// Create a controller with a welcome-seeded transcript.
    pub fn new(backend: Arc<dyn QueryBackend>, clock: ClockFn, on_logout: Option<LogoutFn>) -> Self {
        let mut log = MessageLog::new();
        log.append(ChatMessage::bot(WELCOME_MESSAGE, clock()));

        SessionController {
            backend,
            log,
            input: String::new(),
            in_flight: false,
            clock,
            on_logout,
        }
    }

    /// Replace the input buffer. Typing is never gated; only submission is.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The current input buffer, as typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a dispatched question is still outstanding.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// The transcript so far, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        self.log.snapshot()
    }

    /// Register a listener for future transcript appends.
    pub fn subscribe(&mut self, listener: AppendListenerFn) {
        self.log.subscribe(listener);
    }

    /// Try to submit the current buffer.
    ///
    /// On acceptance the trimmed question is appended as a user message, the
    /// buffer is cleared, and the gate closes until `on_settled`. A rejected
    /// submission changes nothing, including the buffer.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight {
            debug!("submission rejected, dispatch in flight");
            return SubmitOutcome::Rejected(RejectReason::Busy);
        }

        let question = self.input.trim().to_string();
        if question.is_empty() {
            debug!("submission rejected, blank input");
            return SubmitOutcome::Rejected(RejectReason::Blank);
        }

        let now = (self.clock)();
        self.log.append(ChatMessage::user(question.clone(), now));
        self.input.clear();
        self.in_flight = true;

        debug!(chars = question.len(), "submission accepted");
        SubmitOutcome::Accepted { question }
    }

    /// Settle the outstanding dispatch.
    ///
    /// Appends exactly one bot message (the answer text, or the classified
    /// failure wording) and re-opens the gate. Callers pair this with an
    /// accepted `submit`; `send` does so automatically.
    pub fn on_settled(&mut self, result: &Result<Answer, QueryFailure>) -> ChatMessage {
        let text = match result {
            Ok(answer) => answer.text.clone(),
            Err(failure) => classify(failure),
        };

        let message = ChatMessage::bot(text, (self.clock)());
        self.log.append(message.clone());
        self.in_flight = false;

        message
    }

    /// Run one full submit-dispatch-settle cycle.
    ///
    /// A rejected submission returns `Ignored` without touching the backend.
    /// Otherwise the question is dispatched and the settled result, already
    /// rendered into the transcript, is returned.
    pub async fn send(&mut self) -> SendResult {
        let question = match self.submit() {
            SubmitOutcome::Accepted { question } => question,
            SubmitOutcome::Rejected(reason) => return SendResult::Ignored(reason),
        };

        let backend = Arc::clone(&self.backend);
        let result = backend.ask(&question).await;

        if let Err(ref failure) = result {
            warn!(backend = backend.endpoint(), failure = %failure, "dispatch failed");
        }

        self.on_settled(&result);
        SendResult::Settled(result)
    }

    /// End the session. Invokes the logout callback, if one was provided.
    pub fn logout(&self) {
        debug!("logout requested");
        if let Some(callback) = &self.on_logout {
            callback();
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
