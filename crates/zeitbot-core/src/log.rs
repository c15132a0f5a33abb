//! Append-only conversation transcript.
//!
//! `MessageLog` is the single source of truth for what is on screen. It only
//! ever grows: there is no API to remove or rewrite an entry. Renderers
//! subscribe to appends and redraw from the notification, instead of polling.

use crate::types::ChatMessage;
use std::sync::Arc;

/// Callback invoked for every appended message, after it is in the log.
pub type AppendListenerFn = Arc<dyn Fn(&ChatMessage) + Send + Sync>;

/// Ordered, append-only message history with append notifications.
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    listeners: Vec<AppendListenerFn>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        MessageLog {
            messages: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Append a message and notify every listener, in subscription order.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
        if let Some(committed) = self.messages.last() {
            for listener in &self.listeners {
                listener(committed);
            }
        }
    }

    /// Register a listener for future appends. Existing entries are not
    /// replayed; callers wanting them read `snapshot()` first.
    pub fn subscribe(&mut self, listener: AppendListenerFn) {
        self.listeners.push(listener);
    }

    /// The full transcript, oldest first.
    pub fn snapshot(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log has no messages yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        MessageLog::new()
    }
}
