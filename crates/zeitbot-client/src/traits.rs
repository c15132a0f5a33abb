//! Query backend trait — the seam between the session layer and HTTP.
//!
//! The real implementation is `HttpBackend` in `http_backend.rs`; tests swap
//! in scripted fakes.

use async_trait::async_trait;
use zeitbot_core::types::Answer;

use crate::error::QueryFailure;

/// A backend that can answer natural-language questions.
#[async_trait]
pub trait QueryBackend: Send + Sync {
    /// Send one question and wait for it to settle.
    ///
    /// # Arguments
    /// * `question` — The user's question, already trimmed and non-empty.
    ///
    /// # Returns
    /// The settled `Answer` on success. Every failure is a typed
    /// `QueryFailure`; this method never panics on bad backend behavior.
    async fn ask(&self, question: &str) -> Result<Answer, QueryFailure>;

    /// The resolved query URL, for logging and failure messages.
    fn endpoint(&self) -> &str;
}
