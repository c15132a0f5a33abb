//! Core types for Zeitbot — the chat transcript model and the wire format
//! of the Energy DB question-answering API.
//!
//! The transcript types (`Sender`, `ChatMessage`) are what the session layer
//! and the terminal UI work with. The wire types (`QueryRequest`,
//! `QueryResponse`) match the backend's `/query` endpoint exactly; `Answer`
//! is the cleaned-up form the rest of the application consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a reply when the backend answers without any answer
/// text. Rendered as a normal bot message, not as a failure.
pub const FALLBACK_ANSWER: &str =
    "Sorry, I couldn't come up with an answer for that. Try rephrasing your question.";

// ─────────────────────────────────────────────
// Transcript messages
// ─────────────────────────────────────────────

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in the conversation transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        ChatMessage {
            sender: Sender::User,
            text: text.into(),
            timestamp: at,
        }
    }

    /// Create a bot message.
    pub fn bot(text: impl Into<String>, at: DateTime<Utc>) -> Self {
        ChatMessage {
            sender: Sender::Bot,
            text: text.into(),
            timestamp: at,
        }
    }

    /// Whether this message came from the bot.
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

// ─────────────────────────────────────────────
// Wire format (backend /query endpoint)
// ─────────────────────────────────────────────

/// Request body for the backend's `/query` endpoint.
#[derive(Debug, Serialize)]
pub struct QueryRequest {
    /// The user's question, verbatim.
    pub question: String,
    /// How many retrieval candidates the backend should consider.
    pub top_k: u32,
}

impl QueryRequest {
    /// Build a request for a single question.
    pub fn new(question: impl Into<String>, top_k: u32) -> Self {
        QueryRequest {
            question: question.into(),
            top_k,
        }
    }
}

/// Raw response body from the backend's `/query` endpoint.
///
/// Every field is optional on the way in: the backend omits or blanks
/// fields depending on how the question was resolved, and a missing field
/// must never fail the decode.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    /// The SQL the backend generated to answer the question, if any.
    #[serde(default)]
    pub sql: Option<String>,
    /// Raw result rows backing the answer.
    #[serde(default)]
    pub rows: Option<Vec<serde_json::Value>>,
    /// The natural-language answer.
    #[serde(default)]
    pub answer: Option<String>,
}

/// A settled answer, ready to be rendered as a bot message.
#[derive(Clone, Debug, PartialEq)]
pub struct Answer {
    /// Answer text. Never empty: a blank or missing backend answer is
    /// replaced with [`FALLBACK_ANSWER`].
    pub text: String,
    /// Generated SQL, when the backend ran a query (blank SQL is dropped).
    pub sql: Option<String>,
    /// Number of result rows behind the answer, when the backend sent them.
    pub row_count: Option<usize>,
}

impl From<QueryResponse> for Answer {
    fn from(resp: QueryResponse) -> Self {
        let text = resp
            .answer
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_ANSWER.to_string());

        Answer {
            text,
            sql: resp.sql.filter(|s| !s.trim().is_empty()),
            row_count: resp.rows.map(|rows| rows.len()),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ts() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    // ── Transcript messages ──

    #[test]
    fn test_user_message_construction() {
        let msg = ChatMessage::user("How much energy did we use in May?", ts());

        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "How much energy did we use in May?");
        assert_eq!(msg.timestamp, ts());
        assert!(!msg.is_bot());
    }

    #[test]
    fn test_bot_message_construction() {
        let msg = ChatMessage::bot("You used 1,204 kWh.", ts());

        assert_eq!(msg.sender, Sender::Bot);
        assert!(msg.is_bot());
    }

    // ── QueryRequest serialization ──

    #[test]
    fn test_query_request_serialization() {
        let request = QueryRequest::new("total consumption in 2023?", 3);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({"question": "total consumption in 2023?", "top_k": 3})
        );
    }

    #[test]
    fn test_query_request_preserves_question_verbatim() {
        let request = QueryRequest::new("  what about Q2? ", 5);
        let json = serde_json::to_value(&request).unwrap();

        // The request layer does not trim; callers decide what to send.
        assert_eq!(json["question"], "  what about Q2? ");
        assert_eq!(json["top_k"], 5);
    }

    // ── QueryResponse deserialization ──

    #[test]
    fn test_query_response_full_body() {
        let json = json!({
            "sql": "SELECT SUM(kwh) FROM usage",
            "rows": [[1204.5]],
            "answer": "You used 1,204.5 kWh."
        });
        let resp: QueryResponse = serde_json::from_value(json).unwrap();

        assert_eq!(resp.sql.as_deref(), Some("SELECT SUM(kwh) FROM usage"));
        assert_eq!(resp.rows.as_ref().map(|r| r.len()), Some(1));
        assert_eq!(resp.answer.as_deref(), Some("You used 1,204.5 kWh."));
    }

    #[test]
    fn test_query_response_tolerates_missing_fields() {
        let resp: QueryResponse = serde_json::from_value(json!({})).unwrap();

        assert!(resp.sql.is_none());
        assert!(resp.rows.is_none());
        assert!(resp.answer.is_none());
    }

    #[test]
    fn test_query_response_tolerates_null_fields() {
        let json = json!({"sql": null, "rows": null, "answer": null});
        let resp: QueryResponse = serde_json::from_value(json).unwrap();

        assert!(resp.answer.is_none());
    }

    // ── QueryResponse → Answer ──

    #[test]
    fn test_answer_from_full_response() {
        let resp: QueryResponse = serde_json::from_value(json!({
            "sql": "SELECT COUNT(*) FROM meters",
            "rows": [[12], [13]],
            "answer": "There are 25 meters."
        }))
        .unwrap();
        let answer: Answer = resp.into();

        assert_eq!(answer.text, "There are 25 meters.");
        assert_eq!(answer.sql.as_deref(), Some("SELECT COUNT(*) FROM meters"));
        assert_eq!(answer.row_count, Some(2));
    }

    #[test]
    fn test_answer_falls_back_when_answer_missing() {
        let resp: QueryResponse = serde_json::from_value(json!({})).unwrap();
        let answer: Answer = resp.into();

        assert_eq!(answer.text, FALLBACK_ANSWER);
        assert!(answer.sql.is_none());
        assert!(answer.row_count.is_none());
    }

    #[test]
    fn test_answer_falls_back_when_answer_blank() {
        let resp: QueryResponse =
            serde_json::from_value(json!({"answer": "   \n "})).unwrap();
        let answer: Answer = resp.into();

        assert_eq!(answer.text, FALLBACK_ANSWER);
    }

    #[test]
    fn test_answer_keeps_real_text_untouched() {
        let resp: QueryResponse =
            serde_json::from_value(json!({"answer": "42 kWh"})).unwrap();
        let answer: Answer = resp.into();

        assert_eq!(answer.text, "42 kWh");
    }

    #[test]
    fn test_answer_drops_blank_sql() {
        let resp: QueryResponse =
            serde_json::from_value(json!({"sql": "", "answer": "Hi 😊"})).unwrap();
        let answer: Answer = resp.into();

        assert!(answer.sql.is_none());
    }

    #[test]
    fn test_answer_counts_empty_rows() {
        let resp: QueryResponse =
            serde_json::from_value(json!({"rows": [], "answer": "Nothing found."}))
                .unwrap();
        let answer: Answer = resp.into();

        assert_eq!(answer.row_count, Some(0));
    }
}
