//! Typed dispatch failures and their user-facing wording.
//!
//! Every way a question can fail is captured as a `QueryFailure`, and
//! `classify` turns each one into the sentence shown in the transcript. The
//! mapping is total: a new variant will not compile until it has wording.

use thiserror::Error;

/// Why a dispatched question did not produce an answer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryFailure {
    /// The backend could not be reached at all (refused, DNS, timed out).
    #[error("cannot reach backend at {endpoint}")]
    Unreachable { endpoint: String },

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned HTTP {status}")]
    Server { status: u16 },

    /// Anything else, including undecodable response bodies.
    #[error("{detail}")]
    Unclassified { detail: String },
}

/// Map a failure to the message rendered as the bot's reply.
///
/// Pure text selection, no I/O. Each variant gets distinct wording so a user
/// can tell "backend down" from "backend broken" at a glance.
pub fn classify(failure: &QueryFailure) -> String {
    match failure {
        QueryFailure::Unreachable { endpoint } => format!(
            "⚠️ I can't reach the Energy DB backend at {endpoint}. \
             Check that the server is running, then ask again."
        ),
        QueryFailure::Server { status } => format!(
            "The backend hit an error while answering (HTTP {status}). \
             Please try again in a moment."
        ),
        QueryFailure::Unclassified { .. } => {
            "Something went wrong while answering your question. Please try again.".to_string()
        }
    }
}
