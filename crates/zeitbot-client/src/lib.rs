//! Backend client layer for Zeitbot.
//!
//! # Architecture
//!
//! - [`traits::QueryBackend`] — trait the session layer dispatches through
//! - [`http_backend::HttpBackend`] — reqwest client for the `/query` endpoint
//! - [`error`] — typed failures + the total failure → wording classifier

pub mod error;
pub mod http_backend;
pub mod traits;

// Re-export main types for convenience
pub use error::{classify, QueryFailure};
pub use http_backend::HttpBackend;
pub use traits::QueryBackend;
