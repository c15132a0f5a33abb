//! HTTP client for the Energy DB question-answering backend.
//!
//! One question in, one settled result out: `ask` POSTs the question to the
//! backend's `/query` endpoint and maps everything that can go wrong into a
//! `QueryFailure`. A well-formed reply with no answer text is still a
//! success; the fallback wording is applied by the `Answer` conversion.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

use zeitbot_core::config::schema::EndpointConfig;
use zeitbot_core::types::{Answer, QueryRequest, QueryResponse};

use crate::error::QueryFailure;
use crate::traits::QueryBackend;

// ─────────────────────────────────────────────
// HttpBackend
// ─────────────────────────────────────────────

/// Talks to the backend's `/query` endpoint over HTTP.
pub struct HttpBackend {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// Full query URL, resolved once at construction.
    url: String,
    /// Retrieval depth sent with every question.
    top_k: u32,
}

impl std::fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBackend")
            .field("url", &self.url)
            .field("top_k", &self.top_k)
            .finish()
    }
}

impl HttpBackend {
    /// Create a new HttpBackend from endpoint configuration.
    pub fn new(config: &EndpointConfig) -> Self {
        let base = config.base_url.trim_end_matches('/');
        let url = format!("{}/query", base);

        let mut builder = reqwest::Client::builder();
        if config.timeout_seconds > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_seconds));
        }
        let client = builder.build().expect("Failed to build HTTP client");

        HttpBackend {
            client,
            url,
            top_k: config.top_k,
        }
    }
}

#[async_trait]
impl QueryBackend for HttpBackend {
    async fn ask(&self, question: &str) -> Result<Answer, QueryFailure> {
        debug!(endpoint = %self.url, chars = question.len(), "Sending question");

        let request_body = QueryRequest::new(question, self.top_k);

        let result = self
            .client
            .post(&self.url)
            .json(&request_body)
            .send()
            .await;

        let response = match result {
            Ok(resp) => resp,
            Err(e) => {
                error!(endpoint = %self.url, error = %e, "HTTP request failed");
                if e.is_connect() || e.is_timeout() {
                    return Err(QueryFailure::Unreachable {
                        endpoint: self.url.clone(),
                    });
                }
                return Err(QueryFailure::Unclassified {
                    detail: e.to_string(),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(
                endpoint = %self.url,
                status = %status,
                body = %error_text,
                "Backend error"
            );
            return Err(QueryFailure::Server {
                status: status.as_u16(),
            });
        }

        match response.json::<QueryResponse>().await {
            Ok(query_resp) => {
                let answer: Answer = query_resp.into();
                debug!(
                    endpoint = %self.url,
                    has_sql = answer.sql.is_some(),
                    rows = ?answer.row_count,
                    "Answer received"
                );
                Ok(answer)
            }
            Err(e) => {
                error!(endpoint = %self.url, error = %e, "Failed to parse backend response");
                Err(QueryFailure::Unclassified {
                    detail: format!("invalid response body: {}", e),
                })
            }
        }
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
